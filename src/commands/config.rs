use clap::{Args, Subcommand};
use serde::Serialize;

use lodex::defaults::{builtin_defaults, Defaults, LodexConfig};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show built-in defaults, ignoring any config file
        #[arg(long)]
        builtin: bool,
    },
    /// Show where the configuration is read from
    Path,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ConfigOutput {
    Show(ConfigShowOutput),
    Builtin(ConfigBuiltinOutput),
    Path(ConfigPathOutput),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigShowOutput {
    pub path: String,
    pub exists: bool,
    pub config: LodexConfig,
}

#[derive(Serialize)]
pub struct ConfigBuiltinOutput {
    pub defaults: Defaults,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPathOutput {
    pub path: String,
    pub exists: bool,
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = global.config_path.display().to_string();
    let exists = global.config_path.exists();

    let output = match args.command {
        ConfigCommand::Show { builtin: true } => ConfigOutput::Builtin(ConfigBuiltinOutput {
            defaults: builtin_defaults(),
        }),
        ConfigCommand::Show { builtin: false } => ConfigOutput::Show(ConfigShowOutput {
            path,
            exists,
            config: global.config.clone(),
        }),
        ConfigCommand::Path => ConfigOutput::Path(ConfigPathOutput { path, exists }),
    };

    Ok((output, 0))
}
