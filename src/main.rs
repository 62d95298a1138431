use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::GlobalArgs;

mod commands;
mod output;

use commands::{config, format, ids, merge, ordinal, pluck, upsert};
use lodex::defaults::{config_path, load_config, load_config_from};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "lodex")]
#[command(version = VERSION)]
#[command(about = "Deep merge, upsert, templating, ordinals, UUIDs and plucks over JSON values")]
struct Cli {
    /// Config file (defaults to $LODEX_CONFIG, then ./lodex.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print compact JSON regardless of config
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep-merge one record over a copy of another
    Merge(merge::MergeArgs),
    /// Remove every matching element and append a replacement
    Upsert(upsert::UpsertArgs),
    /// Fill {} or {name} markers in a template
    Format(format::FormatArgs),
    /// English ordinal suffix of a number
    Ordinal(ordinal::OrdinalArgs),
    /// Generate version 4 UUIDs
    Uuid(ids::UuidArgs),
    /// Check whether a string is a version 4 UUID
    IsUuid(ids::IsUuidArgs),
    /// Extract a key or dotted path from every element
    Pluck(pluck::PluckArgs),
    /// Inspect lodex configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // An explicitly requested config must load; implicit lookups fall back to defaults.
    let config = match cli.config.as_deref() {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(err) => {
                let (json_result, exit_code) =
                    output::map_cmd_result_to_json::<serde_json::Value>(Err(err));
                let _ = output::print_result(json_result, !cli.compact);
                return std::process::ExitCode::from(exit_code_to_u8(exit_code));
            }
        },
        None => load_config(None),
    };

    let pretty = !cli.compact && config.defaults.pretty_output;
    let global = GlobalArgs {
        config_path: config_path(cli.config.as_deref()),
        config,
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if output::print_result(json_result, pretty).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
