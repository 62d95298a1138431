use std::path::PathBuf;

use lodex::defaults::LodexConfig;

pub type CmdResult<T> = lodex::Result<(T, i32)>;

/// Settings shared by every command, resolved once in `main`.
pub(crate) struct GlobalArgs {
    pub config_path: PathBuf,
    pub config: LodexConfig,
}

pub mod config;
pub mod format;
pub mod ids;
pub mod merge;
pub mod ordinal;
pub mod pluck;
pub mod upsert;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (lodex::Result<serde_json::Value>, i32) {
    match command {
        // Commands without global context
        crate::Commands::Merge(args) => dispatch!(args, merge),
        crate::Commands::Upsert(args) => dispatch!(args, upsert),
        crate::Commands::Format(args) => dispatch!(args, format),
        crate::Commands::Ordinal(args) => dispatch!(args, ordinal),
        crate::Commands::IsUuid(args) => {
            crate::output::map_cmd_result_to_json(ids::run_check(args))
        }

        // Commands with global context
        crate::Commands::Uuid(args) => dispatch!(args, global, ids),
        crate::Commands::Pluck(args) => dispatch!(args, global, pluck),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
