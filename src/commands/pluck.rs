use clap::Args;
use serde_json::Value;

use lodex::json::parse_json_spec;
use lodex::pluck::pluck_values_with;
use lodex::validation::require_array;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct PluckArgs {
    /// Array of records (JSON, @file, or - for stdin)
    pub sequence: String,

    /// Key or separator-delimited path, e.g. owner.name
    pub path: String,

    /// Path separator (default from config, '.' otherwise)
    #[arg(long)]
    pub separator: Option<char>,
}

pub fn run(args: PluckArgs, global: &GlobalArgs) -> CmdResult<Vec<Value>> {
    let sequence = parse_json_spec(&args.sequence, "sequence")?;
    let sequence = require_array(&sequence, "sequence")?;
    let separator = args
        .separator
        .unwrap_or(global.config.defaults.path_separator);

    Ok((pluck_values_with(sequence, &args.path, separator), 0))
}
