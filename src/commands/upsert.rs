use clap::Args;
use serde_json::Value;

use lodex::json::parse_json_spec;
use lodex::validation::require_array;
use lodex::MatchesProperty;

use super::CmdResult;

#[derive(Args)]
pub struct UpsertArgs {
    /// Array of records (JSON, @file, or - for stdin)
    pub base: String,

    /// Record whose keys must all match, or any value compared whole
    #[arg(value_name = "MATCH")]
    pub matcher: String,

    /// Element appended after every match is removed
    pub replacement: String,

    /// Compare MATCH against the value at this dotted path instead
    #[arg(long, value_name = "PATH")]
    pub by: Option<String>,
}

pub fn run(args: UpsertArgs) -> CmdResult<Vec<Value>> {
    let base = parse_json_spec(&args.base, "base")?;
    let base = require_array(&base, "base")?;
    let matcher = parse_json_spec(&args.matcher, "match")?;
    let replacement = parse_json_spec(&args.replacement, "replacement")?;

    let result = match args.by {
        Some(path) => lodex::upsert(base, &MatchesProperty::new(path, matcher), replacement),
        None => lodex::upsert(base, &matcher, replacement),
    };

    Ok((result, 0))
}
