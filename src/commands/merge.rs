use clap::Args;
use serde_json::Value;

use lodex::json::parse_json_spec;

use super::CmdResult;

#[derive(Args)]
pub struct MergeArgs {
    /// Source record (JSON, @file, or - for stdin)
    pub src: String,

    /// Record merged over the source (JSON, @file, or - for stdin)
    pub dest: String,
}

pub fn run(args: MergeArgs) -> CmdResult<Value> {
    let src = parse_json_spec(&args.src, "src")?;
    let dest = parse_json_spec(&args.dest, "dest")?;

    Ok((lodex::immutable_merge(&src, &dest), 0))
}
