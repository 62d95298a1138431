use clap::Args;
use serde::Serialize;

use lodex::json::{parse_json_spec, parse_literal};
use lodex::validation::require_object;
use lodex::FormatParams;

use super::CmdResult;

#[derive(Args)]
pub struct FormatArgs {
    /// Template containing {} or {name} markers
    pub template: String,

    /// Positional values; JSON literals are parsed, anything else is a string.
    /// A leading JSON object switches to named lookup.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Named values as a JSON object (JSON, @file, or - for stdin)
    #[arg(long, value_name = "JSON", conflicts_with = "args")]
    pub named: Option<String>,
}

#[derive(Serialize)]
pub struct FormatOutput {
    pub template: String,
    pub result: String,
}

pub fn run(args: FormatArgs) -> CmdResult<FormatOutput> {
    let params = match args.named {
        Some(spec) => {
            let named = parse_json_spec(&spec, "named")?;
            FormatParams::Named(require_object(&named, "named")?.clone())
        }
        None => FormatParams::from_args(args.args.iter().map(|raw| parse_literal(raw)).collect()),
    };

    let result = lodex::format(&args.template, &params);

    Ok((
        FormatOutput {
            template: args.template,
            result,
        },
        0,
    ))
}
