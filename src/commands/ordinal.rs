use clap::Args;
use serde::Serialize;

use super::CmdResult;

#[derive(Args)]
pub struct OrdinalArgs {
    /// Number to suffix (fractions are floored)
    #[arg(allow_hyphen_values = true)]
    pub number: f64,

    /// Also render the number with its suffix, e.g. 142nd
    #[arg(long)]
    pub full: bool,
}

#[derive(Serialize)]
pub struct OrdinalOutput {
    pub number: f64,
    pub suffix: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<String>,
}

pub fn run(args: OrdinalArgs) -> CmdResult<OrdinalOutput> {
    let suffix = lodex::ordinal(args.number);

    let ordinal = if args.full {
        let floored = args.number.floor();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if !floored.is_finite() || floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
            return Err(lodex::Error::validation_invalid_argument(
                "number",
                "--full requires a finite number within the 64-bit integer range",
                Some(args.number.to_string()),
                None,
            ));
        }
        Some(lodex::with_ordinal(floored as i64))
    } else {
        None
    };

    Ok((
        OrdinalOutput {
            number: args.number,
            suffix,
            ordinal,
        },
        0,
    ))
}
