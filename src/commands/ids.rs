use clap::Args;
use serde::Serialize;

use lodex::log_status;
use lodex::validation::{require_at_most, require_positive};
use lodex::UuidGenerator;

use super::{CmdResult, GlobalArgs};

/// Upper bound for a single `lodex uuid` invocation.
pub const MAX_UUID_COUNT: usize = 100_000;

#[derive(Args)]
pub struct UuidArgs {
    /// How many UUIDs to generate (default from config, 1 otherwise)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Seed for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct IsUuidArgs {
    /// String to validate as a version 4 UUID
    pub candidate: String,
}

#[derive(Serialize)]
pub struct UuidOutput {
    pub uuids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct IsUuidOutput {
    pub candidate: String,
    pub valid: bool,
}

pub fn run(args: UuidArgs, global: &GlobalArgs) -> CmdResult<UuidOutput> {
    let count = require_positive(
        args.count.unwrap_or(global.config.defaults.uuid_count),
        "count",
    )?;
    let count = require_at_most(count, MAX_UUID_COUNT, "count")?;

    let uuids: Vec<String> = match args.seed {
        Some(seed) => UuidGenerator::seeded(seed).take(count).collect(),
        None => (0..count).map(|_| lodex::uuid()).collect(),
    };

    log_status!("uuid", "Generated {} uuid(s)", uuids.len());

    Ok((
        UuidOutput {
            uuids,
            seed: args.seed,
        },
        0,
    ))
}

/// Exits 1 when the candidate is not a v4 UUID so scripts can branch on it.
pub fn run_check(args: IsUuidArgs) -> CmdResult<IsUuidOutput> {
    let valid = lodex::is_uuid(&args.candidate);
    let exit_code = if valid { 0 } else { 1 };

    Ok((
        IsUuidOutput {
            candidate: args.candidate,
            valid,
        },
        exit_code,
    ))
}
