//! # Check Subcommand
//!
//! Loads the schema directory the way a serving process does at startup
//! and reports which bidders are bound and which have no schema.

use std::io::Write;

use anyhow::Result;
use bidparams_core::BidderRegistry;
use bidparams_schema::ValidatorConfig;
use clap::Args;

use crate::load_validator;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Fail if any registered bidder has no schema file.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code 1 if the directory would prevent startup.
pub fn run_check(
    args: &CheckArgs,
    registry: &BidderRegistry,
    config: &ValidatorConfig,
    out: &mut impl Write,
) -> Result<u8> {
    let mut config = config.clone();
    config.require_all_bidders |= args.strict;

    let validator = match load_validator(registry, &config) {
        Ok(v) => v,
        Err(e) => {
            writeln!(out, "FAIL: {e:#}")?;
            return Ok(1);
        }
    };

    let bound = validator.bidders();
    let missing = validator.missing(registry);

    writeln!(out, "Schema directory: {}", validator.schema_dir().display())?;
    writeln!(out, "Bound: {} of {} bidders", bound.len(), registry.len())?;
    for bidder in &bound {
        writeln!(out, "  {bidder}")?;
    }
    if !missing.is_empty() {
        writeln!(out, "Missing schema: {} bidders", missing.len())?;
        for bidder in &missing {
            writeln!(out, "  {bidder}")?;
        }
    }
    writeln!(out, "OK")?;
    Ok(0)
}
