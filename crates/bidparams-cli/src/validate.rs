//! # Validate Subcommand
//!
//! Validates one bidder extension payload, read from a file or stdin.
//! On rejection, prints every violation followed by the bidder's schema,
//! which is what a caller debugging the payload needs to see.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use bidparams_core::{BidderName, BidderRegistry};
use bidparams_schema::{ParamValidationError, ValidatorConfig};
use clap::Args;

use crate::{load_validator, read_payload};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Bidder token, e.g. `appnexus`.
    pub bidder: BidderName,

    /// Payload file. Reads stdin when omitted or `-`.
    pub payload: Option<PathBuf>,

    /// Do not print the bidder's schema after a rejection.
    #[arg(long)]
    pub no_schema: bool,
}

/// Execute the validate subcommand. Exit code 1 if the payload is rejected.
pub fn run_validate(
    args: &ValidateArgs,
    registry: &BidderRegistry,
    config: &ValidatorConfig,
    out: &mut impl Write,
) -> Result<u8> {
    let validator = load_validator(registry, config)?;
    let payload = read_payload(args.payload.as_deref())?;

    match validator.validate(args.bidder, &payload) {
        Ok(()) => {
            writeln!(out, "OK")?;
            Ok(0)
        }
        Err(e @ ParamValidationError::ValidationFailed { .. }) => {
            writeln!(out, "INVALID {}:", args.bidder)?;
            writeln!(out, "{e}")?;
            if !args.no_schema {
                writeln!(out)?;
                writeln!(out, "Schema:")?;
                writeln!(out, "{}", validator.schema(args.bidder))?;
            }
            Ok(1)
        }
        Err(e) => {
            writeln!(out, "INVALID {}: {e}", args.bidder)?;
            Ok(1)
        }
    }
}
