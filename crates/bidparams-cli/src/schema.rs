//! # Schema Subcommand
//!
//! Prints the schema text bound to one bidder.

use std::io::Write;

use anyhow::Result;
use bidparams_core::{BidderName, BidderRegistry};
use bidparams_schema::ValidatorConfig;
use clap::Args;

use crate::load_validator;

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Bidder token, e.g. `appnexus`.
    pub bidder: BidderName,
}

/// Execute the schema subcommand. Exit code 1 if no schema is bound.
pub fn run_schema(
    args: &SchemaArgs,
    registry: &BidderRegistry,
    config: &ValidatorConfig,
    out: &mut impl Write,
) -> Result<u8> {
    let validator = load_validator(registry, config)?;
    let schema = validator.schema(args.bidder);
    if schema.is_empty() {
        tracing::warn!(bidder = %args.bidder, "no schema bound");
        return Ok(1);
    }
    out.write_all(schema.as_bytes())?;
    Ok(0)
}
