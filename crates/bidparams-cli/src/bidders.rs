//! # Bidders Subcommand
//!
//! Lists the bidder registry, sorted by token for display.

use std::io::Write;

use anyhow::Result;
use bidparams_core::{BidderName, BidderRegistry};
use clap::Args;

/// Arguments for the bidders subcommand.
#[derive(Args, Debug)]
pub struct BiddersArgs {
    /// Print as a JSON array instead of one token per line.
    #[arg(long)]
    pub json: bool,
}

/// Execute the bidders subcommand.
pub fn run_bidders(args: &BiddersArgs, registry: &BidderRegistry, out: &mut impl Write) -> Result<u8> {
    let mut bidders = registry.bidder_list();
    bidders.sort_by_key(|b| b.as_str());

    if args.json {
        serde_json::to_writer(&mut *out, &bidders)?;
        writeln!(out)?;
    } else {
        for bidder in &bidders {
            writeln!(out, "{bidder}")?;
        }
    }
    Ok(0)
}
