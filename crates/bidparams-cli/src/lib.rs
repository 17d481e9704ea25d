//! # bidparams-cli — Bidder Param Schema Tooling
//!
//! Provides the `bidparams` command-line interface over the same loading
//! and validation path the request pipeline uses.
//!
//! ## Subcommands
//!
//! - `bidparams check` — load the schema directory as the server would at
//!   startup and report bound and missing bidders.
//! - `bidparams validate` — validate one payload for one bidder.
//! - `bidparams schema` — print a bidder's schema text.
//! - `bidparams bidders` — list the bidder registry.
//!
//! ```bash
//! bidparams --schema-dir static/bidder-params check --strict
//! echo '{"placementId": 123}' | bidparams validate appnexus
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers write to a
//!   caller-supplied writer and return the process exit code.
//! - No business logic here; everything delegates to `bidparams-schema`.

pub mod bidders;
pub mod check;
pub mod schema;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use bidparams_core::BidderRegistry;
use bidparams_schema::{ParamValidator, ValidatorConfig};

/// Build the validator exactly as a serving process would at startup.
pub fn load_validator(registry: &BidderRegistry, config: &ValidatorConfig) -> Result<ParamValidator> {
    ParamValidator::with_config(registry, config).with_context(|| {
        format!(
            "failed to load bidder param schemas from {}",
            config.schema_dir.display()
        )
    })
}

/// Read a payload from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_payload(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read(p).with_context(|| format!("cannot read payload {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read payload from stdin")?;
            Ok(buf)
        }
    }
}
