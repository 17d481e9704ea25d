//! # bidparams-schema — Bidder Param Validation
//!
//! Validates the per-bidder JSON payloads carried in a bid request's
//! `imp[i].ext` against one JSON Schema per registered bidder.
//!
//! ## Lifecycle
//!
//! 1. At startup, [`ParamValidator::new`] scans a flat directory of
//!    `<bidder>.json` documents, binds each to a [`BidderName`] from the
//!    [`BidderRegistry`], and compiles it. Any drift between the directory
//!    and the registry is a startup error.
//! 2. At request time, [`ParamValidator::validate`] checks a raw payload
//!    against the precompiled schema and [`ParamValidator::schema`] returns
//!    the schema text for error enrichment. Both are lock-free reads.
//!
//! ## Crate Policy
//!
//! - Depends only on `bidparams-core` internally.
//! - No network access: `$ref`s resolve within the schema directory.
//! - Construction is all-or-nothing; no partially loaded validator escapes.
//!
//! [`BidderName`]: bidparams_core::BidderName
//! [`BidderRegistry`]: bidparams_core::BidderRegistry

pub mod config;
pub mod error;
pub mod validator;

pub use config::{ValidatorConfig, DEFAULT_SCHEMA_DIR, SCHEMA_FILE_SUFFIX};
pub use error::{ParamValidationError, SchemaLoadError, ValidationViolations, Violation};
pub use validator::{BidderParamValidator, ParamValidator};
