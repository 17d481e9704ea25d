//! # bidparams-core — Partner Registry
//!
//! Defines the closed set of demand partners ("bidders") whose request
//! extension payloads are schema-validated, and the frozen token lookup
//! built from that set.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enum for partner identity.** `BidderName` has one variant per
//!    registered bidder. Dispatch on a bidder is an exhaustive `match`, not a
//!    string comparison.
//!
//! 2. **Explicit registry value.** `BidderRegistry` is constructed once at
//!    startup and passed by reference. It is never global and never mutated.
//!
//! 3. **Reserved `general` key.** `BIDDER_NAME_GENERAL` can never be a
//!    bidder, so maps keyed by bidder token can carry non-bidder messages
//!    under it without collision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bidparams-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bidder;
pub mod error;
pub mod registry;

pub use bidder::{BidderName, BIDDER_COUNT, BIDDER_NAME_GENERAL};
pub use error::CoreError;
pub use registry::BidderRegistry;
