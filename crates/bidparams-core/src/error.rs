//! # Error Types
//!
//! Errors raised by the partner registry. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error for bidder identifier parsing and lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The token does not name a registered bidder.
    #[error("unknown bidder: {0:?}")]
    UnknownBidder(String),
}
