//! # Bidder Registry
//!
//! A frozen token → [`BidderName`] lookup, built once during process
//! initialization and passed by reference to whatever needs to resolve
//! bidder tokens (the param validator above all). There is no global
//! instance; callers own the value and share it immutably.
//!
//! ## Invariants
//!
//! - Keys are unique and every value's token equals its own key.
//! - The reserved [`BIDDER_NAME_GENERAL`] key is never present.
//! - No mutation after construction.

use std::collections::HashMap;

use crate::bidder::{BidderName, BIDDER_NAME_GENERAL};

/// Immutable mapping from bidder token to [`BidderName`].
#[derive(Debug, Clone)]
pub struct BidderRegistry {
    by_token: HashMap<&'static str, BidderName>,
}

impl BidderRegistry {
    /// Build the registry from the closed set of bidders.
    pub fn new() -> Self {
        let by_token: HashMap<&'static str, BidderName> = BidderName::all()
            .iter()
            .map(|bidder| (bidder.as_str(), *bidder))
            .collect();

        debug_assert_eq!(by_token.len(), BidderName::all().len(), "duplicate bidder token");
        debug_assert!(
            !by_token.contains_key(BIDDER_NAME_GENERAL),
            "{BIDDER_NAME_GENERAL:?} must never be registered as a bidder"
        );

        Self { by_token }
    }

    /// Resolve a token to its bidder. Matching is case-sensitive.
    pub fn lookup(&self, token: &str) -> Option<BidderName> {
        self.by_token.get(token).copied()
    }

    /// Returns true if `token` names a registered bidder.
    pub fn contains(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    /// Iterate over every registered bidder, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = BidderName> + '_ {
        self.by_token.values().copied()
    }

    /// Returns every registered bidder, in no particular order.
    pub fn bidder_list(&self) -> Vec<BidderName> {
        self.all().collect()
    }

    /// Number of registered bidders.
    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    /// Returns true if no bidders are registered.
    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

impl Default for BidderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
