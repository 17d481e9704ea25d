//! Property tests for token lookup against the bidder registry.

use bidparams_core::{BidderName, BidderRegistry, BIDDER_NAME_GENERAL};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lookup_agrees_with_from_str(token in "[a-zA-Z0-9_]{0,24}") {
        let registry = BidderRegistry::new();
        let looked_up = registry.lookup(&token);
        let parsed = token.parse::<BidderName>().ok();
        prop_assert_eq!(looked_up, parsed);
    }

    #[test]
    fn found_bidders_keep_their_token(token in "[a-z0-9_]{1,20}") {
        let registry = BidderRegistry::new();
        if let Some(bidder) = registry.lookup(&token) {
            prop_assert_eq!(bidder.as_str(), token.as_str());
        }
    }

    #[test]
    fn registered_token_survives_json(idx in 0usize..BidderName::all().len()) {
        let bidder = BidderName::all()[idx];
        let json = serde_json::to_string(&bidder).unwrap();
        let back: BidderName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, bidder);
        let raw: String = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(raw, bidder.as_str());
    }
}

#[test]
fn general_never_resolves() {
    let registry = BidderRegistry::new();
    assert!(registry.lookup(BIDDER_NAME_GENERAL).is_none());
    assert!(registry.all().all(|b| b.as_str() != BIDDER_NAME_GENERAL));
}
