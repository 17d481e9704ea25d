//! # Bidder Names
//!
//! Defines `BidderName`, the closed set of demand partners whose request
//! extension payloads are validated against a per-bidder JSON Schema.
//! Every `match` on `BidderName` is exhaustive, so adding a bidder forces
//! each consumer to handle it at compile time.
//!
//! ## Invariants
//!
//! - Tokens are case-sensitive and must coincide with the bidder codes used
//!   by the client-side header bidding library, where one exists.
//! - `as_str()`, `FromStr` and the serde representation all agree on the
//!   same token, so a `BidderName` round-trips through JSON as a bare string.
//! - [`BIDDER_NAME_GENERAL`] is never a variant. It is reserved for messages
//!   keyed by bidder that are not specific to any one bidder.
//!
//! Keep the variants alphabetized by token to minimize merge conflicts
//! among adapter submissions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Reserved key for non-bidder-specific messages in maps keyed by bidder.
pub const BIDDER_NAME_GENERAL: &str = "general";

/// Total number of registered bidders.
pub const BIDDER_COUNT: usize = 68;

/// A registered demand partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BidderName {
    #[serde(rename = "33across")]
    ThirtyThreeAcross,
    #[serde(rename = "adform")]
    Adform,
    #[serde(rename = "adgeneration")]
    Adgeneration,
    #[serde(rename = "adkernel")]
    Adkernel,
    #[serde(rename = "adkernelAdn")]
    AdkernelAdn,
    #[serde(rename = "admixer")]
    Admixer,
    #[serde(rename = "adocean")]
    AdOcean,
    #[serde(rename = "adoppler")]
    Adoppler,
    #[serde(rename = "adpone")]
    Adpone,
    #[serde(rename = "adtelligent")]
    Adtelligent,
    #[serde(rename = "advangelists")]
    Advangelists,
    #[serde(rename = "aja")]
    Aja,
    #[serde(rename = "applogy")]
    Applogy,
    #[serde(rename = "appnexus")]
    Appnexus,
    #[serde(rename = "audienceNetwork")]
    AudienceNetwork,
    #[serde(rename = "beachfront")]
    Beachfront,
    #[serde(rename = "beintoo")]
    Beintoo,
    #[serde(rename = "brightroll")]
    Brightroll,
    #[serde(rename = "consumable")]
    Consumable,
    #[serde(rename = "conversant")]
    Conversant,
    #[serde(rename = "cpmstar")]
    Cpmstar,
    #[serde(rename = "datablocks")]
    Datablocks,
    #[serde(rename = "emx_digital")]
    EmxDigital,
    #[serde(rename = "engagebdr")]
    EngageBdr,
    #[serde(rename = "eplanning")]
    EPlanning,
    #[serde(rename = "gamma")]
    Gamma,
    #[serde(rename = "gamoshi")]
    Gamoshi,
    #[serde(rename = "grid")]
    Grid,
    #[serde(rename = "gumgum")]
    GumGum,
    #[serde(rename = "improvedigital")]
    Improvedigital,
    #[serde(rename = "ix")]
    Ix,
    #[serde(rename = "kidoz")]
    Kidoz,
    #[serde(rename = "kubient")]
    Kubient,
    #[serde(rename = "lifestreet")]
    Lifestreet,
    #[serde(rename = "lockerdome")]
    LockerDome,
    #[serde(rename = "lunamedia")]
    LunaMedia,
    #[serde(rename = "marsmedia")]
    Marsmedia,
    #[serde(rename = "mgid")]
    Mgid,
    #[serde(rename = "nanointeractive")]
    NanoInteractive,
    #[serde(rename = "ninthdecimal")]
    NinthDecimal,
    #[serde(rename = "openx")]
    Openx,
    #[serde(rename = "orbidder")]
    Orbidder,
    #[serde(rename = "pubmatic")]
    Pubmatic,
    #[serde(rename = "pubnative")]
    Pubnative,
    #[serde(rename = "pulsepoint")]
    Pulsepoint,
    #[serde(rename = "rhythmone")]
    Rhythmone,
    #[serde(rename = "rtbhouse")]
    RtbHouse,
    #[serde(rename = "rubicon")]
    Rubicon,
    #[serde(rename = "sharethrough")]
    Sharethrough,
    #[serde(rename = "smartrtb")]
    SmartRtb,
    #[serde(rename = "somoaudience")]
    Somoaudience,
    #[serde(rename = "sonobi")]
    Sonobi,
    #[serde(rename = "sovrn")]
    Sovrn,
    #[serde(rename = "synacormedia")]
    Synacormedia,
    #[serde(rename = "tappx")]
    Tappx,
    #[serde(rename = "telaria")]
    Telaria,
    #[serde(rename = "triplelift")]
    Triplelift,
    #[serde(rename = "triplelift_native")]
    TripleliftNative,
    #[serde(rename = "ucfunnel")]
    Ucfunnel,
    #[serde(rename = "unruly")]
    Unruly,
    #[serde(rename = "valueimpression")]
    ValueImpression,
    #[serde(rename = "verizonmedia")]
    VerizonMedia,
    #[serde(rename = "visx")]
    Visx,
    #[serde(rename = "vrtcal")]
    Vrtcal,
    #[serde(rename = "yeahmobi")]
    Yeahmobi,
    #[serde(rename = "yieldmo")]
    Yieldmo,
    #[serde(rename = "yieldone")]
    Yieldone,
    #[serde(rename = "zeroclickfraud")]
    ZeroClickFraud,
}

impl BidderName {
    /// Returns every registered bidder.
    ///
    /// Callers must not rely on the order of the returned slice.
    pub fn all() -> &'static [BidderName] {
        &[
            Self::ThirtyThreeAcross,
            Self::Adform,
            Self::Adgeneration,
            Self::Adkernel,
            Self::AdkernelAdn,
            Self::Admixer,
            Self::AdOcean,
            Self::Adoppler,
            Self::Adpone,
            Self::Adtelligent,
            Self::Advangelists,
            Self::Aja,
            Self::Applogy,
            Self::Appnexus,
            Self::AudienceNetwork,
            Self::Beachfront,
            Self::Beintoo,
            Self::Brightroll,
            Self::Consumable,
            Self::Conversant,
            Self::Cpmstar,
            Self::Datablocks,
            Self::EmxDigital,
            Self::EngageBdr,
            Self::EPlanning,
            Self::Gamma,
            Self::Gamoshi,
            Self::Grid,
            Self::GumGum,
            Self::Improvedigital,
            Self::Ix,
            Self::Kidoz,
            Self::Kubient,
            Self::Lifestreet,
            Self::LockerDome,
            Self::LunaMedia,
            Self::Marsmedia,
            Self::Mgid,
            Self::NanoInteractive,
            Self::NinthDecimal,
            Self::Openx,
            Self::Orbidder,
            Self::Pubmatic,
            Self::Pubnative,
            Self::Pulsepoint,
            Self::Rhythmone,
            Self::RtbHouse,
            Self::Rubicon,
            Self::Sharethrough,
            Self::SmartRtb,
            Self::Somoaudience,
            Self::Sonobi,
            Self::Sovrn,
            Self::Synacormedia,
            Self::Tappx,
            Self::Telaria,
            Self::Triplelift,
            Self::TripleliftNative,
            Self::Ucfunnel,
            Self::Unruly,
            Self::ValueImpression,
            Self::VerizonMedia,
            Self::Visx,
            Self::Vrtcal,
            Self::Yeahmobi,
            Self::Yieldmo,
            Self::Yieldone,
            Self::ZeroClickFraud,
        ]
    }

    /// Returns the bidder's token, exactly as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThirtyThreeAcross => "33across",
            Self::Adform => "adform",
            Self::Adgeneration => "adgeneration",
            Self::Adkernel => "adkernel",
            Self::AdkernelAdn => "adkernelAdn",
            Self::Admixer => "admixer",
            Self::AdOcean => "adocean",
            Self::Adoppler => "adoppler",
            Self::Adpone => "adpone",
            Self::Adtelligent => "adtelligent",
            Self::Advangelists => "advangelists",
            Self::Aja => "aja",
            Self::Applogy => "applogy",
            Self::Appnexus => "appnexus",
            Self::AudienceNetwork => "audienceNetwork",
            Self::Beachfront => "beachfront",
            Self::Beintoo => "beintoo",
            Self::Brightroll => "brightroll",
            Self::Consumable => "consumable",
            Self::Conversant => "conversant",
            Self::Cpmstar => "cpmstar",
            Self::Datablocks => "datablocks",
            Self::EmxDigital => "emx_digital",
            Self::EngageBdr => "engagebdr",
            Self::EPlanning => "eplanning",
            Self::Gamma => "gamma",
            Self::Gamoshi => "gamoshi",
            Self::Grid => "grid",
            Self::GumGum => "gumgum",
            Self::Improvedigital => "improvedigital",
            Self::Ix => "ix",
            Self::Kidoz => "kidoz",
            Self::Kubient => "kubient",
            Self::Lifestreet => "lifestreet",
            Self::LockerDome => "lockerdome",
            Self::LunaMedia => "lunamedia",
            Self::Marsmedia => "marsmedia",
            Self::Mgid => "mgid",
            Self::NanoInteractive => "nanointeractive",
            Self::NinthDecimal => "ninthdecimal",
            Self::Openx => "openx",
            Self::Orbidder => "orbidder",
            Self::Pubmatic => "pubmatic",
            Self::Pubnative => "pubnative",
            Self::Pulsepoint => "pulsepoint",
            Self::Rhythmone => "rhythmone",
            Self::RtbHouse => "rtbhouse",
            Self::Rubicon => "rubicon",
            Self::Sharethrough => "sharethrough",
            Self::SmartRtb => "smartrtb",
            Self::Somoaudience => "somoaudience",
            Self::Sonobi => "sonobi",
            Self::Sovrn => "sovrn",
            Self::Synacormedia => "synacormedia",
            Self::Tappx => "tappx",
            Self::Telaria => "telaria",
            Self::Triplelift => "triplelift",
            Self::TripleliftNative => "triplelift_native",
            Self::Ucfunnel => "ucfunnel",
            Self::Unruly => "unruly",
            Self::ValueImpression => "valueimpression",
            Self::VerizonMedia => "verizonmedia",
            Self::Visx => "visx",
            Self::Vrtcal => "vrtcal",
            Self::Yeahmobi => "yeahmobi",
            Self::Yieldmo => "yieldmo",
            Self::Yieldone => "yieldone",
            Self::ZeroClickFraud => "zeroclickfraud",
        }
    }
}

impl std::fmt::Display for BidderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for BidderName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for BidderName {
    type Err = CoreError;

    /// Parse a bidder from its token. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "33across" => Ok(Self::ThirtyThreeAcross),
            "adform" => Ok(Self::Adform),
            "adgeneration" => Ok(Self::Adgeneration),
            "adkernel" => Ok(Self::Adkernel),
            "adkernelAdn" => Ok(Self::AdkernelAdn),
            "admixer" => Ok(Self::Admixer),
            "adocean" => Ok(Self::AdOcean),
            "adoppler" => Ok(Self::Adoppler),
            "adpone" => Ok(Self::Adpone),
            "adtelligent" => Ok(Self::Adtelligent),
            "advangelists" => Ok(Self::Advangelists),
            "aja" => Ok(Self::Aja),
            "applogy" => Ok(Self::Applogy),
            "appnexus" => Ok(Self::Appnexus),
            "audienceNetwork" => Ok(Self::AudienceNetwork),
            "beachfront" => Ok(Self::Beachfront),
            "beintoo" => Ok(Self::Beintoo),
            "brightroll" => Ok(Self::Brightroll),
            "consumable" => Ok(Self::Consumable),
            "conversant" => Ok(Self::Conversant),
            "cpmstar" => Ok(Self::Cpmstar),
            "datablocks" => Ok(Self::Datablocks),
            "emx_digital" => Ok(Self::EmxDigital),
            "engagebdr" => Ok(Self::EngageBdr),
            "eplanning" => Ok(Self::EPlanning),
            "gamma" => Ok(Self::Gamma),
            "gamoshi" => Ok(Self::Gamoshi),
            "grid" => Ok(Self::Grid),
            "gumgum" => Ok(Self::GumGum),
            "improvedigital" => Ok(Self::Improvedigital),
            "ix" => Ok(Self::Ix),
            "kidoz" => Ok(Self::Kidoz),
            "kubient" => Ok(Self::Kubient),
            "lifestreet" => Ok(Self::Lifestreet),
            "lockerdome" => Ok(Self::LockerDome),
            "lunamedia" => Ok(Self::LunaMedia),
            "marsmedia" => Ok(Self::Marsmedia),
            "mgid" => Ok(Self::Mgid),
            "nanointeractive" => Ok(Self::NanoInteractive),
            "ninthdecimal" => Ok(Self::NinthDecimal),
            "openx" => Ok(Self::Openx),
            "orbidder" => Ok(Self::Orbidder),
            "pubmatic" => Ok(Self::Pubmatic),
            "pubnative" => Ok(Self::Pubnative),
            "pulsepoint" => Ok(Self::Pulsepoint),
            "rhythmone" => Ok(Self::Rhythmone),
            "rtbhouse" => Ok(Self::RtbHouse),
            "rubicon" => Ok(Self::Rubicon),
            "sharethrough" => Ok(Self::Sharethrough),
            "smartrtb" => Ok(Self::SmartRtb),
            "somoaudience" => Ok(Self::Somoaudience),
            "sonobi" => Ok(Self::Sonobi),
            "sovrn" => Ok(Self::Sovrn),
            "synacormedia" => Ok(Self::Synacormedia),
            "tappx" => Ok(Self::Tappx),
            "telaria" => Ok(Self::Telaria),
            "triplelift" => Ok(Self::Triplelift),
            "triplelift_native" => Ok(Self::TripleliftNative),
            "ucfunnel" => Ok(Self::Ucfunnel),
            "unruly" => Ok(Self::Unruly),
            "valueimpression" => Ok(Self::ValueImpression),
            "verizonmedia" => Ok(Self::VerizonMedia),
            "visx" => Ok(Self::Visx),
            "vrtcal" => Ok(Self::Vrtcal),
            "yeahmobi" => Ok(Self::Yeahmobi),
            "yieldmo" => Ok(Self::Yieldmo),
            "yieldone" => Ok(Self::Yieldone),
            "zeroclickfraud" => Ok(Self::ZeroClickFraud),
            other => Err(CoreError::UnknownBidder(other.to_string())),
        }
    }
}
