//! Enumeration types for the fandom simulation.
//!
//! Affinity types describe how a fan relates to the idol they follow, and
//! reward categories name the keyword buckets the motive classifier checks.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Affinity
// ---------------------------------------------------------------------------

/// A persona trait selecting which reward table applies to ambiguous events.
///
/// Fixed when the owning persona is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum AffinityType {
    /// Broadly supportive fan ("oshi"). Cheers for the idol's success in any
    /// field and takes private-life news in stride.
    #[serde(alias = "supportive-fan")]
    Oshi,
    /// Narrowly devoted fan ("gachikoi"). Only the core idol activity counts,
    /// and private-life news reads as betrayal.
    #[serde(alias = "possessive-fan")]
    Gachikoi,
}

impl AffinityType {
    /// All affinity types, in declaration order.
    pub const ALL: [Self; 2] = [Self::Oshi, Self::Gachikoi];

    /// Canonical wire name (`oshi` / `gachikoi`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oshi => "oshi",
            Self::Gachikoi => "gachikoi",
        }
    }
}

impl fmt::Display for AffinityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced when parsing an [`AffinityType`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AffinityError {
    /// The string does not name a known affinity type.
    #[error("unknown affinity type: {0}")]
    Unknown(String),
}

impl FromStr for AffinityType {
    type Err = AffinityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oshi" | "supportive-fan" => Ok(Self::Oshi),
            "gachikoi" | "possessive-fan" => Ok(Self::Gachikoi),
            other => Err(AffinityError::Unknown(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Reward categories
// ---------------------------------------------------------------------------

/// Mutually exclusive keyword buckets, listed in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RewardCategory {
    /// Praise of the idol's core sanctioned activity (concerts, fan events).
    OnBrandPraise,
    /// Success in adjacent entertainment work (film, commercials, awards).
    GeneralSuccess,
    /// Reports about the idol's private life (dating, rumors).
    PrivateLifeDisclosure,
}

impl RewardCategory {
    /// Snake-case label used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnBrandPraise => "on_brand_praise",
            Self::GeneralSuccess => "general_success",
            Self::PrivateLifeDisclosure => "private_life_disclosure",
        }
    }
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn affinity_parses_wire_names_and_aliases() {
        assert_eq!("oshi".parse::<AffinityType>().unwrap(), AffinityType::Oshi);
        assert_eq!(
            "GACHIKOI".parse::<AffinityType>().unwrap(),
            AffinityType::Gachikoi
        );
        assert_eq!(
            " supportive-fan ".parse::<AffinityType>().unwrap(),
            AffinityType::Oshi
        );
        assert_eq!(
            "possessive-fan".parse::<AffinityType>().unwrap(),
            AffinityType::Gachikoi
        );
    }

    #[test]
    fn affinity_rejects_unknown_names() {
        let err = "casual".parse::<AffinityType>().unwrap_err();
        assert_eq!(err, AffinityError::Unknown("casual".to_owned()));
    }

    #[test]
    fn affinity_serde_uses_lowercase() {
        let json = serde_json::to_string(&AffinityType::Gachikoi).unwrap();
        assert_eq!(json, "\"gachikoi\"");
        let back: AffinityType = serde_json::from_str("\"supportive-fan\"").unwrap();
        assert_eq!(back, AffinityType::Oshi);
    }

    #[test]
    fn display_matches_as_str() {
        for affinity in AffinityType::ALL {
            assert_eq!(affinity.to_string(), affinity.as_str());
        }
        assert_eq!(
            RewardCategory::PrivateLifeDisclosure.to_string(),
            "private_life_disclosure"
        );
    }
}
