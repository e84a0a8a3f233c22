//! Core data structs for the fandom simulation.
//!
//! Covers [`EventStatement`], the [`LogRecord`] shape delivered to host
//! logging channels, and [`PersonaProfile`].

use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::AffinityType;

// ---------------------------------------------------------------------------
// EventStatement
// ---------------------------------------------------------------------------

/// Plain-text description of something that happened in the simulated world.
///
/// No structure is imposed beyond the text itself. Serializes as a bare
/// string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventStatement(String);

impl EventStatement {
    /// Wrap a piece of text as an event statement.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the statement text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the owned statement text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EventStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventStatement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventStatement {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for EventStatement {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

// ---------------------------------------------------------------------------
// LogRecord
// ---------------------------------------------------------------------------

/// Key under which motive components log their reward.
pub const REWARD_LOG_KEY: &str = "Reward";

/// A structured record handed to a host logging channel.
///
/// Serializes as `{"Key": ..., "Value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LogRecord {
    /// What the value describes.
    #[serde(rename = "Key")]
    pub key: String,
    /// The logged value.
    #[serde(rename = "Value")]
    pub value: serde_json::Value,
}

impl LogRecord {
    /// Build a `Reward` record. Non-finite rewards serialize as `null`.
    pub fn reward(reward: f64) -> Self {
        Self {
            key: REWARD_LOG_KEY.to_owned(),
            value: serde_json::Value::from(reward),
        }
    }

    /// Numeric value of the record, if it holds one.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

// ---------------------------------------------------------------------------
// PersonaProfile
// ---------------------------------------------------------------------------

/// A persona taking part in the simulation.
///
/// `role` lets scenarios look personas up by the part they play (e.g.
/// `"Idol"`) rather than by display name. `fan_type` is only meaningful for
/// fan personas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PersonaProfile {
    /// Display name.
    pub name: String,
    /// Scenario role, if any.
    #[serde(default)]
    pub role: Option<String>,
    /// Affinity of a fan persona.
    #[serde(default)]
    pub fan_type: Option<AffinityType>,
}

impl PersonaProfile {
    /// A persona with a name and nothing else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            fan_type: None,
        }
    }

    /// A fan persona with the given affinity.
    pub fn fan(name: impl Into<String>, fan_type: AffinityType) -> Self {
        Self {
            name: name.into(),
            role: None,
            fan_type: Some(fan_type),
        }
    }

    /// Set the scenario role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
