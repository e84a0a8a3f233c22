//! Error types for the fandom-agents crate.
//!
//! Classification itself never fails; the only fallible step is building a
//! motive component from a persona that lacks what the component needs.

/// Errors that can occur while constructing motive components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MotiveError {
    /// A fan motive was requested for a persona with no affinity type.
    #[error("persona {persona:?} has no fan_type; a fan motive needs one")]
    MissingAffinity {
        /// Name of the offending persona.
        persona: String,
    },
}
