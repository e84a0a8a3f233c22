//! Motive components and event classification for the fandom simulation.
//!
//! This crate scores event statements for agents. It holds no I/O and no
//! mutable state: a host hands a statement to a [`MotiveComponent`] and gets
//! a reward back, with one record logged to the host's channel.
//!
//! # Modules
//!
//! - [`channel`] -- [`LoggingChannel`] sinks (closures, tracing, in-memory)
//! - [`classifier`] -- Ordered keyword rules with a default ([`EventClassifier`])
//! - [`error`] -- Error types for motive construction ([`MotiveError`])
//! - [`fan`] -- Trigger phrases and reward tables for idol fans
//! - [`motive`] -- [`MotiveComponent`], base and fan flavors
//! - [`persona`] -- [`Persona`] and [`LanguageModel`] handles

pub mod channel;
pub mod classifier;
pub mod error;
pub mod fan;
pub mod motive;
pub mod persona;

// Re-export primary types at crate root for convenience.
pub use channel::{LoggingChannel, RecordingChannel, TracingChannel};
pub use classifier::{
    AffinityRewards, Classification, ClassificationRule, DefaultRule, EventClassifier,
    KeywordRule, NEUTRAL_REWARD, NeutralDefault,
};
pub use error::MotiveError;
pub use fan::{fan_classifier, fan_rules};
pub use motive::{Component, ComponentState, MOTIVE_COMPONENT_NAME, MotiveComponent};
pub use persona::{LanguageModel, Persona};
