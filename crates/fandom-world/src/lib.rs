//! Environments for the fandom simulation.
//!
//! An environment owns the simulated clock and an append-only log of
//! broadcast statements. The host driver ticks it and hands new broadcasts to
//! each fan's motive component.
//!
//! # Modules
//!
//! - [`environment`] -- The [`Environment`] trait and [`BaseEnvironment`],
//!   a clock plus broadcast log with no events of its own.
//! - [`scripted`] -- [`ScriptedEventEnvironment`], which broadcasts one of ten
//!   headlines about the idol at 18:00 with a fixed probability.
//! - [`scenario`] -- Player lookup and display-name resolution with fallback.
//! - [`random`] -- Injectable randomness for trigger draws.
//! - [`error`] -- Error types for environment construction.

pub mod environment;
pub mod error;
pub mod random;
pub mod scenario;
pub mod scripted;

// Re-export primary types at crate root.
pub use environment::{BaseEnvironment, Environment};
pub use error::WorldError;
pub use random::{FixedSource, RandomSource, RngSource};
pub use scenario::{ResolvedName, Scenario, ScenarioError, StaticScenario, resolve_display_name};
pub use scripted::{
    BroadcastTrigger, SCRIPTED_EVENT_TEMPLATES, ScriptedEventEnvironment, scripted_event_pool,
};
