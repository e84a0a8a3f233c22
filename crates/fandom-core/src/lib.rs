//! Simulation clock, configuration, and logging setup for the fandom simulation.
//!
//! # Modules
//!
//! - [`clock`] -- [`SimulationClock`], advanced by a fixed step per tick.
//! - [`config`] -- Configuration loading from `fandom-config.yaml` into
//!   strongly-typed structs.
//! - [`telemetry`] -- `tracing` subscriber installation.
//!
//! [`SimulationClock`]: clock::SimulationClock

pub mod clock;
pub mod config;
pub mod telemetry;

pub use clock::{ClockError, SimulationClock};
pub use config::{
    BroadcastConfig, ConfigError, LoggingConfig, SimulationConfig, TimeConfig, WorldConfig,
};
