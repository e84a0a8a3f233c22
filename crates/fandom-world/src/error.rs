//! Error types for the `fandom-world` crate.
//!
//! Scenario lookup failures are deliberately absent from [`WorldError`]:
//! they are always resolved to a fallback name and never surface.

use fandom_core::{ClockError, ConfigError};

/// Errors that can occur while building an environment.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The simulation clock could not be created.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The configuration is out of range.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },
}
