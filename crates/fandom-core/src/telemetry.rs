//! Structured logging setup.
//!
//! Hosts call [`init`] once at startup. `RUST_LOG` takes precedence over the
//! configured level so operators can raise verbosity without editing YAML.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter {level:?}: {source}")]
    InvalidFilter {
        /// The rejected directive string.
        level: String,
        /// The underlying parse error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {message}")]
    AlreadyInitialized {
        /// Description from the subscriber registry.
        message: String,
    },
}

/// Parse a filter directive string such as `info` or `fandom_world=debug,warn`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] if the directive does not parse.
pub fn filter_from_level(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
        level: level.to_owned(),
        source,
    })
}

/// Build the effective filter: `RUST_LOG` if set and valid, else the config.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] if the configured level does not
/// parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_env_err| filter_from_level(&config.level))
}

/// Install the global `fmt` subscriber described by `config`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a bad level, or
/// [`TelemetryError::AlreadyInitialized`] if called twice.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };
    result.map_err(|e| TelemetryError::AlreadyInitialized {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_levels_parse() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(filter_from_level(level).is_ok(), "rejected {level}");
        }
    }

    #[test]
    fn per_target_directives_parse() {
        let filter = filter_from_level("fandom_world=debug,fandom_agents=trace,warn");
        assert!(filter.is_ok());
    }

    #[test]
    fn bad_level_is_rejected() {
        let result = filter_from_level("fandom_world=loud");
        assert!(matches!(result, Err(TelemetryError::InvalidFilter { .. })));
    }

    #[test]
    fn init_installs_once() {
        // Only this test installs a global subscriber in this test binary.
        let json = LoggingConfig {
            level: "debug".to_owned(),
            json: true,
        };
        assert!(init(&json).is_ok());
        tracing::info!(component = "telemetry", "json subscriber installed");

        let plain = LoggingConfig::default();
        let second = init(&plain);
        assert!(matches!(second, Err(TelemetryError::AlreadyInitialized { .. })));
    }
}
