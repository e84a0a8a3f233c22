//! Configuration loading and typed config structures for the fandom simulation.
//!
//! The canonical configuration lives in `fandom-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.

use std::path::Path;

use chrono::NaiveDateTime;
use fandom_types::PersonaProfile;
use serde::Deserialize;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "FANDOM_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `fandom-config.yaml`. Every field has a default
/// matching the fixed behavior of the scripted broadcast environment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed, start time).
    #[serde(default)]
    pub world: WorldConfig,

    /// Clock step settings.
    #[serde(default)]
    pub time: TimeConfig,

    /// Scripted broadcast trigger settings.
    #[serde(default)]
    pub broadcast: BroadcastConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Personas known to the scenario.
    #[serde(default)]
    pub personas: Vec<PersonaProfile>,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `FANDOM_LOG` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. The environment is not read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time.tick_minutes == 0 {
            return Err(ConfigError::Invalid {
                reason: "time.tick_minutes must be at least 1".to_owned(),
            });
        }
        self.broadcast.validate()
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducible broadcasts. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Simulated start time. `None` starts at the local wall-clock time.
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: None,
            start_time: None,
        }
    }
}

/// Clock step configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeConfig {
    /// Simulated minutes added per tick.
    #[serde(default = "default_tick_minutes")]
    pub tick_minutes: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            tick_minutes: default_tick_minutes(),
        }
    }
}

/// Scripted broadcast trigger configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BroadcastConfig {
    /// Hour of day (0-23) at which a broadcast may fire.
    #[serde(default = "default_trigger_hour")]
    pub trigger_hour: u32,

    /// Minute of the hour (0-59) at which a broadcast may fire.
    #[serde(default)]
    pub trigger_minute: u32,

    /// Probability in `[0, 1]` that a due broadcast actually fires.
    #[serde(default = "default_trigger_probability")]
    pub trigger_probability: f64,

    /// Name looked up in the scenario to find the idol persona.
    #[serde(default = "default_persona_name")]
    pub persona_lookup_name: String,

    /// Display name used when the scenario lookup fails.
    #[serde(default = "default_persona_name")]
    pub fallback_name: String,
}

impl BroadcastConfig {
    /// Check trigger ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the hour, minute, or probability
    /// is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_hour > 23 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "broadcast.trigger_hour must be 0-23, got {}",
                    self.trigger_hour
                ),
            });
        }
        if self.trigger_minute > 59 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "broadcast.trigger_minute must be 0-59, got {}",
                    self.trigger_minute
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.trigger_probability) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "broadcast.trigger_probability must be within [0, 1], got {}",
                    self.trigger_probability
                ),
            });
        }
        Ok(())
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            trigger_hour: default_trigger_hour(),
            trigger_minute: 0,
            trigger_probability: default_trigger_probability(),
            persona_lookup_name: default_persona_name(),
            fallback_name: default_persona_name(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive string).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Override the level with `FANDOM_LOG` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_level_override(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// Replace the level with `level` when present and non-blank.
    pub fn apply_level_override(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (required by serde's `default = "..."` attribute)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "virtual-sns".to_owned()
}

const fn default_tick_minutes() -> u32 {
    1
}

const fn default_trigger_hour() -> u32 {
    18
}

const fn default_trigger_probability() -> f64 {
    0.25
}

fn default_persona_name() -> String {
    "Idol".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
