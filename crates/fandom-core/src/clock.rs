//! Simulation clock for the fandom simulation.
//!
//! The clock is the single source of truth for simulated time. It starts at
//! a given instant and moves forward by a fixed step on every tick.
//!
//! # Design Principles
//!
//! - All temporal arithmetic is checked (no silent overflow).
//! - Time-of-day is derived from the current timestamp, never stored.
//! - Nothing is persisted; the clock lives only as long as its owner.

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::config::{SimulationConfig, TimeConfig};

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Advancing would move past the last representable timestamp.
    #[error("simulation time overflow: cannot advance beyond {now}")]
    TimeOverflow {
        /// The timestamp the clock is stuck at.
        now: NaiveDateTime,
    },

    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid time configuration (e.g. a zero-length step).
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Simulated wall clock advanced in fixed steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationClock {
    /// Instant the clock was created at.
    start: NaiveDateTime,

    /// Current simulated instant.
    now: NaiveDateTime,

    /// Amount of time added per tick.
    step: TimeDelta,

    /// Number of successful advances since construction.
    ticks: u64,
}

impl SimulationClock {
    /// Create a clock starting at `start`, stepping by the configured number
    /// of minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `tick_minutes` is zero.
    pub fn new(config: &TimeConfig, start: NaiveDateTime) -> Result<Self, ClockError> {
        let step = step_from_minutes(config.tick_minutes)?;
        Ok(Self {
            start,
            now: start,
            step,
            ticks: 0,
        })
    }

    /// Create a clock starting at the local wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `tick_minutes` is zero.
    pub fn starting_now(config: &TimeConfig) -> Result<Self, ClockError> {
        Self::new(config, Local::now().naive_local())
    }

    /// Create a clock from the full simulation config, using
    /// `world.start_time` when set and the local time otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `tick_minutes` is zero.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ClockError> {
        match config.world.start_time {
            Some(start) => Self::new(&config.time, start),
            None => Self::starting_now(&config.time),
        }
    }

    /// Advance the clock by one step. Returns the new time.
    ///
    /// On error the clock is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TimeOverflow`] if the calendar would overflow,
    /// or [`ClockError::TickOverflow`] if the tick counter would.
    pub fn advance(&mut self) -> Result<NaiveDateTime, ClockError> {
        let next = self
            .now
            .checked_add_signed(self.step)
            .ok_or(ClockError::TimeOverflow { now: self.now })?;
        let ticks = self.ticks.checked_add(1).ok_or(ClockError::TickOverflow)?;
        self.now = next;
        self.ticks = ticks;
        Ok(next)
    }

    /// Return the current simulated time.
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Return the instant the clock started at.
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Return the step added per tick.
    pub const fn step(&self) -> TimeDelta {
        self.step
    }

    /// Return the number of ticks taken so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Return the simulated time elapsed since the start.
    pub fn elapsed(&self) -> TimeDelta {
        self.now.signed_duration_since(self.start)
    }

    /// Whether the current time sits exactly on `hour:minute`.
    ///
    /// Seconds are ignored, so a clock started at `17:59:30` is "at" 18:00
    /// after one one-minute tick.
    pub fn is_at(&self, hour: u32, minute: u32) -> bool {
        self.now.hour() == hour && self.now.minute() == minute
    }
}

/// Convert a minute count into a positive step.
fn step_from_minutes(minutes: u32) -> Result<TimeDelta, ClockError> {
    if minutes == 0 {
        return Err(ClockError::InvalidConfig {
            reason: "tick_minutes must be at least 1".to_owned(),
        });
    }
    TimeDelta::try_minutes(i64::from(minutes)).ok_or_else(|| ClockError::InvalidConfig {
        reason: format!("tick_minutes {minutes} is out of range"),
    })
}
