//! Environments: a simulation clock plus an append-only broadcast log.
//!
//! The host driver calls [`Environment::tick`] to move time forward and reads
//! [`Environment::events`] to deliver broadcasts to agents. The log is never
//! truncated here; drivers that want incremental delivery keep their own read
//! offset and use [`Environment::events_since`].
//!
//! Environments are owned and mutated through `&mut self` only. A driver
//! sharing one across threads must serialize access itself.

use chrono::NaiveDateTime;
use fandom_core::{SimulationClock, SimulationConfig};
use fandom_types::EventStatement;
use tracing::{debug, warn};

use crate::error::WorldError;

/// Common interface of every environment.
pub trait Environment {
    /// Advance simulated time by one step. Always succeeds.
    fn tick(&mut self);

    /// Current simulated time.
    fn time(&self) -> NaiveDateTime;

    /// Append a statement to the broadcast log. No deduplication.
    fn broadcast_event(&mut self, statement: EventStatement);

    /// The full broadcast history, oldest first.
    fn events(&self) -> &[EventStatement];

    /// Number of ticks taken since construction.
    fn tick_count(&self) -> u64;

    /// Broadcasts after the first `offset`; empty once `offset` reaches the end.
    fn events_since(&self, offset: usize) -> &[EventStatement] {
        self.events().get(offset..).unwrap_or_default()
    }
}

/// Clock plus broadcast log, with no scheduled events of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEnvironment {
    clock: SimulationClock,
    events: Vec<EventStatement>,
}

impl BaseEnvironment {
    /// Environment starting at the clock's current time with an empty log.
    pub const fn new(clock: SimulationClock) -> Self {
        Self {
            clock,
            events: Vec::new(),
        }
    }

    /// Environment built from the time settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Clock`] if the clock settings are invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, WorldError> {
        Ok(Self::new(SimulationClock::from_config(config)?))
    }

    /// Read-only access to the clock.
    pub const fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Advance the clock, returning whether time actually moved.
    ///
    /// At the end of the calendar the clock stays put and a warning is logged.
    pub fn advance(&mut self) -> bool {
        match self.clock.advance() {
            Ok(now) => {
                debug!(time = %now, tick = self.clock.ticks(), "Clock advanced");
                true
            }
            Err(e) => {
                warn!(error = %e, "Clock did not advance");
                false
            }
        }
    }
}

impl Environment for BaseEnvironment {
    fn tick(&mut self) {
        let _ = self.advance();
    }

    fn time(&self) -> NaiveDateTime {
        self.clock.now()
    }

    fn broadcast_event(&mut self, statement: EventStatement) {
        debug!(statement = %statement, log_len = self.events.len(), "Broadcasting event");
        self.events.push(statement);
    }

    fn events(&self) -> &[EventStatement] {
        &self.events
    }

    fn tick_count(&self) -> u64 {
        self.clock.ticks()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use fandom_core::TimeConfig;

    use super::*;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(8, 30, 15)
            .unwrap()
    }

    fn environment() -> BaseEnvironment {
        let clock = SimulationClock::new(&TimeConfig { tick_minutes: 1 }, start()).unwrap();
        BaseEnvironment::new(clock)
    }

    #[test]
    fn constructed_state_is_empty() {
        let env = environment();
        assert_eq!(env.time(), start());
        assert!(env.events().is_empty());
        assert_eq!(env.tick_count(), 0);
    }

    #[test]
    fn n_ticks_advance_n_minutes() {
        let mut env = environment();
        for n in 1..=125_i64 {
            env.tick();
            assert_eq!(env.time(), start() + TimeDelta::try_minutes(n).unwrap());
        }
        assert_eq!(env.tick_count(), 125);
    }

    #[test]
    fn ticking_does_not_broadcast() {
        let mut env = environment();
        for _ in 0..(24 * 60) {
            env.tick();
        }
        assert!(env.events().is_empty());
    }

    #[test]
    fn broadcast_appends_in_order_without_dedup() {
        let mut env = environment();
        env.broadcast_event("first".into());
        env.broadcast_event("second".into());
        env.broadcast_event("first".into());
        let texts: Vec<&str> = env.events().iter().map(EventStatement::as_str).collect();
        assert_eq!(texts, vec!["first", "second", "first"]);
    }

    #[test]
    fn copied_events_do_not_alias_the_log() {
        let mut env = environment();
        env.broadcast_event("kept".into());

        let mut snapshot = env.events().to_vec();
        snapshot.push("injected".into());
        snapshot.clear();

        assert_eq!(env.events().len(), 1);
        env.broadcast_event("later".into());
        assert_eq!(env.events().len(), 2);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn events_since_tracks_read_offsets() {
        let mut env = environment();
        env.broadcast_event("a".into());
        env.broadcast_event("b".into());
        let offset = env.events().len();
        env.broadcast_event("c".into());

        let fresh: Vec<&str> = env
            .events_since(offset)
            .iter()
            .map(EventStatement::as_str)
            .collect();
        assert_eq!(fresh, vec!["c"]);
        assert!(env.events_since(3).is_empty());
        assert!(env.events_since(99).is_empty());
        assert_eq!(env.events_since(0).len(), 3);
    }

    #[test]
    fn end_of_calendar_keeps_time() {
        let clock =
            SimulationClock::new(&TimeConfig { tick_minutes: 1 }, NaiveDateTime::MAX).unwrap();
        let mut env = BaseEnvironment::new(clock);
        assert!(!env.advance());
        env.tick();
        assert_eq!(env.time(), NaiveDateTime::MAX);
        assert_eq!(env.tick_count(), 0);
    }
}
