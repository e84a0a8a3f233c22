//! Environment that broadcasts scripted entertainment news.
//!
//! Once per simulated day, at the trigger time (18:00 by default), a random
//! draw decides whether something newsworthy happens (25% by default). If it
//! does, one of ten fixed headlines about the idol is picked uniformly and
//! broadcast.
//!
//! # Trigger rule
//!
//! Checked once per tick, after the clock advances:
//!
//! 1. the new time's hour and minute equal the trigger time (seconds are
//!    ignored);
//! 2. a uniform draw is below the trigger probability.
//!
//! The random source is only consulted when (1) holds. At most one event is
//! emitted per tick. With a step coarser than one minute the trigger time
//! can be stepped over entirely, in which case nothing is ever broadcast.

use chrono::{NaiveDateTime, Timelike};
use fandom_core::{BroadcastConfig, SimulationClock, SimulationConfig};
use fandom_types::EventStatement;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::environment::{BaseEnvironment, Environment};
use crate::error::WorldError;
use crate::random::{RandomSource, RngSource};
use crate::scenario::{ResolvedName, Scenario, StaticScenario, resolve_display_name};

/// Placeholder replaced by the idol's display name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Headline templates, grouped by the reward category they were written for.
pub const SCRIPTED_EVENT_TEMPLATES: [&str; 10] = [
    // Praise of idol activities
    "{name}'s idol performance at the concert was a success.",
    "{name}'s fan meeting was highly praised by attendees.",
    "Fans are excited about {name}'s amazing dancing in the new music video.",
    // Success in broader entertainment
    "{name} has been cast to star in a new movie.",
    "{name} will appear in a new nationwide commercial.",
    "{name} won a prestigious acting award.",
    // Private life
    "A dating scandal involving {name} was reported by a magazine.",
    "There is a relationship rumor about {name}.",
    // Other
    "{name} announced a new single release.",
    "A documentary about {name}'s journey will be aired.",
];

/// Fill every template with `name`.
pub fn scripted_event_pool(name: &str) -> Vec<EventStatement> {
    SCRIPTED_EVENT_TEMPLATES
        .iter()
        .map(|template| EventStatement::new(template.replace(NAME_PLACEHOLDER, name)))
        .collect()
}

/// When and how likely a scripted broadcast is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadcastTrigger {
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute of the hour (0-59).
    pub minute: u32,
    /// Probability in `[0, 1]` that a due broadcast fires.
    pub probability: f64,
}

impl BroadcastTrigger {
    /// Trigger from validated broadcast settings.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Config`] if a value is out of range.
    pub fn from_config(config: &BroadcastConfig) -> Result<Self, WorldError> {
        config.validate()?;
        Ok(Self {
            hour: config.trigger_hour,
            minute: config.trigger_minute,
            probability: config.trigger_probability,
        })
    }

    /// Whether `time` sits on the trigger hour and minute.
    pub fn is_due(&self, time: NaiveDateTime) -> bool {
        time.hour() == self.hour && time.minute() == self.minute
    }

    /// Whether a draw in `[0, 1)` passes the probability check.
    pub const fn fires(&self, draw: f64) -> bool {
        draw < self.probability
    }
}

impl Default for BroadcastTrigger {
    fn default() -> Self {
        Self {
            hour: 18,
            minute: 0,
            probability: 0.25,
        }
    }
}

/// Environment emitting scripted news about one idol.
#[derive(Debug, Clone)]
pub struct ScriptedEventEnvironment<S = RngSource<StdRng>> {
    base: BaseEnvironment,
    persona_name: ResolvedName,
    pool: Vec<EventStatement>,
    trigger: BroadcastTrigger,
    random: S,
}

impl<S: RandomSource> ScriptedEventEnvironment<S> {
    /// Build an environment around `clock`.
    ///
    /// The idol's name is looked up once, here; lookup failures fall back to
    /// `config.fallback_name` and never fail construction.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Config`] if the trigger settings are out of range.
    pub fn new(
        clock: SimulationClock,
        scenario: Option<&dyn Scenario>,
        config: &BroadcastConfig,
        random: S,
    ) -> Result<Self, WorldError> {
        let trigger = BroadcastTrigger::from_config(config)?;
        let persona_name =
            resolve_display_name(scenario, &config.persona_lookup_name, &config.fallback_name);
        let pool = scripted_event_pool(persona_name.as_str());

        info!(
            persona = persona_name.as_str(),
            fallback = persona_name.is_fallback(),
            pool_size = pool.len(),
            trigger_hour = trigger.hour,
            trigger_minute = trigger.minute,
            probability = trigger.probability,
            "Scripted event environment created"
        );

        Ok(Self {
            base: BaseEnvironment::new(clock),
            persona_name,
            pool,
            trigger,
            random,
        })
    }

    /// Display name substituted into the pool.
    pub fn persona_name(&self) -> &str {
        self.persona_name.as_str()
    }

    /// How the display name was obtained.
    pub const fn resolved_name(&self) -> &ResolvedName {
        &self.persona_name
    }

    /// The fixed event pool.
    pub fn pool(&self) -> &[EventStatement] {
        &self.pool
    }

    /// The trigger in effect.
    pub const fn trigger(&self) -> BroadcastTrigger {
        self.trigger
    }

    /// Mutable access to the random source.
    pub const fn random_mut(&mut self) -> &mut S {
        &mut self.random
    }

    /// Apply the trigger rule to the current time, broadcasting at most one
    /// event.
    fn maybe_broadcast(&mut self) {
        let now = self.base.time();
        if !self.trigger.is_due(now) {
            return;
        }
        let draw = self.random.draw();
        if !self.trigger.fires(draw) {
            debug!(time = %now, draw, "Broadcast due but draw did not fire");
            return;
        }
        let Some(statement) = self
            .random
            .pick_index(self.pool.len())
            .and_then(|idx| self.pool.get(idx))
            .cloned()
        else {
            warn!(pool_size = self.pool.len(), "Random source picked no pool entry");
            return;
        };
        info!(time = %now, draw, statement = %statement, "Scripted event broadcast");
        self.base.broadcast_event(statement);
    }
}

impl ScriptedEventEnvironment {
    /// Build from the full config: clock from `world`/`time`, scenario from
    /// `personas`, RNG from `world.seed` (OS-seeded when absent).
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the clock or trigger settings are invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, WorldError> {
        let clock = SimulationClock::from_config(config)?;
        let scenario = StaticScenario::from_config(config);
        let random = config
            .world
            .seed
            .map_or_else(RngSource::<StdRng>::from_os, RngSource::<StdRng>::seeded);
        Self::new(clock, Some(&scenario), &config.broadcast, random)
    }
}

impl<S: RandomSource> Environment for ScriptedEventEnvironment<S> {
    fn tick(&mut self) {
        if self.base.advance() {
            self.maybe_broadcast();
        }
    }

    fn time(&self) -> NaiveDateTime {
        self.base.time()
    }

    fn broadcast_event(&mut self, statement: EventStatement) {
        self.base.broadcast_event(statement);
    }

    fn events(&self) -> &[EventStatement] {
        self.base.events()
    }

    fn tick_count(&self) -> u64 {
        self.base.tick_count()
    }
}
