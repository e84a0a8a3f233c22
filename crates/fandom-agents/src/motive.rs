//! Motive components: classifier-backed reward functions for agents.
//!
//! [`MotiveComponent::evaluate_event`] is the public entry point. It scores
//! the statement with the component's classifier, hands exactly one
//! `{"Key": "Reward", "Value": reward}` record to the logging channel, and
//! returns the reward. Scoring itself is pure; the log record is the only
//! side effect.
//!
//! A base motive uses the neutral classifier and scores everything 0.0. A
//! fan motive ([`MotiveComponent::for_fan`]) installs the fan rules and
//! needs the persona's affinity type.

use std::sync::Arc;

use fandom_types::{AffinityType, LogRecord};
use tracing::{debug, info};

use crate::channel::LoggingChannel;
use crate::classifier::{Classification, EventClassifier};
use crate::error::MotiveError;
use crate::fan::fan_classifier;
use crate::persona::{LanguageModel, Persona};

/// Serialized state of a component.
pub type ComponentState = serde_json::Map<String, serde_json::Value>;

/// Lifecycle seam shared with the host's entity components.
pub trait Component {
    /// Component name, for logs and state keys.
    fn name(&self) -> &str;

    /// Capture the component's state.
    fn get_state(&self) -> ComponentState;

    /// Restore state captured by [`Component::get_state`].
    fn set_state(&mut self, state: &ComponentState);
}

/// Name reported by every motive component.
pub const MOTIVE_COMPONENT_NAME: &str = "Motive";

/// Reward function for one persona.
pub struct MotiveComponent {
    model: Arc<dyn LanguageModel>,
    persona_name: String,
    affinity: Option<AffinityType>,
    classifier: EventClassifier,
    channel: Arc<dyn LoggingChannel>,
}

impl MotiveComponent {
    /// Base motive: neutral classifier, affinity read if the persona has one.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        persona: &dyn Persona,
        channel: Arc<dyn LoggingChannel>,
    ) -> Self {
        Self::with_classifier(model, persona, EventClassifier::neutral(), channel)
    }

    /// Motive with a caller-supplied classifier.
    pub fn with_classifier(
        model: Arc<dyn LanguageModel>,
        persona: &dyn Persona,
        classifier: EventClassifier,
        channel: Arc<dyn LoggingChannel>,
    ) -> Self {
        let component = Self {
            model,
            persona_name: persona.name().to_owned(),
            affinity: persona.fan_type(),
            classifier,
            channel,
        };
        info!(
            persona = %component.persona_name,
            affinity = component.affinity.map(AffinityType::as_str),
            rules = component.classifier.rule_count(),
            model = component.model.model_name(),
            "Motive component created"
        );
        component
    }

    /// Fan motive: fan rules over the neutral default.
    ///
    /// The persona's `fan_type` is read once, here.
    ///
    /// # Errors
    ///
    /// Returns [`MotiveError::MissingAffinity`] if the persona has no
    /// `fan_type`.
    pub fn for_fan(
        model: Arc<dyn LanguageModel>,
        persona: &dyn Persona,
        channel: Arc<dyn LoggingChannel>,
    ) -> Result<Self, MotiveError> {
        if persona.fan_type().is_none() {
            return Err(MotiveError::MissingAffinity {
                persona: persona.name().to_owned(),
            });
        }
        Ok(Self::with_classifier(model, persona, fan_classifier(), channel))
    }

    /// Score a statement, log the reward, and return it.
    pub fn evaluate_event(&self, statement: &str) -> f64 {
        let classification = self.score(statement);
        debug!(
            persona = %self.persona_name,
            category = classification.category.map(|c| c.as_str()),
            reward = classification.reward,
            "Event evaluated"
        );
        self.channel.log(LogRecord::reward(classification.reward));
        classification.reward
    }

    /// Score a statement without logging.
    pub fn score(&self, statement: &str) -> Classification {
        self.classifier.evaluate(statement, self.affinity)
    }

    /// Name of the persona this motive belongs to.
    pub fn persona_name(&self) -> &str {
        &self.persona_name
    }

    /// Affinity read from the persona at construction.
    pub const fn affinity(&self) -> Option<AffinityType> {
        self.affinity
    }

    /// The language-model handle supplied at construction.
    pub fn model(&self) -> &dyn LanguageModel {
        self.model.as_ref()
    }
}

impl std::fmt::Debug for MotiveComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotiveComponent")
            .field("model", &self.model)
            .field("persona_name", &self.persona_name)
            .field("affinity", &self.affinity)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl Component for MotiveComponent {
    fn name(&self) -> &str {
        MOTIVE_COMPONENT_NAME
    }

    /// Motives are stateless, so the state is always empty.
    fn get_state(&self) -> ComponentState {
        ComponentState::new()
    }

    fn set_state(&mut self, _state: &ComponentState) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fandom_types::{PersonaProfile, RewardCategory};

    use super::*;
    use crate::channel::RecordingChannel;

    #[derive(Debug)]
    struct StubModel;

    impl LanguageModel for StubModel {
        fn model_name(&self) -> &str {
            "stub"
        }
    }

    fn model() -> Arc<dyn LanguageModel> {
        Arc::new(StubModel)
    }

    fn fan_motive(affinity: AffinityType) -> (MotiveComponent, Arc<RecordingChannel>) {
        let channel = Arc::new(RecordingChannel::new());
        let persona = PersonaProfile::fan("Ren", affinity);
        let motive = MotiveComponent::for_fan(model(), &persona, channel.clone()).unwrap();
        (motive, channel)
    }

    #[test]
    fn evaluate_event_logs_exactly_one_reward_record() {
        let (motive, channel) = fan_motive(AffinityType::Gachikoi);

        let reward = motive.evaluate_event("A dating scandal was reported");
        assert!((reward - -10.0).abs() < f64::EPSILON);

        let records = channel.records();
        assert_eq!(records.len(), 1);
        let record = records.first().unwrap();
        assert_eq!(record.key, "Reward");
        assert_eq!(record.as_f64(), Some(reward));
    }

    #[test]
    fn every_call_logs_its_own_value() {
        let (motive, channel) = fan_motive(AffinityType::Oshi);
        let statements = [
            "She starred in a movie",
            "nothing happened",
            "The fan meeting sold out",
            "A relationship rumor surfaced",
        ];
        let rewards: Vec<f64> = statements.iter().map(|s| motive.evaluate_event(s)).collect();
        let logged: Vec<Option<f64>> = channel.records().iter().map(LogRecord::as_f64).collect();

        assert_eq!(logged.len(), statements.len());
        for (reward, value) in rewards.iter().zip(&logged) {
            assert_eq!(*value, Some(*reward));
        }
    }

    #[test]
    fn score_does_not_log() {
        let (motive, channel) = fan_motive(AffinityType::Oshi);
        let result = motive.score("Great singer on stage");
        assert_eq!(result.category, Some(RewardCategory::OnBrandPraise));
        assert!(channel.is_empty());
    }

    #[test]
    fn fan_motive_requires_affinity() {
        let channel: Arc<dyn LoggingChannel> = Arc::new(RecordingChannel::new());
        let persona = PersonaProfile::named("Mika");
        let err = MotiveComponent::for_fan(model(), &persona, channel).unwrap_err();
        assert_eq!(
            err,
            MotiveError::MissingAffinity {
                persona: "Mika".to_owned()
            }
        );
    }

    #[test]
    fn base_motive_is_neutral_and_needs_no_affinity() {
        let channel = Arc::new(RecordingChannel::new());
        let persona = PersonaProfile::named("Observer");
        let motive = MotiveComponent::new(model(), &persona, channel.clone());

        assert_eq!(motive.affinity(), None);
        let reward = motive.evaluate_event("The IDOL PERFORMANCE was great");
        assert!(reward.abs() < f64::EPSILON);
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn fan_rules_without_affinity_still_reward_praise() {
        let channel = Arc::new(RecordingChannel::new());
        let persona = PersonaProfile::named("NoType");
        let motive =
            MotiveComponent::with_classifier(model(), &persona, fan_classifier(), channel.clone());

        let reward = motive.evaluate_event("The IDOL PERFORMANCE was great");
        assert!((reward - 10.0).abs() < f64::EPSILON, "got {reward}");
        assert!(motive.evaluate_event("A dating scandal").abs() < f64::EPSILON);
        assert_eq!(channel.len(), 2);
    }

    #[test]
    fn base_motive_with_affinity_is_still_neutral() {
        let channel = Arc::new(RecordingChannel::new());
        let persona = PersonaProfile::fan("Ren", AffinityType::Gachikoi);
        let motive = MotiveComponent::new(model(), &persona, channel);
        assert_eq!(motive.affinity(), Some(AffinityType::Gachikoi));
        assert!(motive.evaluate_event("A dating scandal").abs() < f64::EPSILON);
    }

    #[test]
    fn closure_channel_receives_records() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let channel: Arc<dyn LoggingChannel> = Arc::new(move |record: LogRecord| {
            if let Ok(mut guard) = sink.lock() {
                guard.push(record);
            }
        });
        let persona = PersonaProfile::fan("Mika", AffinityType::Oshi);
        let motive = MotiveComponent::for_fan(model(), &persona, channel).unwrap();

        let reward = motive.evaluate_event("Published a photo book");
        let records = seen.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.first().and_then(LogRecord::as_f64), Some(reward));
    }

    #[test]
    fn state_is_empty_and_restore_is_a_no_op() {
        let (mut motive, _channel) = fan_motive(AffinityType::Oshi);
        assert_eq!(motive.name(), "Motive");
        assert!(motive.get_state().is_empty());

        let mut state = ComponentState::new();
        state.insert("junk".to_owned(), serde_json::Value::Bool(true));
        motive.set_state(&state);
        assert!(motive.get_state().is_empty());
        assert!((motive.evaluate_event("She starred in a movie") - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn construction_records_persona_and_model() {
        let (motive, _channel) = fan_motive(AffinityType::Gachikoi);
        assert_eq!(motive.persona_name(), "Ren");
        assert_eq!(motive.model().model_name(), "stub");
    }
}
