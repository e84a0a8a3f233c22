//! Keyword-based event classification.
//!
//! An [`EventClassifier`] is an ordered list of [`ClassificationRule`]s plus
//! one [`DefaultRule`]. The statement is lower-cased once, each rule is asked
//! in turn, and the first rule that answers wins. When every rule declines,
//! the default rule supplies the reward.
//!
//! Matching is literal substring containment. "won a prestigious acting
//! award" does not match the trigger "won an acting award".

use core::fmt;

use fandom_types::{AffinityType, RewardCategory};

/// Reward the neutral default rule returns.
pub const NEUTRAL_REWARD: f64 = 0.0;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// A single classification rule.
///
/// `evaluate` receives the already lower-cased statement and returns
/// `Some(reward)` when the rule matches. Without an affinity a rule answers
/// only if its reward does not depend on one.
pub trait ClassificationRule: fmt::Debug + Send + Sync {
    /// The category this rule reports when it matches.
    fn category(&self) -> RewardCategory;

    /// Score a lower-cased statement, or decline with `None`.
    fn evaluate(&self, lowered: &str, affinity: Option<AffinityType>) -> Option<f64>;
}

/// Fallback applied when no rule matches.
pub trait DefaultRule: fmt::Debug + Send + Sync {
    /// Reward for a statement no rule matched.
    fn reward(&self, lowered: &str) -> f64;
}

/// Default rule returning [`NEUTRAL_REWARD`] for everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralDefault;

impl DefaultRule for NeutralDefault {
    fn reward(&self, _lowered: &str) -> f64 {
        NEUTRAL_REWARD
    }
}

/// Reward per affinity type for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffinityRewards {
    /// Reward for [`AffinityType::Oshi`].
    pub oshi: f64,
    /// Reward for [`AffinityType::Gachikoi`].
    pub gachikoi: f64,
}

impl AffinityRewards {
    /// Same reward for every affinity type.
    pub const fn uniform(reward: f64) -> Self {
        Self {
            oshi: reward,
            gachikoi: reward,
        }
    }

    /// Look up the reward for an affinity type.
    ///
    /// With no affinity, only a uniform reward answers.
    pub const fn for_affinity(&self, affinity: Option<AffinityType>) -> Option<f64> {
        match affinity {
            Some(AffinityType::Oshi) => Some(self.oshi),
            Some(AffinityType::Gachikoi) => Some(self.gachikoi),
            None => self.uniform_reward(),
        }
    }

    /// The shared reward when every affinity type gets the same one.
    pub const fn uniform_reward(&self) -> Option<f64> {
        if self.oshi.to_bits() == self.gachikoi.to_bits() {
            Some(self.oshi)
        } else {
            None
        }
    }
}

/// Rule that matches when any trigger phrase occurs in the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRule {
    category: RewardCategory,
    /// Lower-cased trigger phrases.
    triggers: Vec<String>,
    rewards: AffinityRewards,
}

impl KeywordRule {
    /// Build a rule. Triggers are lower-cased here so matching stays
    /// case-insensitive whatever the caller passes.
    pub fn new<I, S>(category: RewardCategory, triggers: I, rewards: AffinityRewards) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category,
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            rewards,
        }
    }

    /// The lower-cased trigger phrases.
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// The per-affinity rewards.
    pub const fn rewards(&self) -> AffinityRewards {
        self.rewards
    }

    /// Whether any trigger occurs in the lower-cased statement.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }
}

impl ClassificationRule for KeywordRule {
    fn category(&self) -> RewardCategory {
        self.category
    }

    fn evaluate(&self, lowered: &str, affinity: Option<AffinityType>) -> Option<f64> {
        if !self.matches(lowered) {
            return None;
        }
        self.rewards.for_affinity(affinity)
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Outcome of classifying one statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Matching category, `None` when the default rule answered.
    pub category: Option<RewardCategory>,
    /// The reward value.
    pub reward: f64,
}

/// Ordered rule list with a default.
#[derive(Debug)]
pub struct EventClassifier {
    rules: Vec<Box<dyn ClassificationRule>>,
    fallback: Box<dyn DefaultRule>,
}

impl EventClassifier {
    /// Classifier with no rules and the neutral default.
    pub fn neutral() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Box::new(NeutralDefault),
        }
    }

    /// Classifier with the given rules (tried in order) and default.
    pub fn new(rules: Vec<Box<dyn ClassificationRule>>, fallback: Box<dyn DefaultRule>) -> Self {
        Self { rules, fallback }
    }

    /// Append a rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: impl ClassificationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Replace the default rule.
    #[must_use]
    pub fn with_default(mut self, fallback: impl DefaultRule + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    /// Number of rules before the default.
    pub const fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Score a statement for an affinity type.
    pub fn classify(&self, statement: &str, affinity: AffinityType) -> f64 {
        self.evaluate(statement, Some(affinity)).reward
    }

    /// Score a statement and report which category matched.
    ///
    /// Without an affinity, rules whose reward depends on one decline and
    /// the next rule is tried.
    pub fn evaluate(&self, statement: &str, affinity: Option<AffinityType>) -> Classification {
        let lowered = statement.to_lowercase();
        for rule in &self.rules {
            if let Some(reward) = rule.evaluate(&lowered, affinity) {
                return Classification {
                    category: Some(rule.category()),
                    reward,
                };
            }
        }
        Classification {
            category: None,
            reward: self.fallback.reward(&lowered),
        }
    }
}

impl Default for EventClassifier {
    fn default() -> Self {
        Self::neutral()
    }
}
