//! Reward rules for idol fans.
//!
//! | Priority | Category                | oshi | gachikoi |
//! |----------|-------------------------|------|----------|
//! | 1        | On-brand praise         | 10.0 | 10.0     |
//! | 2        | General success         |  5.0 |  0.0     |
//! | 3        | Private-life disclosure |  3.0 | -10.0    |
//! | --       | Anything else           |  0.0 |  0.0     |
//!
//! Praise of the core idol activity is validated by every fan. Devoted
//! (gachikoi) fans are indifferent to success outside it and take
//! private-life news as betrayal.

use fandom_types::RewardCategory;

use crate::classifier::{AffinityRewards, EventClassifier, KeywordRule};

/// Triggers for praise of idol activities (concerts, fan service).
pub const ON_BRAND_PRAISE_TRIGGERS: [&str; 6] = [
    "idol performance",
    "fan meeting",
    "concert was a success",
    "great singer",
    "amazing dancer",
    "handshake event",
];

/// Triggers for success in broader entertainment work.
pub const GENERAL_SUCCESS_TRIGGERS: [&str; 5] = [
    "starred in a movie",
    "appeared in a commercial",
    "won an acting award",
    "published a photo book",
    "variety show regular",
];

/// Triggers for private-life reports.
pub const PRIVATE_LIFE_TRIGGERS: [&str; 3] = [
    "dating scandal",
    "relationship rumor",
    "seen in private with",
];

/// Rewards for on-brand praise.
pub const ON_BRAND_PRAISE_REWARDS: AffinityRewards = AffinityRewards::uniform(10.0);

/// Rewards for general success.
pub const GENERAL_SUCCESS_REWARDS: AffinityRewards = AffinityRewards {
    oshi: 5.0,
    gachikoi: 0.0,
};

/// Rewards for private-life disclosure.
pub const PRIVATE_LIFE_REWARDS: AffinityRewards = AffinityRewards {
    oshi: 3.0,
    gachikoi: -10.0,
};

/// The three fan rules in priority order.
pub fn fan_rules() -> [KeywordRule; 3] {
    [
        KeywordRule::new(
            RewardCategory::OnBrandPraise,
            ON_BRAND_PRAISE_TRIGGERS,
            ON_BRAND_PRAISE_REWARDS,
        ),
        KeywordRule::new(
            RewardCategory::GeneralSuccess,
            GENERAL_SUCCESS_TRIGGERS,
            GENERAL_SUCCESS_REWARDS,
        ),
        KeywordRule::new(
            RewardCategory::PrivateLifeDisclosure,
            PRIVATE_LIFE_TRIGGERS,
            PRIVATE_LIFE_REWARDS,
        ),
    ]
}

/// Fan rules on top of the neutral base classifier.
pub fn fan_classifier() -> EventClassifier {
    fan_rules()
        .into_iter()
        .fold(EventClassifier::neutral(), |classifier, rule| {
            classifier.with_rule(rule)
        })
}
