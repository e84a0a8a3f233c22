//! Scenario lookup used to name the idol in scripted events.
//!
//! Resolution is best-effort: any failure (no scenario, unknown player,
//! empty name) produces the configured fallback name instead of an error.
//! A non-empty name is used exactly as the scenario stores it.

use fandom_core::SimulationConfig;
use fandom_types::PersonaProfile;
use tracing::debug;

/// Errors a scenario lookup can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// No player matches the requested name.
    #[error("no player named {name:?} in scenario")]
    PlayerNotFound {
        /// The requested name.
        name: String,
    },

    /// The player exists but has an empty display name.
    #[error("player {name:?} has an empty display name")]
    MissingName {
        /// The requested name.
        name: String,
    },
}

/// Player directory supplied by the host.
pub trait Scenario {
    /// Find a player by name.
    fn get_player_by_name(&self, name: &str) -> Result<&PersonaProfile, ScenarioError>;
}

/// In-memory scenario over a fixed list of personas.
///
/// A lookup key matches a persona's `role` first, then its `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticScenario {
    players: Vec<PersonaProfile>,
}

impl StaticScenario {
    /// Scenario over the given personas.
    pub const fn new(players: Vec<PersonaProfile>) -> Self {
        Self { players }
    }

    /// Scenario over the personas listed in the config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.personas.clone())
    }

    /// All personas, in insertion order.
    pub fn players(&self) -> &[PersonaProfile] {
        &self.players
    }
}

impl Scenario for StaticScenario {
    fn get_player_by_name(&self, name: &str) -> Result<&PersonaProfile, ScenarioError> {
        let player = self
            .players
            .iter()
            .find(|p| p.role.as_deref() == Some(name))
            .or_else(|| self.players.iter().find(|p| p.name == name))
            .ok_or_else(|| ScenarioError::PlayerNotFound {
                name: name.to_owned(),
            })?;
        if player.name.is_empty() {
            return Err(ScenarioError::MissingName {
                name: name.to_owned(),
            });
        }
        Ok(player)
    }
}

/// Outcome of display-name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedName {
    /// Name found in the scenario.
    Scenario(String),
    /// Lookup failed; the fallback literal is used.
    Fallback(String),
}

impl ResolvedName {
    /// The resolved name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scenario(name) | Self::Fallback(name) => name,
        }
    }

    /// Whether the fallback was used.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Look `lookup` up in `scenario`, falling back to `fallback` on any failure.
pub fn resolve_display_name(
    scenario: Option<&dyn Scenario>,
    lookup: &str,
    fallback: &str,
) -> ResolvedName {
    let Some(scenario) = scenario else {
        debug!(lookup, fallback, "No scenario supplied, using fallback name");
        return ResolvedName::Fallback(fallback.to_owned());
    };
    match lookup_display_name(scenario, lookup) {
        Ok(name) => ResolvedName::Scenario(name),
        Err(e) => {
            debug!(lookup, fallback, error = %e, "Scenario lookup failed, using fallback name");
            ResolvedName::Fallback(fallback.to_owned())
        }
    }
}

/// Fetch a non-empty display name, whatever the scenario implementation.
fn lookup_display_name(scenario: &dyn Scenario, lookup: &str) -> Result<String, ScenarioError> {
    let player = scenario.get_player_by_name(lookup)?;
    if player.name.is_empty() {
        return Err(ScenarioError::MissingName {
            name: lookup.to_owned(),
        });
    }
    Ok(player.name.clone())
}

#[cfg(test)]
mod tests {
    use fandom_types::AffinityType;

    use super::*;

    fn cast() -> StaticScenario {
        StaticScenario::new(vec![
            PersonaProfile::fan("Ren", AffinityType::Gachikoi),
            PersonaProfile::named("Hoshino Ai").with_role("Idol"),
            PersonaProfile::named("Mika"),
        ])
    }

    /// Scenario that hands back empty names without complaint.
    struct CarelessScenario(PersonaProfile);

    impl Scenario for CarelessScenario {
        fn get_player_by_name(&self, _name: &str) -> Result<&PersonaProfile, ScenarioError> {
            Ok(&self.0)
        }
    }

    #[test]
    fn role_match_takes_precedence() {
        let scenario = cast();
        let player = scenario.get_player_by_name("Idol");
        assert_eq!(player.map(|p| p.name.as_str()), Ok("Hoshino Ai"));
    }

    #[test]
    fn name_match_is_used_without_role() {
        let scenario = cast();
        let player = scenario.get_player_by_name("Mika");
        assert_eq!(player.map(|p| p.name.as_str()), Ok("Mika"));
    }

    #[test]
    fn unknown_player_is_an_error() {
        let scenario = cast();
        assert_eq!(
            scenario.get_player_by_name("Producer"),
            Err(ScenarioError::PlayerNotFound {
                name: "Producer".to_owned()
            })
        );
    }

    #[test]
    fn resolves_from_scenario() {
        let scenario = cast();
        let resolved = resolve_display_name(Some(&scenario), "Idol", "Idol");
        assert_eq!(resolved, ResolvedName::Scenario("Hoshino Ai".to_owned()));
        assert!(!resolved.is_fallback());
    }

    #[test]
    fn falls_back_without_scenario() {
        let resolved = resolve_display_name(None, "Idol", "Idol");
        assert_eq!(resolved, ResolvedName::Fallback("Idol".to_owned()));
        assert_eq!(resolved.as_str(), "Idol");
    }

    #[test]
    fn falls_back_on_unknown_player() {
        let scenario = StaticScenario::default();
        let resolved = resolve_display_name(Some(&scenario), "Idol", "Idol");
        assert!(resolved.is_fallback());
    }

    #[test]
    fn falls_back_on_empty_name() {
        let blank = StaticScenario::new(vec![PersonaProfile::named("").with_role("Idol")]);
        assert!(resolve_display_name(Some(&blank), "Idol", "Idol").is_fallback());

        let careless = CarelessScenario(PersonaProfile::named(""));
        let resolved = resolve_display_name(Some(&careless), "Idol", "Someone");
        assert_eq!(resolved, ResolvedName::Fallback("Someone".to_owned()));
    }

    #[test]
    fn resolved_name_is_kept_verbatim() {
        let scenario = StaticScenario::new(vec![PersonaProfile::named(" Ai ").with_role("Idol")]);
        let resolved = resolve_display_name(Some(&scenario), "Idol", "Idol");
        assert_eq!(resolved, ResolvedName::Scenario(" Ai ".to_owned()));
    }

    #[test]
    fn scenario_from_config_uses_personas() {
        let mut config = SimulationConfig::default();
        config.personas = vec![PersonaProfile::named("Aqua").with_role("Idol")];
        let scenario = StaticScenario::from_config(&config);
        assert_eq!(scenario.players().len(), 1);
        assert_eq!(
            resolve_display_name(Some(&scenario), "Idol", "Idol").as_str(),
            "Aqua"
        );
    }
}
