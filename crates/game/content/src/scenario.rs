//! Duel scenario description.

use arena_core::{Archetype, ErrorSeverity, GameError, SequenceKind};

/// Name and archetype of one duelist.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub archetype: Archetype,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            name: name.into(),
            archetype,
        }
    }
}

/// Reasons a scenario cannot be run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("max_rounds must be at least 1")]
    NoRounds,

    #[error("combatant names must not be empty")]
    EmptyName,
}

impl GameError for ScenarioError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRounds => "SCENARIO_NO_ROUNDS",
            Self::EmptyName => "SCENARIO_EMPTY_NAME",
        }
    }
}

/// A scripted one-on-one fight.
///
/// TOML format:
///
/// ```toml
/// sequence = "power_attack"
/// max_rounds = 12
/// undo_last_round = true
///
/// [challenger]
/// name = "Conan"
/// archetype = "warrior"
///
/// [opponent]
/// name = "Merlin"
/// archetype = "mage"
/// ```
///
/// Everything except the two combatants is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelConfig {
    pub challenger: CombatantSpec,
    pub opponent: CombatantSpec,
    /// Turn sequence used by both sides.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sequence: SequenceKind,
    /// Upper bound on rounds; one round is a turn for each side.
    #[cfg_attr(feature = "serde", serde(default = "default_max_rounds"))]
    pub max_rounds: u32,
    /// Revert the final round's counterattack through the command history.
    #[cfg_attr(feature = "serde", serde(default))]
    pub undo_last_round: bool,
}

impl DuelConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 20;

    /// Rejects scenarios that cannot produce a single turn.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.max_rounds == 0 {
            return Err(ScenarioError::NoRounds);
        }
        if self.challenger.name.trim().is_empty() || self.opponent.name.trim().is_empty() {
            return Err(ScenarioError::EmptyName);
        }
        Ok(())
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            challenger: CombatantSpec::new("Conan", Archetype::Warrior),
            opponent: CombatantSpec::new("Merlin", Archetype::Mage),
            sequence: SequenceKind::Standard,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            undo_last_round: false,
        }
    }
}

#[cfg(feature = "serde")]
fn default_max_rounds() -> u32 {
    DuelConfig::DEFAULT_MAX_ROUNDS
}
