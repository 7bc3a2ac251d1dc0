use std::sync::Arc;

use crate::error::{ErrorSeverity, GameError};
use crate::stats::Stats;
use crate::strategy::{
    AttackStrategy, AttackStyle, DefenseStrategy, DefenseStyle, SharedAttackStrategy,
    SharedDefenseStrategy,
};

use super::{Archetype, Character};

/// A required field was never supplied to [`CharacterBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl GameError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CHARACTER_MISSING_FIELD"
    }
}

/// Step-by-step character assembly.
///
/// Every field is required; [`build`](Self::build) reports the first one that
/// is missing, checking in declaration order.
///
/// ```
/// use arena_core::{Archetype, AttackStyle, Character, DefenseStyle, Stats};
///
/// let hero = Character::builder()
///     .name("Aragorn")
///     .archetype(Archetype::Warrior)
///     .stats(Stats::full(150, 40, 30, 0).unwrap())
///     .attack_style(AttackStyle::Melee)
///     .defense_style(DefenseStyle::HeavyArmor)
///     .build()
///     .unwrap();
/// assert_eq!(hero.name(), "Aragorn");
/// ```
#[derive(Default)]
pub struct CharacterBuilder {
    name: Option<String>,
    archetype: Option<Archetype>,
    stats: Option<Stats>,
    attack_strategy: Option<SharedAttackStrategy>,
    defense_strategy: Option<SharedDefenseStrategy>,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn attack_strategy(self, strategy: impl AttackStrategy + 'static) -> Self {
        self.shared_attack_strategy(Arc::new(strategy))
    }

    pub fn shared_attack_strategy(mut self, strategy: SharedAttackStrategy) -> Self {
        self.attack_strategy = Some(strategy);
        self
    }

    pub fn attack_style(self, style: AttackStyle) -> Self {
        self.shared_attack_strategy(style.strategy())
    }

    pub fn defense_strategy(self, strategy: impl DefenseStrategy + 'static) -> Self {
        self.shared_defense_strategy(Arc::new(strategy))
    }

    pub fn shared_defense_strategy(mut self, strategy: SharedDefenseStrategy) -> Self {
        self.defense_strategy = Some(strategy);
        self
    }

    pub fn defense_style(self, style: DefenseStyle) -> Self {
        self.shared_defense_strategy(style.strategy())
    }

    /// Validates all required fields and constructs the character.
    pub fn build(self) -> Result<Character, BuildError> {
        let name = self.name.ok_or(BuildError::MissingField("name"))?;
        let archetype = self.archetype.ok_or(BuildError::MissingField("archetype"))?;
        let stats = self.stats.ok_or(BuildError::MissingField("stats"))?;
        let attack_strategy = self
            .attack_strategy
            .ok_or(BuildError::MissingField("attack_strategy"))?;
        let defense_strategy = self
            .defense_strategy
            .ok_or(BuildError::MissingField("defense_strategy"))?;

        Ok(Character::new(
            name,
            archetype,
            stats,
            attack_strategy,
            defense_strategy,
        ))
    }
}
