//! Combat participants.
//!
//! A [`Character`] composes an immutable [`Stats`] snapshot with one attack
//! and one defense strategy. Every mutation replaces the snapshot wholesale,
//! so the stat bounds hold after each operation by construction.

mod archetype;
mod builder;

pub use archetype::Archetype;
pub use builder::{BuildError, CharacterBuilder};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::CombatError;
use crate::stats::Stats;
use crate::strategy::{SharedAttackStrategy, SharedDefenseStrategy};

/// A combat participant with stats and swappable behavior strategies.
///
/// Equality and hashing use identity only: `(name, archetype)`. Two handles on
/// the same character compare equal whatever their current health.
#[derive(Clone)]
pub struct Character {
    name: String,
    archetype: Archetype,
    stats: Stats,
    attack_strategy: SharedAttackStrategy,
    defense_strategy: SharedDefenseStrategy,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        stats: Stats,
        attack_strategy: SharedAttackStrategy,
        defense_strategy: SharedDefenseStrategy,
    ) -> Self {
        Self {
            name: name.into(),
            archetype,
            stats,
            attack_strategy,
            defense_strategy,
        }
    }

    /// Entry point for assembling a character field by field.
    pub fn builder() -> CharacterBuilder {
        CharacterBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn attack_strategy(&self) -> &SharedAttackStrategy {
        &self.attack_strategy
    }

    pub fn defense_strategy(&self) -> &SharedDefenseStrategy {
        &self.defense_strategy
    }

    /// Replaces the attack strategy; takes effect on the next attack.
    pub fn set_attack_strategy(&mut self, strategy: SharedAttackStrategy) {
        self.attack_strategy = strategy;
    }

    /// Replaces the defense strategy; takes effect on the next hit.
    pub fn set_defense_strategy(&mut self, strategy: SharedDefenseStrategy) {
        self.defense_strategy = strategy;
    }

    /// Computes raw damage against `target` using the current attack strategy.
    ///
    /// Resource costs (e.g. mana) are already paid when this returns `Ok`.
    /// On error nothing has been spent and the target is untouched.
    pub fn attack(&mut self, target: &Character) -> Result<i32, CombatError> {
        let strategy = Arc::clone(&self.attack_strategy);
        strategy.calculate_damage(self, target)
    }

    /// Passes `incoming` through the current defense strategy.
    pub fn defend(&self, incoming: i32) -> i32 {
        self.defense_strategy.mitigate(self, incoming)
    }

    /// Applies a hit: defense first, then health loss clamped at zero.
    pub fn take_damage(&mut self, amount: i32) {
        let net = self.defend(amount).max(0);
        self.stats = self.stats.with_health(self.stats.health().saturating_sub(net));
    }

    /// Restores health; overheal is capped at max health.
    pub fn heal(&mut self, amount: i32) {
        self.stats = self.stats.with_health(self.stats.health().saturating_add(amount));
    }

    /// Sets health directly, bypassing defense. Used by undo paths and recoil.
    pub fn set_health(&mut self, health: i32) {
        self.stats = self.stats.with_health(health);
    }

    /// Spends mana, failing without change when the pool is too small.
    pub fn use_mana(&mut self, amount: i32) -> Result<(), CombatError> {
        let available = self.stats.mana();
        if amount > available {
            return Err(CombatError::InsufficientMana {
                required: amount,
                available,
            });
        }
        self.stats = self.stats.with_mana(available.saturating_sub(amount));
        Ok(())
    }

    /// Refills mana; capped at max mana.
    pub fn restore_mana(&mut self, amount: i32) {
        self.stats = self.stats.with_mana(self.stats.mana().saturating_add(amount));
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.stats.is_dead()
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.archetype == other.archetype
    }
}

impl Eq for Character {}

impl Hash for Character {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.archetype.hash(state);
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("name", &self.name)
            .field("archetype", &self.archetype)
            .field("stats", &self.stats)
            .field("attack_strategy", &self.attack_strategy.name())
            .field("defense_strategy", &self.defense_strategy.name())
            .finish()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - HP: {}/{}, ATK: {}, DEF: {}",
            self.name,
            self.archetype,
            self.stats.health(),
            self.stats.max_health(),
            self.stats.attack_power(),
            self.stats.defense()
        )
    }
}
