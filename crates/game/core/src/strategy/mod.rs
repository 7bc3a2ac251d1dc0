//! Pluggable combat algorithms.
//!
//! Two capability sets are kept apart:
//! - [`AttackStrategy`]: `(attacker, target) → raw damage`, may spend the
//!   attacker's resources
//! - [`DefenseStrategy`]: `(defender, incoming) → damage after mitigation`, pure
//!
//! Characters hold strategies behind `Arc`, so a single stateless instance is
//! shared by every character using it and can be swapped at runtime. New
//! strategies only need to implement the trait; neither [`Character`] nor the
//! command machinery has to change.

mod attack;
mod defense;
mod style;

pub use attack::{MagicAttack, MeleeAttack, RangedAttack};
pub use defense::{HeavyArmorDefense, StandardDefense};
pub use style::{AttackStyle, DefenseStyle};

use std::sync::Arc;

use crate::character::Character;
use crate::error::CombatError;

/// Computes the raw damage an attacker deals to a target.
pub trait AttackStrategy: Send + Sync {
    /// Short stable name used in logs and descriptions.
    fn name(&self) -> &'static str;

    /// Returns damage before the target's defense is applied.
    ///
    /// Resource costs are paid through `attacker`. When a cost cannot be paid
    /// the strategy fails and the caller must not apply any damage.
    fn calculate_damage(
        &self,
        attacker: &mut Character,
        target: &Character,
    ) -> Result<i32, CombatError>;
}

/// Reduces incoming damage according to the defender's stats.
pub trait DefenseStrategy: Send + Sync {
    /// Short stable name used in logs and descriptions.
    fn name(&self) -> &'static str;

    /// Returns the damage that remains after mitigation.
    fn mitigate(&self, defender: &Character, incoming: i32) -> i32;
}

/// Shared handle to an attack strategy.
pub type SharedAttackStrategy = Arc<dyn AttackStrategy>;

/// Shared handle to a defense strategy.
pub type SharedDefenseStrategy = Arc<dyn DefenseStrategy>;
