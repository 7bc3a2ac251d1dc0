//! Deterministic turn-based combat rules.
//!
//! `arena-core` defines the canonical combat model shared by content loaders
//! and drivers:
//! - [`Stats`]: immutable, invariant-checked character numbers
//! - [`strategy`]: pluggable attack and defense algorithms
//! - [`Character`]: a participant composing stats with strategies
//! - [`command`]: reversible actions and the undo-capable [`CommandInvoker`]
//! - [`turn`]: the fixed five-step turn skeleton and its sequences
//!
//! Everything is synchronous and free of randomness: the same inputs always
//! produce the same outcome.
pub mod character;
pub mod command;
pub mod config;
pub mod error;
pub mod roster;
pub mod stats;
pub mod strategy;
pub mod turn;

pub use character::{Archetype, BuildError, Character, CharacterBuilder};
pub use command::{AttackCommand, CommandInvoker, GameCommand, HealCommand};
pub use config::{CombatConfig, Ratio};
pub use error::{CombatError, ErrorSeverity, GameError, ParseError};
pub use roster::{ActorId, Roster};
pub use stats::{RawStats, Stats, StatsError};
pub use strategy::{
    AttackStrategy, AttackStyle, DefenseStrategy, DefenseStyle, HeavyArmorDefense, MagicAttack,
    MeleeAttack, RangedAttack, SharedAttackStrategy, SharedDefenseStrategy, StandardDefense,
};
pub use turn::{
    BattleSequence, PowerAttackSequence, SequenceKind, StandardBattleSequence, Turn, TurnOutcome,
    TurnStep, TurnStepError, execute_turn,
};
