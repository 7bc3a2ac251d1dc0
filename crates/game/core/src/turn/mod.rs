//! Turn skeleton and the concrete sequences built on it.
//!
//! [`execute_turn`] drives every sequence through the same fixed order:
//!
//! ```text
//! begin_turn → pre_attack_action → perform_attack → post_attack_action → end_turn
//! ```
//!
//! Sequences customize steps by overriding [`BattleSequence`] hooks; they can
//! not reorder, skip or add steps. The first failing step aborts the turn and
//! is reported through [`TurnStepError`].

mod kind;
mod power;
mod standard;

pub use kind::SequenceKind;
pub use power::PowerAttackSequence;
pub use standard::StandardBattleSequence;

use crate::character::Character;
use crate::error::{CombatError, ErrorSeverity, GameError};

/// The two participants of a turn.
pub struct Turn<'a> {
    pub attacker: &'a mut Character,
    pub defender: &'a mut Character,
}

impl Turn<'_> {
    /// Attacker strikes defender with `bonus` added to the raw damage.
    ///
    /// Returns the raw damage handed to the defender's `take_damage`.
    pub fn strike(&mut self, bonus: i32) -> Result<i32, CombatError> {
        let raw = self.attacker.attack(&*self.defender)?;
        let damage = raw.saturating_add(bonus);
        self.defender.take_damage(damage);
        Ok(damage)
    }
}

/// Hook steps of a combat turn. Only `perform_attack` is required.
pub trait BattleSequence {
    fn begin_turn(&mut self, _turn: &mut Turn<'_>) -> Result<(), CombatError> {
        Ok(())
    }

    fn pre_attack_action(&mut self, _turn: &mut Turn<'_>) -> Result<(), CombatError> {
        Ok(())
    }

    fn perform_attack(&mut self, turn: &mut Turn<'_>) -> Result<(), CombatError>;

    fn post_attack_action(&mut self, _turn: &mut Turn<'_>) -> Result<(), CombatError> {
        Ok(())
    }

    fn end_turn(&mut self, _turn: &mut Turn<'_>) -> Result<(), CombatError> {
        Ok(())
    }
}

/// Identifies which step of the turn skeleton produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnStep {
    BeginTurn,
    PreAttackAction,
    PerformAttack,
    PostAttackAction,
    EndTurn,
}

impl TurnStep {
    /// Steps in execution order.
    pub const ORDER: [TurnStep; 5] = [
        TurnStep::BeginTurn,
        TurnStep::PreAttackAction,
        TurnStep::PerformAttack,
        TurnStep::PostAttackAction,
        TurnStep::EndTurn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TurnStep::BeginTurn => "begin_turn",
            TurnStep::PreAttackAction => "pre_attack_action",
            TurnStep::PerformAttack => "perform_attack",
            TurnStep::PostAttackAction => "post_attack_action",
            TurnStep::EndTurn => "end_turn",
        }
    }
}

/// Associates a turn step with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} failed: {error}", .step.as_str())]
pub struct TurnStepError {
    pub step: TurnStep,
    #[source]
    pub error: CombatError,
}

impl TurnStepError {
    pub fn new(step: TurnStep, error: CombatError) -> Self {
        Self { step, error }
    }
}

impl GameError for TurnStepError {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}

/// Health changes observed across one completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Health the defender lost.
    pub damage_dealt: i32,
    /// Health the attacker lost (recoil and similar self-costs).
    pub recoil_taken: i32,
    pub defender_defeated: bool,
}

/// Runs `sequence` through the fixed five-step skeleton.
pub fn execute_turn<S>(
    sequence: &mut S,
    attacker: &mut Character,
    defender: &mut Character,
) -> Result<TurnOutcome, TurnStepError>
where
    S: BattleSequence + ?Sized,
{
    let attacker_before = attacker.stats().health();
    let defender_before = defender.stats().health();
    let mut turn = Turn { attacker, defender };

    drive_step(TurnStep::BeginTurn, sequence.begin_turn(&mut turn))?;
    drive_step(
        TurnStep::PreAttackAction,
        sequence.pre_attack_action(&mut turn),
    )?;
    drive_step(TurnStep::PerformAttack, sequence.perform_attack(&mut turn))?;
    drive_step(
        TurnStep::PostAttackAction,
        sequence.post_attack_action(&mut turn),
    )?;
    drive_step(TurnStep::EndTurn, sequence.end_turn(&mut turn))?;

    let outcome = TurnOutcome {
        damage_dealt: defender_before - turn.defender.stats().health(),
        recoil_taken: attacker_before - turn.attacker.stats().health(),
        defender_defeated: turn.defender.is_dead(),
    };
    tracing::debug!(
        attacker = turn.attacker.name(),
        defender = turn.defender.name(),
        damage = outcome.damage_dealt,
        recoil = outcome.recoil_taken,
        "turn complete"
    );
    Ok(outcome)
}

#[inline]
fn drive_step(step: TurnStep, result: Result<(), CombatError>) -> Result<(), TurnStepError> {
    tracing::trace!(step = step.as_str(), ok = result.is_ok(), "turn step");
    result.map_err(|error| TurnStepError::new(step, error))
}
