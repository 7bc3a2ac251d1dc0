use crate::error::{ErrorSeverity, GameError};

/// Stat values rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Max health must be positive (got {0})")]
    NonPositiveMaxHealth(i32),

    #[error("Health {health} outside [0, {max_health}]")]
    HealthOutOfRange { health: i32, max_health: i32 },

    #[error("Attack power cannot be negative (got {0})")]
    NegativeAttackPower(i32),

    #[error("Defense cannot be negative (got {0})")]
    NegativeDefense(i32),

    #[error("Max mana cannot be negative (got {0})")]
    NegativeMaxMana(i32),

    #[error("Mana {mana} outside [0, {max_mana}]")]
    ManaOutOfRange { mana: i32, max_mana: i32 },
}

impl GameError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StatsError::*;
        match self {
            NonPositiveMaxHealth(_) => "STATS_NON_POSITIVE_MAX_HEALTH",
            HealthOutOfRange { .. } => "STATS_HEALTH_OUT_OF_RANGE",
            NegativeAttackPower(_) => "STATS_NEGATIVE_ATTACK_POWER",
            NegativeDefense(_) => "STATS_NEGATIVE_DEFENSE",
            NegativeMaxMana(_) => "STATS_NEGATIVE_MAX_MANA",
            ManaOutOfRange { .. } => "STATS_MANA_OUT_OF_RANGE",
        }
    }
}
