//! Common error infrastructure for arena-core.
//!
//! Domain errors that belong to one concept live next to it (`StatsError` in
//! [`crate::stats`], `BuildError` in [`crate::character`], `TurnStepError` in
//! [`crate::turn`]). Errors shared by strategies, actors, commands and the
//! roster are defined here.
//!
//! Every error type implements [`GameError`] so callers can classify failures
//! uniformly without matching on individual variants.

use crate::roster::ActorId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed after the world changes
///   (e.g. the caster regains mana)
/// - **Validation**: malformed input that must be fixed before retrying
/// - **Internal**: the caller drove an object through an impossible sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry once resources allow.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - misuse of a stateful object.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while resolving combat operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// The acting character does not hold enough mana.
    #[error("Not enough mana: required {required}, available {available}")]
    InsufficientMana { required: i32, available: i32 },

    /// The id does not refer to a character in the roster.
    #[error("Actor {0} not found in roster")]
    ActorNotFound(ActorId),

    /// Two distinct characters were required but the same id was given twice.
    #[error("Actor {0} cannot be paired with itself")]
    SameActor(ActorId),

    /// Undo requested for a command that has no applied effect to revert.
    #[error("Command has not been executed")]
    NotExecuted,

    /// Execute requested for a command whose effect is already applied.
    #[error("Command has already been executed")]
    AlreadyExecuted,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        use CombatError::*;
        match self {
            InsufficientMana { .. } => ErrorSeverity::Recoverable,
            ActorNotFound(_) | SameActor(_) => ErrorSeverity::Validation,
            NotExecuted | AlreadyExecuted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            InsufficientMana { .. } => "COMBAT_INSUFFICIENT_MANA",
            ActorNotFound(_) => "COMBAT_ACTOR_NOT_FOUND",
            SameActor(_) => "COMBAT_SAME_ACTOR",
            NotExecuted => "COMBAT_NOT_EXECUTED",
            AlreadyExecuted => "COMBAT_ALREADY_EXECUTED",
        }
    }
}

/// A name did not match any concrete variant of a closed selector type
/// (archetype, attack style, defense style, sequence kind).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl GameError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVALID_ARGUMENT"
    }
}

/// Parses a selector name through its `strum::EnumString` derive, mapping the
/// opaque strum error onto [`ParseError`].
pub(crate) fn parse_variant<T>(kind: &'static str, value: &str) -> Result<T, ParseError>
where
    T: core::str::FromStr,
{
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::new(kind, value))
}
