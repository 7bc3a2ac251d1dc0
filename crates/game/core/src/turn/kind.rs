use crate::error::{ParseError, parse_variant};

use super::{BattleSequence, PowerAttackSequence, StandardBattleSequence};

/// Named selector for the built-in turn sequences.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SequenceKind {
    #[default]
    Standard,
    PowerAttack,
}

impl SequenceKind {
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        parse_variant("sequence kind", name)
    }

    /// Returns a fresh sequence; per-turn state (e.g. power bonus) starts empty.
    pub fn build(self) -> Box<dyn BattleSequence> {
        match self {
            Self::Standard => Box::new(StandardBattleSequence),
            Self::PowerAttack => Box::new(PowerAttackSequence::new()),
        }
    }
}
