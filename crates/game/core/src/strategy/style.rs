use std::sync::Arc;

use crate::error::{ParseError, parse_variant};

use super::{
    HeavyArmorDefense, MagicAttack, MeleeAttack, RangedAttack, SharedAttackStrategy,
    SharedDefenseStrategy, StandardDefense,
};

/// Named selector for the built-in attack strategies.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum AttackStyle {
    Melee,
    Magic,
    Ranged,
}

impl AttackStyle {
    /// Parses a style name, rejecting anything that is not a built-in variant.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        parse_variant("attack style", name)
    }

    /// Returns a shared instance of the strategy this style selects.
    pub fn strategy(self) -> SharedAttackStrategy {
        match self {
            Self::Melee => Arc::new(MeleeAttack),
            Self::Magic => Arc::new(MagicAttack),
            Self::Ranged => Arc::new(RangedAttack),
        }
    }
}

/// Named selector for the built-in defense strategies.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DefenseStyle {
    Standard,
    HeavyArmor,
}

impl DefenseStyle {
    /// Parses a style name, rejecting anything that is not a built-in variant.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        parse_variant("defense style", name)
    }

    /// Returns a shared instance of the strategy this style selects.
    pub fn strategy(self) -> SharedDefenseStrategy {
        match self {
            Self::Standard => Arc::new(StandardDefense),
            Self::HeavyArmor => Arc::new(HeavyArmorDefense),
        }
    }
}
