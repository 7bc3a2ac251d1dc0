use crate::error::{ParseError, parse_variant};

/// Character class tag.
///
/// Part of a character's identity together with its name. The tag carries no
/// behavior on its own; strategies and stats decide how a character fights.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    /// Armored front-liner
    Warrior,
    /// Mana-fuelled caster
    Mage,
    /// Ranged finisher
    Archer,
    /// Fast melee striker
    Rogue,
}

impl Archetype {
    /// Parses an archetype name, rejecting unknown tags.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        parse_variant("archetype", name)
    }
}
