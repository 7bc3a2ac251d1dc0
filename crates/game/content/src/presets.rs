//! Archetype presets and the character factory built on them.
//!
//! Every [`Archetype`] always has exactly one preset. The built-in table is the
//! starting point; data files may replace individual entries through
//! [`PresetRegistry::apply`], which validates the numbers first.

use arena_core::{Archetype, AttackStyle, Character, DefenseStyle, ParseError, Stats, StatsError};
use strum::IntoEnumIterator;

/// Validated starting numbers and strategy choice for one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterPreset {
    /// Full health and full mana.
    pub stats: Stats,
    pub attack_style: AttackStyle,
    pub defense_style: DefenseStyle,
}

impl CharacterPreset {
    const fn builtin(
        max_health: i32,
        attack_power: i32,
        defense: i32,
        max_mana: i32,
        attack_style: AttackStyle,
        defense_style: DefenseStyle,
    ) -> Self {
        let stats = match Stats::full(max_health, attack_power, defense, max_mana) {
            Ok(stats) => stats,
            Err(_) => panic!("built-in preset has invalid stats"),
        };
        Self {
            stats,
            attack_style,
            defense_style,
        }
    }
}

const ARCHETYPE_COUNT: usize = 4;

/// Indexed by `Archetype as usize`.
const BUILTIN_PRESETS: [CharacterPreset; ARCHETYPE_COUNT] = [
    CharacterPreset::builtin(150, 40, 30, 0, AttackStyle::Melee, DefenseStyle::HeavyArmor),
    CharacterPreset::builtin(80, 60, 10, 100, AttackStyle::Magic, DefenseStyle::Standard),
    CharacterPreset::builtin(100, 50, 15, 20, AttackStyle::Ranged, DefenseStyle::Standard),
    CharacterPreset::builtin(90, 55, 20, 30, AttackStyle::Melee, DefenseStyle::Standard),
];

/// Unvalidated preset row as written in data files.
///
/// RON format:
///
/// ```text
/// (
///     archetype: mage,
///     max_health: 90,
///     attack_power: 65,
///     defense: 10,
///     max_mana: 120,
///     attack_style: magic,
///     defense_style: standard,
/// )
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetSpec {
    pub archetype: Archetype,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_mana: i32,
    pub attack_style: AttackStyle,
    pub defense_style: DefenseStyle,
}

impl PresetSpec {
    /// Validates the numbers and produces a full-health preset.
    pub fn resolve(&self) -> Result<CharacterPreset, StatsError> {
        Ok(CharacterPreset {
            stats: Stats::full(
                self.max_health,
                self.attack_power,
                self.defense,
                self.max_mana,
            )?,
            attack_style: self.attack_style,
            defense_style: self.defense_style,
        })
    }

    /// Inverse of [`resolve`](Self::resolve), used to export a registry.
    pub fn from_preset(archetype: Archetype, preset: &CharacterPreset) -> Self {
        Self {
            archetype,
            max_health: preset.stats.max_health(),
            attack_power: preset.stats.attack_power(),
            defense: preset.stats.defense(),
            max_mana: preset.stats.max_mana(),
            attack_style: preset.attack_style,
            defense_style: preset.defense_style,
        }
    }
}

/// One preset per archetype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetRegistry {
    presets: [CharacterPreset; ARCHETYPE_COUNT],
}

impl PresetRegistry {
    /// The stock balance table.
    pub const fn builtin() -> Self {
        Self {
            presets: BUILTIN_PRESETS,
        }
    }

    pub fn get(&self, archetype: Archetype) -> &CharacterPreset {
        &self.presets[archetype as usize]
    }

    /// Replaces one archetype's preset, returning the previous entry.
    pub fn apply(&mut self, spec: &PresetSpec) -> Result<CharacterPreset, StatsError> {
        let preset = spec.resolve()?;
        tracing::debug!(archetype = %spec.archetype, "preset overridden");
        Ok(std::mem::replace(&mut self.presets[spec.archetype as usize], preset))
    }

    /// Applies every spec, or none of them if any is invalid.
    ///
    /// When an archetype appears more than once the last row wins.
    pub fn apply_all<'a, I>(&mut self, specs: I) -> Result<(), (Archetype, StatsError)>
    where
        I: IntoIterator<Item = &'a PresetSpec>,
    {
        let resolved = specs
            .into_iter()
            .map(|spec| {
                spec.resolve()
                    .map(|preset| (spec.archetype, preset))
                    .map_err(|error| (spec.archetype, error))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (archetype, preset) in resolved {
            tracing::debug!(%archetype, "preset overridden");
            self.presets[archetype as usize] = preset;
        }
        Ok(())
    }

    /// Presets in archetype declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, &CharacterPreset)> + '_ {
        Archetype::iter().map(move |archetype| (archetype, self.get(archetype)))
    }

    /// Exports the registry as data-file rows.
    pub fn to_specs(&self) -> Vec<PresetSpec> {
        self.iter()
            .map(|(archetype, preset)| PresetSpec::from_preset(archetype, preset))
            .collect()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Spawns fully equipped characters from archetype presets.
#[derive(Clone, Debug, Default)]
pub struct CharacterFactory {
    registry: PresetRegistry,
}

impl CharacterFactory {
    pub fn new(registry: PresetRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Creates a character at full health and mana with the archetype's
    /// default strategies.
    pub fn create(&self, name: impl Into<String>, archetype: Archetype) -> Character {
        let preset = self.registry.get(archetype);
        Character::new(
            name,
            archetype,
            preset.stats,
            preset.attack_style.strategy(),
            preset.defense_style.strategy(),
        )
    }

    /// Like [`create`](Self::create), parsing the archetype from text.
    pub fn create_from_name(
        &self,
        name: impl Into<String>,
        archetype: &str,
    ) -> Result<Character, ParseError> {
        Ok(self.create(name, Archetype::from_name(archetype)?))
    }

    pub fn create_warrior(&self, name: impl Into<String>) -> Character {
        self.create(name, Archetype::Warrior)
    }

    pub fn create_mage(&self, name: impl Into<String>) -> Character {
        self.create(name, Archetype::Mage)
    }

    pub fn create_archer(&self, name: impl Into<String>) -> Character {
        self.create(name, Archetype::Archer)
    }

    pub fn create_rogue(&self, name: impl Into<String>) -> Character {
        self.create(name, Archetype::Rogue)
    }
}
