//! Data-driven combat content and loaders.
//!
//! This crate houses the archetype presets used to spawn characters and
//! provides loaders for RON/TOML data files:
//! - Archetype presets (built-in table, overridable via RON)
//! - Duel scenarios (data-driven via TOML)
//!
//! All loaders use arena-core types directly with serde for deserialization.

pub mod presets;
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use presets::{CharacterFactory, CharacterPreset, PresetRegistry, PresetSpec};
pub use scenario::{CombatantSpec, DuelConfig, ScenarioError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, PresetLoader};
