//! Content factory for loading combat data from a directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, LoadResult, PresetLoader};
use crate::presets::{CharacterFactory, PresetRegistry};
use crate::scenario::DuelConfig;

/// Loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── duel.toml
/// └── presets.ron
/// ```
///
/// Both files are optional; missing files fall back to built-in defaults.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const SCENARIO_FILE: &'static str = "duel.toml";
    pub const PRESETS_FILE: &'static str = "presets.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the duel scenario from `duel.toml`, or the default scenario.
    pub fn load_scenario(&self) -> LoadResult<DuelConfig> {
        let path = self.data_dir.join(Self::SCENARIO_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no scenario file, using default");
            return Ok(DuelConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load archetype presets from `presets.ron`, or the built-in table.
    pub fn load_presets(&self) -> LoadResult<PresetRegistry> {
        let path = self.data_dir.join(Self::PRESETS_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no preset file, using built-in");
            return Ok(PresetRegistry::builtin());
        }
        PresetLoader::load_registry(&path)
    }

    /// Character factory over the loaded presets.
    pub fn character_factory(&self) -> LoadResult<CharacterFactory> {
        Ok(CharacterFactory::new(self.load_presets()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
