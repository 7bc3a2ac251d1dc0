//! Duel scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::DuelConfig;

/// Loader for duel scenarios from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a scenario from a TOML file.
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse and validate scenario TOML text.
    pub fn parse(content: &str) -> LoadResult<DuelConfig> {
        let config: DuelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;

        tracing::debug!(
            challenger = %config.challenger.name,
            opponent = %config.opponent.name,
            sequence = %config.sequence,
            "scenario loaded"
        );
        Ok(config)
    }
}
