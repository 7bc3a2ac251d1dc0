//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use arena_content::{CharacterFactory, ConfigLoader, DuelConfig, PresetLoader, PresetRegistry};
use arena_core::SequenceKind;

/// Where the duel driver takes its content from.
///
/// Overrides are kept as raw text and parsed by [`scenario`](Self::scenario),
/// so a malformed value is reported instead of ignored.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub scenario_path: Option<PathBuf>,
    pub presets_path: Option<PathBuf>,
    pub max_rounds: Option<String>,
    pub sequence: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_CONFIG` - Duel scenario TOML (default: built-in scenario)
    /// - `ARENA_PRESETS` - Archetype preset RON (default: built-in presets)
    /// - `ARENA_MAX_ROUNDS` - Overrides the scenario's round limit
    /// - `ARENA_SEQUENCE` - Overrides the scenario's turn sequence
    pub fn from_env() -> Self {
        Self {
            scenario_path: env::var_os("ARENA_CONFIG").map(PathBuf::from),
            presets_path: env::var_os("ARENA_PRESETS").map(PathBuf::from),
            max_rounds: env::var("ARENA_MAX_ROUNDS").ok(),
            sequence: env::var("ARENA_SEQUENCE").ok(),
        }
    }

    /// Resolve the scenario, applying environment overrides.
    pub fn scenario(&self) -> anyhow::Result<DuelConfig> {
        let mut scenario = match &self.scenario_path {
            Some(path) => ConfigLoader::load(path)?,
            None => DuelConfig::default(),
        };
        if let Some(rounds) = &self.max_rounds {
            scenario.max_rounds = rounds
                .trim()
                .parse()
                .with_context(|| format!("Invalid ARENA_MAX_ROUNDS '{rounds}'"))?;
        }
        if let Some(sequence) = &self.sequence {
            scenario.sequence =
                SequenceKind::from_name(sequence).context("Invalid ARENA_SEQUENCE")?;
        }
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn character_factory(&self) -> anyhow::Result<CharacterFactory> {
        let registry = match &self.presets_path {
            Some(path) => PresetLoader::load_registry(path)?,
            None => PresetRegistry::builtin(),
        };
        Ok(CharacterFactory::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_scenario() {
        let config = CliConfig {
            max_rounds: Some("3".to_owned()),
            sequence: Some("power_attack".to_owned()),
            ..CliConfig::default()
        };

        let scenario = config.scenario().unwrap();

        assert_eq!(scenario.max_rounds, 3);
        assert_eq!(scenario.sequence, SequenceKind::PowerAttack);
        assert_eq!(scenario.challenger, DuelConfig::default().challenger);
    }

    #[test]
    fn unknown_sequence_is_rejected() {
        let config = CliConfig {
            sequence: Some("combo_strike".to_owned()),
            ..CliConfig::default()
        };

        let error = config.scenario().unwrap_err();

        assert!(error.to_string().contains("ARENA_SEQUENCE"));
        assert!(format!("{error:#}").contains("Unknown sequence kind: 'combo_strike'"));
    }

    #[test]
    fn malformed_round_limit_is_rejected() {
        let non_numeric = CliConfig {
            max_rounds: Some("abc".to_owned()),
            ..CliConfig::default()
        };
        assert!(non_numeric.scenario().is_err());

        let zero = CliConfig {
            max_rounds: Some("0".to_owned()),
            ..CliConfig::default()
        };
        assert!(zero.scenario().is_err());
    }

    #[test]
    fn missing_scenario_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            scenario_path: Some(dir.path().join("missing.toml")),
            ..CliConfig::default()
        };
        assert!(config.scenario().is_err());
    }
}
