//! Archetype preset loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::presets::{PresetRegistry, PresetSpec};

/// Loader for archetype preset tables from RON files.
pub struct PresetLoader;

impl PresetLoader {
    /// Load preset rows from a RON file.
    ///
    /// RON format: `Vec<PresetSpec>`. Archetypes that are not listed keep
    /// their built-in preset once applied to a registry.
    pub fn load(path: &Path) -> LoadResult<Vec<PresetSpec>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse preset RON {}: {}", path.display(), e))
    }

    /// Load a RON file and apply it on top of the built-in presets.
    pub fn load_registry(path: &Path) -> LoadResult<PresetRegistry> {
        let specs = Self::load(path)?;
        let mut registry = PresetRegistry::builtin();
        registry.apply_all(&specs).map_err(|(archetype, e)| {
            anyhow::anyhow!(
                "Invalid preset for '{}' in {}: {}",
                archetype,
                path.display(),
                e
            )
        })?;

        tracing::debug!(overrides = specs.len(), path = %path.display(), "presets loaded");
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arena_core::{Archetype, AttackStyle};

    use super::*;

    fn write_ron(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn overrides_only_listed_archetypes() {
        let file = write_ron(
            r#"[
    (
        archetype: mage,
        max_health: 90,
        attack_power: 65,
        defense: 10,
        max_mana: 120,
        attack_style: magic,
        defense_style: standard,
    ),
]"#,
        );

        let registry = PresetLoader::load_registry(file.path()).unwrap();

        let mage = registry.get(Archetype::Mage);
        assert_eq!(mage.stats.max_health(), 90);
        assert_eq!(mage.stats.mana(), 120);
        assert_eq!(
            registry.get(Archetype::Warrior),
            PresetRegistry::builtin().get(Archetype::Warrior)
        );
    }

    #[test]
    fn max_mana_defaults_to_zero() {
        let file = write_ron(
            r#"[(
    archetype: rogue,
    max_health: 90,
    attack_power: 55,
    defense: 20,
    attack_style: ranged,
    defense_style: standard,
)]"#,
        );

        let specs = PresetLoader::load(file.path()).unwrap();

        assert_eq!(specs[0].max_mana, 0);
        assert_eq!(specs[0].attack_style, AttackStyle::Ranged);
    }

    #[test]
    fn invalid_numbers_name_the_archetype() {
        let file = write_ron(
            r#"[(
    archetype: archer,
    max_health: 0,
    attack_power: 50,
    defense: 15,
    attack_style: ranged,
    defense_style: standard,
)]"#,
        );

        let error = PresetLoader::load_registry(file.path()).unwrap_err();

        assert!(error.to_string().contains("Invalid preset for 'archer'"));
    }

    #[test]
    fn unknown_style_fails_to_parse() {
        let file = write_ron(
            r#"[(
    archetype: warrior,
    max_health: 150,
    attack_power: 40,
    defense: 30,
    attack_style: laser,
    defense_style: heavy_armor,
)]"#,
        );

        let error = PresetLoader::load(file.path()).unwrap_err();

        assert!(error.to_string().contains("Failed to parse preset RON"));
    }

    #[test]
    fn exported_registry_reloads_identically() {
        let builtin = PresetRegistry::builtin();
        let text = ron::to_string(&builtin.to_specs()).unwrap();
        let file = write_ron(&text);

        assert_eq!(PresetLoader::load_registry(file.path()).unwrap(), builtin);
    }
}
