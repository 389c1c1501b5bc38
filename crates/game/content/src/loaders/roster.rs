//! Roster loader.
//!
//! Loads fighter templates from a TOML file. Any stat left out falls back to
//! the archetype's canonical value, so a file can override just one number.
//!
//! ```toml
//! [[fighter]]
//! archetype = "valkyrie"
//! name = "Brynhild"
//! attack_damage = 40.0
//! ```

use std::collections::HashSet;
use std::path::Path;

use arena_core::{Archetype, BaseStats, Fighter};

use crate::loaders::{LoadResult, read_file};
use crate::roster::Roster;

/// On-disk roster: an ordered list of fighter entries.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterSpec {
    #[serde(rename = "fighter", default)]
    pub fighters: Vec<FighterSpec>,
}

/// One template entry. Missing fields use the archetype defaults.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FighterSpec {
    pub archetype: Archetype,
    pub name: Option<String>,
    pub health: Option<f32>,
    pub armor: Option<f32>,
    pub attack_damage: Option<f32>,
}

impl FighterSpec {
    fn resolve(&self) -> LoadResult<Fighter> {
        let defaults = self.archetype.base_stats();
        let base = BaseStats::new(
            self.health.unwrap_or(defaults.health),
            self.armor.unwrap_or(defaults.armor),
            self.attack_damage.unwrap_or(defaults.attack_damage),
        );
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| self.archetype.default_name().to_owned());

        Fighter::with_stats(self.archetype, name, base).map_err(|e| {
            anyhow::anyhow!("Invalid stats for {} template: {}", self.archetype, e)
        })
    }
}

/// Loader for the fighter roster from TOML files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, when it lists no
    /// fighters, when an archetype appears twice, or when stats are invalid.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse roster TOML that is already in memory.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let spec: RosterSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;

        let mut seen = HashSet::new();
        let mut templates = Vec::with_capacity(spec.fighters.len());
        for entry in &spec.fighters {
            if !seen.insert(entry.archetype) {
                anyhow::bail!("Archetype {} is listed more than once", entry.archetype);
            }
            templates.push(entry.resolve()?);
        }

        let roster = Roster::from_templates(templates);
        if roster.is_empty() {
            anyhow::bail!("Roster must list at least one fighter");
        }

        Ok(roster)
    }
}
