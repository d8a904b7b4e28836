use std::{collections::HashSet, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;
use uom::si::{f32::Time, time::second};

use crate::{components::id::SpellId, registry};

/// Rules data injected into the resolvers, so adding a lethal-animation spell is
/// a data change rather than a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseConfig {
    pub lethal_spells: HashSet<SpellId>,
    pub default_resist_delay_seconds: f32,
}

impl Default for DefenseConfig {
    fn default() -> Self {
        Self {
            lethal_spells: registry::spells::default_lethal_spells(),
            default_resist_delay_seconds: 0.01,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read defense config: {}", err),
            ConfigError::Parse(err) => write!(f, "failed to parse defense config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl DefenseConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "Loaded defense config from {:?} ({} lethal spells)",
            path,
            config.lethal_spells.len()
        );
        Ok(config)
    }

    pub fn is_lethal_spell(&self, spell: &SpellId) -> bool {
        self.lethal_spells.contains(spell)
    }

    pub fn add_lethal_spell(&mut self, spell: SpellId) {
        self.lethal_spells.insert(spell);
    }

    pub fn default_resist_delay(&self) -> Time {
        Time::new::<second>(self.default_resist_delay_seconds)
    }
}
