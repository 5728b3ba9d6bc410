#[cfg(test)]
mod tests;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use fixed_map::Set;
use serde::{Deserialize, Serialize};

use crate::inflection::{Mode, Modifiers, Voice};
use crate::question::Enabled;
use crate::verb::{Level, VerbClass};
use crate::Dirs;

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Levels which verbs are drawn from.
    pub levels: Set<Level>,
    /// Classes which verbs are drawn from.
    pub classes: Set<VerbClass>,
    /// Enabled voices.
    pub voices: Set<Voice>,
    /// Enabled modes.
    pub modes: Set<Mode>,
    /// Modifiers which may be switched on.
    pub modifiers: Modifiers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            levels: [Level::N5, Level::N4, Level::N3].into_iter().collect(),
            classes: VerbClass::ALL.iter().copied().collect(),
            voices: [Voice::Dictionary].into_iter().collect(),
            modes: [Mode::Standard, Mode::TeForm].into_iter().collect(),
            modifiers: Modifiers::all(),
        }
    }
}

impl Config {
    /// Load the configuration from its default location, falling back to the
    /// default configuration if it doesn't exist.
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No configuration, using defaults");
            return Ok(Self::default());
        }

        Self::load_path(&config_path)
    }

    /// Load the configuration from the given path.
    pub fn load_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).with_context(|| anyhow!("{}", path.display()))?;
        let config = toml::from_str(&data).with_context(|| anyhow!("{}", path.display()))?;
        Ok(config)
    }

    /// The parameters questions are drawn from.
    pub fn enabled(&self) -> Enabled {
        Enabled {
            voices: self.voices,
            modes: self.modes,
            modifiers: self.modifiers,
        }
    }
}
