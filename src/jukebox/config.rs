use crate::error::{JukeboxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the jukebox, stored as `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JukeboxConfig {
    /// Print the welcome banner when a session starts
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,

    /// Force colored output on or off. Unset means detect the terminal.
    #[serde(default)]
    pub color: Option<bool>,

    /// JSON file to read the catalog from instead of the built-in songs
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_show_banner() -> bool {
    true
}

impl Default for JukeboxConfig {
    fn default() -> Self {
        Self {
            show_banner: default_show_banner(),
            color: None,
            catalog: None,
        }
    }
}

impl JukeboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(config_path)
    }

    /// Load config from an explicit file. A missing file is an error here.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            JukeboxError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: JukeboxConfig =
            serde_json::from_str(&content).map_err(JukeboxError::Serialization)?;
        Ok(config)
    }
}
