//! Persistent user configuration.
//!
//! Stored as `config.json` in the platform config directory and created with defaults on
//! first use.

use crate::commands::Interpreter;
use crate::core::dirs::{get_config_directory, get_data_directory};
use crate::core::error::PlaygroundError;
use crate::core::repository::{DEFAULT_AUTHOR, DEFAULT_BRANCH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    /// Recorded as the author of every new commit
    pub author: String,
    /// Branch created by `git init`
    pub default_branch: String,
    /// Where the session snapshot lives, defaults to the data directory
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            state_file: None,
        }
    }
}

impl PlaygroundConfig {
    pub fn load_or_create() -> Result<Self, PlaygroundError> {
        let config_file = get_config_directory()?.join(CONFIG_FILE);
        Self::load_or_create_at(&config_file)
    }

    pub fn load_or_create_at(config_file: &Path) -> Result<Self, PlaygroundError> {
        if config_file.exists() {
            let content = std::fs::read_to_string(config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save_to(config_file)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_file: &Path) -> Result<(), PlaygroundError> {
        if let Some(dir) = config_file.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)?;
        Ok(())
    }

    /// Snapshot path: the configured one, or `session.json` in the data directory
    pub fn session_path(&self) -> Result<PathBuf, PlaygroundError> {
        match &self.state_file {
            Some(path) => Ok(path.clone()),
            None => Ok(get_data_directory()?.join(SESSION_FILE)),
        }
    }

    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.author.clone(), self.default_branch.clone())
    }
}
