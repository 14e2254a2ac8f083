//! Configuration management

use crate::error::{JnlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Journal file used when none is given on the command line
    pub journal: Option<PathBuf>,
    /// Stamp successful mutations into the command_history table
    pub record_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal: None,
            record_history: true,
        }
    }
}

impl Config {
    /// Load from `JNL_CONFIG`, else `$HOME/.config/jnl/config.toml`.
    /// No config file means defaults.
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(JnlError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            JnlError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("JNL_CONFIG") {
            return Some(PathBuf::from(path));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config").join("jnl").join("config.toml"))
    }

    /// Pick the journal file: command line, then `JNL_FILE`, then config
    pub fn resolve_journal(&self, cli: Option<PathBuf>) -> Result<PathBuf> {
        cli.or_else(|| std::env::var("JNL_FILE").ok().map(PathBuf::from))
            .or_else(|| self.journal.clone())
            .ok_or_else(|| {
                JnlError::InvalidArgument("The name of the journal file is required.".to_string())
            })
    }
}
