//! Configuration file management for persistent settings.
//!
//! Stores user preferences in ~/.jsonmend/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostic::ValidatorOptions;
use crate::error::{Error, Result};
use crate::highlight::DEFAULT_RADIUS;
use crate::pretty::DEFAULT_INDENT;

/// User configuration that persists between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Characters shown on each side of the error in the excerpt
    #[serde(default = "default_radius")]
    pub radius: usize,
    /// Indentation width for pretty-printed output
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Lines shown before and after the failing line
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    /// Whether reports end with general fixing tips
    #[serde(default = "default_show_tips")]
    pub show_tips: bool,
}

fn default_radius() -> usize {
    DEFAULT_RADIUS
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_context_lines() -> usize {
    1
}

fn default_show_tips() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            radius: default_radius(),
            indent: default_indent(),
            context_lines: default_context_lines(),
            show_tips: default_show_tips(),
        }
    }
}

impl Config {
    /// Get the config directory path (~/.jsonmend)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".jsonmend"))
    }

    /// Get the config file path (~/.jsonmend/config.json)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load config from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    /// Save config to ~/.jsonmend/config.json and return the path written
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().ok_or(Error::NoHomeDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Options for the validator derived from this config
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            radius: self.radius,
            indent: self.indent,
        }
    }
}
