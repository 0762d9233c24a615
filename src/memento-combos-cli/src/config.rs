//! Configuration management for the mementos CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default paths used when a command is run without explicit arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Game frontend database (Mementos, Leaders, Civilizations)
    pub frontend_db: Option<PathBuf>,
    /// Game localization database (LocalizedText)
    pub localization_db: Option<PathBuf>,
    /// Loc mapping JSON written by extract-loc and read by generate
    pub loc_map: Option<PathBuf>,
    /// Synergy spreadsheet (.ods, .xlsx or .csv)
    pub spreadsheet: Option<PathBuf>,
    /// Worksheet to read when the spreadsheet has several
    pub sheet: Option<String>,
    /// Generated SQL file
    pub output: Option<PathBuf>,
    /// LocalizedText language, e.g. en_US
    pub language: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("mementos");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, or the default if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Language for translations, falling back to en_US
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .unwrap_or(memento_combos::DEFAULT_LANGUAGE)
    }
}

/// Pick the CLI argument if given, else the configured value
pub fn resolve_path(
    arg: Option<PathBuf>,
    configured: Option<&PathBuf>,
    what: &str,
) -> Result<PathBuf> {
    arg.or_else(|| configured.cloned()).with_context(|| {
        format!(
            "No {} given. Pass it as an argument or set it with `mementos configure`",
            what
        )
    })
}
