//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::{
    APP_DIR_NAME, CONFIG_DIR_ENV, DEFAULT_GROUP_SIZE, DEFAULT_PROFILE, DEFAULT_TITLE,
};
use crate::export::ExportOptions;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Profile assets root (directory holding one subdirectory per profile)
    #[serde(default)]
    pub assets_root: Option<PathBuf>,
}

/// Profile selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile key used when none is given
    #[serde(default = "default_profile")]
    pub default: String,
    /// Register the compiled-in label tables alongside discovered profiles
    #[serde(default = "default_true")]
    pub include_builtin: bool,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default: default_profile(),
            include_builtin: true,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Page title used when none is given
    #[serde(default = "default_title")]
    pub title: String,
    /// Bars per captioned section
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    /// Embed icons as data URIs
    #[serde(default = "default_true")]
    pub inline_icons: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

const fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            group_size: DEFAULT_GROUP_SIZE,
            inline_icons: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/SkyNotesToButtons/config.toml`
/// - macOS: `~/Library/Application Support/SkyNotesToButtons/config.toml`
/// - Windows: `%APPDATA%\SkyNotesToButtons\config.toml`
///
/// Setting `SKY_BUTTONS_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `assets_root` must exist when set
/// - `group_size` must be at least 1
/// - `default` profile key must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Profile selection
    #[serde(default)]
    pub profiles: ProfileConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A configured assets root that no longer exists is dropped with a
    /// warning so discovery falls back to the default locations.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let mut config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        if let Some(root) = &config.paths.assets_root {
            if !root.is_dir() {
                warn!(
                    "Configured assets root {} does not exist, ignoring it",
                    root.display()
                );
                config.paths.assets_root = None;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.paths.assets_root {
            if !root.is_dir() {
                anyhow::bail!("Assets root does not exist: {}", root.display());
            }
        }

        if self.export.group_size == 0 {
            anyhow::bail!("export.group_size must be at least 1");
        }

        if self.profiles.default.trim().is_empty() {
            anyhow::bail!("profiles.default must not be empty");
        }

        Ok(())
    }

    /// Export options derived from the `[export]` section.
    #[must_use]
    pub const fn export_options(&self) -> ExportOptions {
        ExportOptions {
            group_size: self.export.group_size,
            inline_icons: self.export.inline_icons,
        }
    }
}
