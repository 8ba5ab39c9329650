//! Configuration management for RW template helpers.
//!
//! Parses `rw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [helpers]
//! images_root = "/static/img"
//! active_title = "You are here"
//! external_prefixes = ["http://", "https://", "mailto:"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override images root directory.
    pub images_root: Option<String>,
    /// Override default title of active links.
    pub active_title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template helper configuration.
    pub helpers: HelpersConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Template helper configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Site directory that bare image names resolve under.
    pub images_root: String,
    /// Title of the active-page marker when the template gives none.
    pub active_title: String,
    /// Substrings that mark an unresolved link target as external.
    pub external_prefixes: Vec<String>,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            images_root: "/images".to_owned(),
            active_title: "You are here".to_owned(),
            external_prefixes: vec!["http://".to_owned(), "https://".to_owned()],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(images_root) = &settings.images_root {
            self.helpers.images_root.clone_from(images_root);
        }
        if let Some(active_title) = &settings.active_title {
            self.helpers.active_title.clone_from(active_title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let helpers = &self.helpers;

        require_non_empty(&helpers.images_root, "helpers.images_root")?;
        if !helpers.images_root.starts_with('/') {
            return Err(ConfigError::Validation(
                "helpers.images_root must start with /".to_owned(),
            ));
        }

        require_non_empty(&helpers.active_title, "helpers.active_title")?;

        for prefix in &helpers.external_prefixes {
            require_non_empty(prefix, "helpers.external_prefixes entry")?;
        }

        Ok(())
    }
}
