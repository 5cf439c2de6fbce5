//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/bstree/bstree.toml`, or an explicit path
//! 3. Environment variables: `BSTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Front-end settings for the interactive menu and traversal output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Clear the terminal before drawing the menu and before each operation
    pub clear_screen: bool,
    /// Wait for Enter after each operation
    pub pause: bool,
    /// Separator placed between keys when printing a traversal
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause: true,
            separator: " ".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub clear_screen: Option<bool>,
    pub pause: Option<bool>,
    pub separator: Option<String>,
}

/// Get the XDG config directory for bstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bstree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            clear_screen: overlay.clear_screen.unwrap_or(self.clear_screen),
            pause: overlay.pause.unwrap_or(self.pause),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence, using the global config file if it exists.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        debug!("loading config: {}", path.display());
        let raw = load_raw_settings(path)?;
        let current = Self::default().merge_with(&raw);
        Self::apply_env_overrides(current)
    }

    /// Apply BSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("BSTREE").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("clear_screen") {
            settings.clear_screen = val;
        }
        if let Ok(val) = config.get_bool("pause") {
            settings.pause = val;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bstree configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/bstree/bstree.toml  (or --config <path>)
#   Env:  BSTREE_* environment variables (explicit overrides)

# Clear the terminal between menu screens
# clear_screen = true

# Wait for Enter after each operation
# pause = true

# Separator between keys in traversal output
# separator = " "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
