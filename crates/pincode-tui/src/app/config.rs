//! TUI configuration persistence
//!
//! Saves and loads the widget settings and display preferences. The
//! reference PIN is not part of the file; it comes from `--reference` or the
//! default for each run.

use std::fs;
use std::path::{Path, PathBuf};

use pincode_core::{Mode, PinCodeSettings};
use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "pincode-view";

/// Retry budget the demo host applies once a new PIN is set
const DEFAULT_VERIFY_RETRY_BUDGET: u32 = 10;

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Initial widget settings
    #[serde(default = "default_pin_code")]
    pub pin_code: PinCodeSettings,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,

    /// Retry budget used after switching to verify mode
    #[serde(default = "default_verify_retry_budget")]
    pub verify_retry_budget: u32,
}

fn default_pin_code() -> PinCodeSettings {
    PinCodeSettings {
        mode: Mode::SetNew,
        ..PinCodeSettings::default()
    }
}

fn default_verify_retry_budget() -> u32 {
    DEFAULT_VERIFY_RETRY_BUDGET
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            pin_code: default_pin_code(),
            high_contrast: false,
            verify_retry_budget: DEFAULT_VERIFY_RETRY_BUDGET,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
