//! User configuration stored in `~/.calc-tui/config.json`.
//!
//! Every field is optional in the file. Environment variables override the
//! file. A missing file yields defaults; a malformed one is reported so the
//! caller can log it once logging is up, then fall back to defaults.

use crate::calculator::{DisplayFormatter, DEFAULT_GROUPING_SEPARATOR};
use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding config and logs.
pub const CONFIG_DIR: &str = ".calc-tui";

/// Config file name.
pub const CONFIG_FILE: &str = "config.json";

/// Overrides `grouping_separator`.
pub const ENV_GROUPING_SEPARATOR: &str = "CALC_GROUPING_SEPARATOR";

/// Overrides `log_level`.
pub const ENV_LOG_LEVEL: &str = "CALC_LOG_LEVEL";

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Thousands separator for the display. Empty disables grouping.
    pub grouping_separator: String,
    /// Default log filter when `CALC_LOG` is unset.
    pub log_level: String,
    /// Highlight the button under the mouse pointer.
    pub hover_highlight: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            grouping_separator: DEFAULT_GROUPING_SEPARATOR.to_string(),
            log_level: "info".to_string(),
            hover_highlight: true,
        }
    }
}

impl CalcConfig {
    /// Directory holding config and logs, `None` without a home directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR))
    }

    /// Default config file path.
    pub fn default_path() -> CalcResult<PathBuf> {
        Self::config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or(CalcError::NoHomeDirectory)
    }

    /// Load the config from its default location, without env overrides.
    ///
    /// Callers fall back to defaults on error; see [`CalcError::is_recoverable`].
    pub fn try_load() -> CalcResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the config from `path`.
    ///
    /// A missing file is not an error and yields defaults.
    pub fn load_from(path: &Path) -> CalcResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| CalcError::io("read", path, e))?;
        serde_json::from_str(&raw).map_err(|source| CalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CALC_GROUPING_SEPARATOR` and `CALC_LOG_LEVEL`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(separator) = std::env::var(ENV_GROUPING_SEPARATOR) {
            self.grouping_separator = separator;
        }
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.log_level = level;
            }
        }
        self
    }

    /// Build the display formatter this config describes.
    pub fn formatter(&self) -> DisplayFormatter {
        DisplayFormatter::new(self.grouping_separator.clone())
    }
}
