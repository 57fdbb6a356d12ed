//! Tracing setup.
//!
//! The TUI owns stdout, so log output goes to `~/.calc-tui/calc.log`.
//! The filter comes from `CALC_LOG` when set, otherwise from the config's
//! `log_level`.

use crate::config::CalcConfig;
use crate::error::{CalcError, CalcResult};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file name inside the config directory.
pub const LOG_FILE: &str = "calc.log";

/// Env var holding a full `EnvFilter` directive.
pub const ENV_LOG_FILTER: &str = "CALC_LOG";

/// Build the filter: `CALC_LOG` first, then `default_level`, then `info`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_path`.
pub fn init_file_logging(log_path: &Path, default_level: &str) -> CalcResult<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|e| CalcError::io("create", parent, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| CalcError::io("open", log_path, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| CalcError::Logging(e.to_string()))
}

/// Install logging in the default location.
///
/// Returns the log path on success.
pub fn init(config: &CalcConfig) -> CalcResult<PathBuf> {
    let dir = CalcConfig::config_dir().ok_or(CalcError::NoHomeDirectory)?;
    let path = dir.join(LOG_FILE);
    init_file_logging(&path, &config.log_level)?;
    Ok(path)
}
