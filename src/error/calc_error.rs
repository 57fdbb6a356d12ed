//! Application error type.

use super::category::ErrorCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the calculator core.
///
/// The reducer and formatter are total and never produce one of these.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Reading or creating a config or state file failed.
    #[error("Failed to {operation} '{}': {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but is not valid JSON for [`crate::config::CalcConfig`].
    #[error("Invalid config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No home directory to place config and logs under.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Terminal setup, drawing or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl CalcError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CalcError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::Io { .. } | CalcError::NoHomeDirectory => ErrorCategory::System,
            CalcError::ConfigParse { .. } => ErrorCategory::Configuration,
            CalcError::Logging(_) => ErrorCategory::System,
            CalcError::Terminal(_) => ErrorCategory::Ui,
        }
    }

    /// Startup continues with defaults after this error.
    pub fn is_recoverable(&self) -> bool {
        self.category().is_recoverable()
    }
}
