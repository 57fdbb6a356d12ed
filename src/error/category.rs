//! Error category classification.
//!
//! Categories decide whether startup can carry on with defaults or has to
//! abort, and give log lines a short stable label.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Config file present but malformed.
    /// Recoverable: defaults are used.
    Configuration,

    /// Filesystem, home directory or logging problems.
    /// Recoverable: the app runs without the affected file.
    System,

    /// Terminal could not be driven. Not recoverable.
    Ui,
}

impl ErrorCategory {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::Configuration | ErrorCategory::System)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
            ErrorCategory::Ui => "ui",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
