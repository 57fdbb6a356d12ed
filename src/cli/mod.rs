//! CLI module.
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use calc_tui::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(output) = run_cli_command(command, &config) {
//!     println!("{}", output);
//!     return Ok(());
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod press;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use press::{parse_labels, run_press, PressOutcome};
pub use version::{version_line, VERSION};

use crate::config::CalcConfig;

/// Run a CLI command if applicable.
///
/// Returns the text to print, or `None` for `RunTui`.
pub fn run_cli_command(command: CliCommand, config: &CalcConfig) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_line()),
        CliCommand::Help => Some(USAGE.to_string()),
        CliCommand::Press(labels) => {
            tracing::info!(labels = %labels, "Headless press");
            Some(run_press(&labels, &config.formatter()).render())
        }
        CliCommand::RunTui => None,
    }
}
