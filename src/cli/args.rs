//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Feed button labels through the calculator without a terminal UI
    Press(String),
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognized flag wins. `--press` takes the next argument (or the
/// text after `=`); without one it falls back to `Help`.
///
/// ```
/// use calc_tui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["calc".to_string(), "--press".to_string(), "5 + 3 =".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Press("5 + 3 =".to_string()));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--press" | "-p" => {
                return match args.next() {
                    Some(labels) => CliCommand::Press(labels),
                    None => CliCommand::Help,
                };
            }
            other => {
                if let Some(labels) = other.strip_prefix("--press=") {
                    return CliCommand::Press(labels.to_string());
                }
            }
        }
    }
    CliCommand::RunTui
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: calc [OPTIONS]

A four-function calculator. Click the on-screen buttons; q or Esc quits.

Options:
  -p, --press <LABELS>  Press buttons headlessly and print the display,
                        e.g. --press \"12 + 30 =\" (AC, DEL, digits, . / * + - =)
  -V, --version         Print version
  -h, --help            Print this help

Environment:
  CALC_LOG                 Log filter (tracing EnvFilter syntax)
  CALC_LOG_LEVEL           Default log level when CALC_LOG is unset
  CALC_GROUPING_SEPARATOR  Thousands separator for the display";
