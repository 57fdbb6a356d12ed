//! Actions dispatched into the reducer.

use super::state::Operation;
use serde::{Deserialize, Serialize};

/// A discrete user action.
///
/// Serialized as `{"type": "add-digit", "payload": {"digit": "5"}}`. Any
/// unrecognized `type` deserializes to [`Action::Unknown`], which the
/// reducer treats as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// Append a digit or the decimal point to the current operand.
    AddDigit { digit: char },
    /// Select the pending operation, evaluating first if both operands exist.
    ChooseOperation { operation: Operation },
    /// Reset to the empty state.
    Clear,
    /// Remove the last character of the current operand.
    DeleteDigit,
    /// Compute the pending operation.
    Evaluate,
    /// Anything else.
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn add_digit(digit: char) -> Self {
        Action::AddDigit { digit }
    }

    pub fn choose(operation: Operation) -> Self {
        Action::ChooseOperation { operation }
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddDigit { .. } => "add-digit",
            Action::ChooseOperation { .. } => "choose-operation",
            Action::Clear => "clear",
            Action::DeleteDigit => "delete-digit",
            Action::Evaluate => "evaluate",
            Action::Unknown => "unknown",
        }
    }
}

/// True for the characters a digit button can produce.
pub fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
