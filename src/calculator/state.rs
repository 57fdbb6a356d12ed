//! Calculator state and operator types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// All operators in keypad order (top to bottom).
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// The symbol shown on the keypad and after the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Parse an operator from its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "*" => Some(Operation::Multiply),
            "/" => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The whole calculator state.
///
/// Transitions never mutate a state in place; [`crate::calculator::reduce`]
/// always returns a new value. `Default` is the empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed, absent until the first digit.
    pub current_operand: Option<String>,
    /// Left operand of the pending operation.
    pub previous_operand: Option<String>,
    /// Pending operation.
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of extending it.
    pub overwrite: bool,
}

impl CalculatorState {
    /// Create the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been entered.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builder used mostly by tests and the headless driver.
    pub fn with_current(mut self, operand: impl Into<String>) -> Self {
        self.current_operand = Some(operand.into());
        self
    }

    pub fn with_previous(mut self, operand: impl Into<String>) -> Self {
        self.previous_operand = Some(operand.into());
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol("%"), None);
        assert_eq!(Operation::from_symbol(""), None);
    }

    #[test]
    fn test_apply_follows_ieee() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.apply(5.0, 8.0), -3.0);
        assert_eq!(Operation::Multiply.apply(2.5, 4.0), 10.0);
        assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_default_is_empty() {
        let state = CalculatorState::new();
        assert!(state.is_empty());
        assert!(!state.clone().with_current("1").is_empty());
        assert!(!state.with_overwrite(true).is_empty());
    }

    #[test]
    fn test_operation_serializes_as_symbol() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"/\"");
        let op: Operation = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(op, Operation::Multiply);
    }
}
