//! Arithmetic over the two operands of a state.

use super::state::CalculatorState;

/// Exponent form kicks in at or above this magnitude.
const EXPONENT_UPPER: f64 = 1e21;

/// Exponent form kicks in below this magnitude.
const EXPONENT_LOWER: f64 = 1e-6;

/// Compute `previous <operation> current` and return it as an operand string.
///
/// Returns an empty string when the operation or either operand is missing,
/// or when an operand does not parse to a finite number. Division by zero is
/// not an error: it produces `Infinity`, `-Infinity` or `NaN`.
pub fn evaluate(state: &CalculatorState) -> String {
    let (Some(previous), Some(current), Some(operation)) = (
        state.previous_operand.as_deref(),
        state.current_operand.as_deref(),
        state.operation,
    ) else {
        return String::new();
    };

    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        tracing::debug!(previous, current, "operand did not parse, evaluating to empty");
        return String::new();
    };

    number_to_string(operation.apply(lhs, rhs))
}

/// Parse an operand as a finite `f64`.
pub fn parse_operand(operand: &str) -> Option<f64> {
    operand
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Canonical decimal form of a number.
///
/// Integral values print without a fraction, other values use the shortest
/// digits that round-trip. Very large and very small magnitudes switch to
/// exponent notation with a signed exponent (`1e+21`, `1.5e-7`).
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}
