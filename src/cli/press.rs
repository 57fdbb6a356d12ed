//! Headless button presses.
//!
//! `calc --press "12 + 30 ="` runs the labels through the reducer and prints
//! the two display lines, without touching the terminal.

use crate::calculator::{reduce, Action, CalculatorState, DisplayFormatter};
use crate::ui::display::{current_line, previous_line};
use crate::ui::keypad::Button;

/// Final state and display after a press sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PressOutcome {
    pub state: CalculatorState,
    pub previous_line: String,
    pub current_line: String,
}

impl PressOutcome {
    /// Display as printed to stdout: previous line, then current line.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.previous_line, self.current_line)
    }
}

/// Turn whitespace-separated labels into actions.
///
/// A word that is a full label (`AC`, `DEL`, `7`, `+`) is one press.
/// Otherwise the word is split into characters so `12+3=` works; characters
/// that are not labels become [`Action::Unknown`].
pub fn parse_labels(input: &str) -> Vec<Action> {
    let mut actions = Vec::new();
    for word in input.split_whitespace() {
        if let Some(button) = Button::from_label(word) {
            actions.push(button.action());
            continue;
        }
        for c in word.chars() {
            let mut buf = [0u8; 4];
            let action = Button::from_label(c.encode_utf8(&mut buf))
                .map(|button| button.action())
                .unwrap_or(Action::Unknown);
            if action == Action::Unknown {
                tracing::debug!(label = %c, word, "Unknown button label");
            }
            actions.push(action);
        }
    }
    actions
}

/// Press the buttons in `input` starting from the empty state.
pub fn run_press(input: &str, formatter: &DisplayFormatter) -> PressOutcome {
    let state = parse_labels(input)
        .iter()
        .fold(CalculatorState::default(), |state, action| {
            reduce(&state, action)
        });

    PressOutcome {
        previous_line: previous_line(&state, formatter),
        current_line: current_line(&state, formatter),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn test_parse_spaced_labels() {
        assert_eq!(
            parse_labels("AC 5 + 3 ="),
            vec![
                Action::Clear,
                Action::add_digit('5'),
                Action::choose(Operation::Add),
                Action::add_digit('3'),
                Action::Evaluate,
            ]
        );
    }

    #[test]
    fn test_parse_compact_labels() {
        assert_eq!(
            parse_labels("12*3"),
            vec![
                Action::add_digit('1'),
                Action::add_digit('2'),
                Action::choose(Operation::Multiply),
                Action::add_digit('3'),
            ]
        );
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(parse_labels("x"), vec![Action::Unknown]);
        assert_eq!(parse_labels("del"), vec![Action::Unknown; 3]);
        assert!(parse_labels("   ").is_empty());
    }

    #[test]
    fn test_run_press_evaluates() {
        let outcome = run_press("1200 / 4 =", &DisplayFormatter::default());
        assert_eq!(outcome.current_line, "300");
        assert_eq!(outcome.previous_line, "");
        assert!(outcome.state.overwrite);
        assert_eq!(outcome.render(), "\n300");
    }

    #[test]
    fn test_run_press_pending_operation() {
        let outcome = run_press("1234.5 +", &DisplayFormatter::default());
        assert_eq!(outcome.previous_line, "1,234.5 +");
        assert_eq!(outcome.current_line, "");
    }

    #[test]
    fn test_run_press_unknown_is_noop() {
        let with_noise = run_press("7 ? 8", &DisplayFormatter::default());
        let without = run_press("7 8", &DisplayFormatter::default());
        assert_eq!(with_noise, without);
    }
}
