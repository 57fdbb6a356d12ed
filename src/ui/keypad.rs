//! Keypad buttons and their grid placement.
//!
//! The grid is four columns by five rows:
//!
//! ```text
//! | AC      | DEL | / |
//! | 1 | 2   | 3   | * |
//! | 4 | 5   | 6   | + |
//! | 7 | 8   | 9   | - |
//! | . | 0   | =     |
//! ```

use crate::calculator::{is_digit_char, Action, Operation};
use ratatui::layout::{Constraint, Layout, Rect};
use std::fmt;

/// Number of keypad columns.
pub const KEYPAD_COLUMNS: usize = 4;

/// Number of keypad rows.
pub const KEYPAD_ROWS: usize = 5;

/// A keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// `0`-`9` or `.`
    Digit(char),
    Operation(Operation),
    /// `AC`
    AllClear,
    /// `DEL`
    Delete,
    /// `=`
    Equals,
}

impl Button {
    /// The text printed on the button.
    pub fn label(&self) -> String {
        match self {
            Button::Digit(digit) => digit.to_string(),
            Button::Operation(operation) => operation.symbol().to_string(),
            Button::AllClear => "AC".to_string(),
            Button::Delete => "DEL".to_string(),
            Button::Equals => "=".to_string(),
        }
    }

    /// Parse a button from its label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "AC" => Some(Button::AllClear),
            "DEL" => Some(Button::Delete),
            "=" => Some(Button::Equals),
            _ => {
                if let Some(operation) = Operation::from_symbol(label) {
                    return Some(Button::Operation(operation));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if is_digit_char(c) => Some(Button::Digit(c)),
                    _ => None,
                }
            }
        }
    }

    /// The action this button dispatches.
    pub fn action(&self) -> Action {
        match *self {
            Button::Digit(digit) => Action::add_digit(digit),
            Button::Operation(operation) => Action::choose(operation),
            Button::AllClear => Action::Clear,
            Button::Delete => Action::DeleteDigit,
            Button::Equals => Action::Evaluate,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Keypad rows as (button, column span) pairs. Each row spans four columns.
pub const KEYPAD: [&[(Button, u16)]; KEYPAD_ROWS] = [
    &[
        (Button::AllClear, 2),
        (Button::Delete, 1),
        (Button::Operation(Operation::Divide), 1),
    ],
    &[
        (Button::Digit('1'), 1),
        (Button::Digit('2'), 1),
        (Button::Digit('3'), 1),
        (Button::Operation(Operation::Multiply), 1),
    ],
    &[
        (Button::Digit('4'), 1),
        (Button::Digit('5'), 1),
        (Button::Digit('6'), 1),
        (Button::Operation(Operation::Add), 1),
    ],
    &[
        (Button::Digit('7'), 1),
        (Button::Digit('8'), 1),
        (Button::Digit('9'), 1),
        (Button::Operation(Operation::Subtract), 1),
    ],
    &[
        (Button::Digit('.'), 1),
        (Button::Digit('0'), 1),
        (Button::Equals, 2),
    ],
];

/// Iterate all buttons in keypad order.
pub fn all_buttons() -> impl Iterator<Item = Button> {
    KEYPAD
        .iter()
        .flat_map(|row| row.iter().map(|(button, _)| *button))
}

/// Split `area` into one rect per button, in keypad order.
pub fn button_rects(area: Rect) -> Vec<(Button, Rect)> {
    let rows = Layout::vertical([Constraint::Ratio(1, KEYPAD_ROWS as u32); KEYPAD_ROWS]).split(area);

    let mut rects = Vec::with_capacity(KEYPAD_ROWS * KEYPAD_COLUMNS);
    for (row_area, row) in rows.iter().zip(KEYPAD.iter()) {
        let cells =
            Layout::horizontal([Constraint::Ratio(1, KEYPAD_COLUMNS as u32); KEYPAD_COLUMNS])
                .split(*row_area);

        let mut column = 0usize;
        for &(button, span) in row.iter() {
            let first = cells[column];
            let last = cells[column + span as usize - 1];
            rects.push((button, first.union(last)));
            column += span as usize;
        }
    }
    rects
}
