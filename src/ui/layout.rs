//! Page layout: display on top, keypad below.

use ratatui::layout::{Constraint, Layout, Rect};

/// Smallest terminal the calculator draws into.
pub const MIN_TERMINAL_WIDTH: u16 = 24;
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

/// Display height including its border.
pub const DISPLAY_HEIGHT: u16 = 4;

/// Widest the calculator grows.
pub const MAX_CALCULATOR_WIDTH: u16 = 48;

/// Tallest the keypad grows (five rows of at most five lines).
pub const MAX_KEYPAD_HEIGHT: u16 = 25;

/// The two regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    pub display: Rect,
    pub keypad: Rect,
}

pub fn is_terminal_too_small(area: Rect) -> bool {
    area.width < MIN_TERMINAL_WIDTH || area.height < MIN_TERMINAL_HEIGHT
}

/// Center the calculator in `area` and split it.
///
/// Returns `None` when the terminal is below the minimum size.
pub fn calculator_layout(area: Rect) -> Option<CalculatorLayout> {
    if is_terminal_too_small(area) {
        return None;
    }

    let width = area.width.min(MAX_CALCULATOR_WIDTH);
    let height = area.height.min(DISPLAY_HEIGHT + MAX_KEYPAD_HEIGHT);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let [page] = Layout::vertical([Constraint::Length(height)])
        .flex(ratatui::layout::Flex::Center)
        .areas(column);

    let [display, keypad] =
        Layout::vertical([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)]).areas(page);

    Some(CalculatorLayout { display, keypad })
}
