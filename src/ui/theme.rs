//! Color theme constants for the calculator.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Display
// ============================================================================

/// Display panel background
pub const COLOR_DISPLAY_BG: Color = Color::Rgb(20, 20, 30);

/// Previous operand and pending operator
pub const COLOR_PREVIOUS: Color = Color::Gray;

/// Current operand
pub const COLOR_CURRENT: Color = Color::White;

/// Border around the display and buttons
pub const COLOR_BORDER: Color = Color::DarkGray;

// ============================================================================
// Buttons
// ============================================================================

/// Digit button label
pub const COLOR_DIGIT: Color = Color::White;

/// Operator button label
pub const COLOR_OPERATOR: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// AC / DEL / = labels
pub const COLOR_COMMAND: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Hovered button background
pub const COLOR_HOVER_BG: Color = Color::Rgb(60, 60, 80);

/// Notice shown when the terminal is too small
pub const COLOR_WARNING: Color = Color::Yellow;

/// Style applied to a button under the pointer.
pub fn hover_style() -> Style {
    Style::default()
        .bg(COLOR_HOVER_BG)
        .add_modifier(Modifier::BOLD)
}
