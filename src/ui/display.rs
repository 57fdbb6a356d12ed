//! The two-line display above the keypad.

use super::theme::{COLOR_BORDER, COLOR_CURRENT, COLOR_DISPLAY_BG, COLOR_PREVIOUS};
use crate::calculator::{CalculatorState, DisplayFormatter};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Previous operand followed by the pending operator, e.g. `1,234 +`.
pub fn previous_line(state: &CalculatorState, formatter: &DisplayFormatter) -> String {
    let previous = formatter.format(state.previous_operand.as_deref());
    let operation = state.operation.map(|op| op.symbol());
    match (previous, operation) {
        (Some(previous), Some(op)) => format!("{} {}", previous, op),
        (Some(previous), None) => previous,
        (None, Some(op)) => op.to_string(),
        (None, None) => String::new(),
    }
}

/// Formatted current operand, empty when absent.
pub fn current_line(state: &CalculatorState, formatter: &DisplayFormatter) -> String {
    formatter
        .format(state.current_operand.as_deref())
        .unwrap_or_default()
}

/// Keep the tail of `text` so it fits in `width` columns, marking the cut
/// with a leading ellipsis.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = String::new();
    let mut used = 1; // ellipsis
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.insert(0, c);
    }
    format!("…{}", kept)
}

pub fn render_display(
    frame: &mut Frame,
    area: Rect,
    state: &CalculatorState,
    formatter: &DisplayFormatter,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DISPLAY_BG));
    let inner_width = block.inner(area).width as usize;

    let lines = vec![
        Line::styled(
            fit_to_width(&previous_line(state, formatter), inner_width),
            Style::default().fg(COLOR_PREVIOUS),
        ),
        Line::styled(
            fit_to_width(&current_line(state, formatter), inner_width),
            Style::default()
                .fg(COLOR_CURRENT)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn test_previous_line_with_operator() {
        let state = CalculatorState::new()
            .with_previous("1234")
            .with_operation(Operation::Add);
        assert_eq!(
            previous_line(&state, &DisplayFormatter::default()),
            "1,234 +"
        );
    }

    #[test]
    fn test_empty_lines() {
        let state = CalculatorState::new();
        let formatter = DisplayFormatter::default();
        assert_eq!(previous_line(&state, &formatter), "");
        assert_eq!(current_line(&state, &formatter), "");
    }

    #[test]
    fn test_current_line_formats() {
        let state = CalculatorState::new().with_current("1234.5");
        assert_eq!(current_line(&state, &DisplayFormatter::default()), "1,234.5");
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("1,234", 10), "1,234");
        assert_eq!(fit_to_width("1,234,567", 6), "…4,567");
        assert_eq!(fit_to_width("1,234", 0), "");
    }
}
