//! Rendering for the calculator page.
//!
//! [`render`] is called once per dirty frame. It clears the hit registry,
//! draws the display and the keypad, and registers one hit area per button.

pub mod display;
pub mod interaction;
pub mod keypad;
pub mod layout;
pub mod theme;

pub use display::{current_line, fit_to_width, previous_line, render_display};
pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry};
pub use keypad::{all_buttons, button_rects, Button};
pub use layout::{calculator_layout, is_terminal_too_small, CalculatorLayout};

use crate::app::App;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use theme::{COLOR_BORDER, COLOR_COMMAND, COLOR_DIGIT, COLOR_OPERATOR, COLOR_WARNING};

/// Render the whole page.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    let Some(layout) = calculator_layout(area) else {
        render_too_small(frame, area);
        return;
    };

    render_display(frame, layout.display, &app.state, &app.formatter);
    render_keypad(frame, layout.keypad, app);
}

fn render_keypad(frame: &mut Frame, area: Rect, app: &mut App) {
    let hover = app.hover_highlight.then(theme::hover_style);

    for (button, rect) in button_rects(area) {
        app.hit_registry
            .register(rect, ClickAction::Press(button), hover);
        let style = app.hit_registry.get_hover_style(rect).unwrap_or_default();
        render_button(frame, rect, button, style);
    }
}

fn render_button(frame: &mut Frame, rect: Rect, button: Button, style: Style) {
    let color = match button {
        Button::Digit(_) => COLOR_DIGIT,
        Button::Operation(_) => COLOR_OPERATOR,
        Button::AllClear | Button::Delete | Button::Equals => COLOR_COMMAND,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner_height = block.inner(rect).height;

    // Vertically center the label inside the border.
    let mut lines: Vec<Line> = (0..inner_height.saturating_sub(1) / 2)
        .map(|_| Line::default())
        .collect();
    lines.push(Line::styled(
        button.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .style(style);
    frame.render_widget(paragraph, rect);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}x{}). Need at least {}x{}.",
        area.width,
        area.height,
        layout::MIN_TERMINAL_WIDTH,
        layout::MIN_TERMINAL_HEIGHT
    );
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(COLOR_WARNING))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
