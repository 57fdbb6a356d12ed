//! Terminal event handling.
//!
//! Mouse clicks on keypad buttons are the only calculator input. Keys only
//! quit the application.

use crate::app::App;
use crate::ui::interaction::handle_click_action;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Apply one terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "Terminal resized");
            app.mark_dirty();
        }
        Event::FocusGained => app.mark_dirty(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = app.hit_registry.hit_test(mouse.column, mouse.row) {
                handle_click_action(app, action);
            }
        }
        MouseEventKind::Moved => {
            if app.hover_highlight && app.hit_registry.update_hover(mouse.column, mouse.row) {
                app.mark_dirty();
            }
        }
        _ => {}
    }
}
