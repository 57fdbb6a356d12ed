//! Click action handler.
//!
//! Translates hit-area actions into calculator dispatches on the App.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    match action {
        ClickAction::Press(button) => {
            tracing::debug!(button = %button, "Click: Press");
            app.press(button);
        }
    }
}
