//! Application state for the calculator page.

use crate::calculator::{reduce, Action, CalculatorState, DisplayFormatter};
use crate::config::CalcConfig;
use crate::ui::display::{current_line, previous_line};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::keypad::Button;

/// Everything the event loop and renderer share.
#[derive(Debug)]
pub struct App {
    /// The single calculator state, replaced on every dispatch
    pub state: CalculatorState,
    /// Operand formatter built from config
    pub formatter: DisplayFormatter,
    /// Clickable button areas from the last frame
    pub hit_registry: HitAreaRegistry,
    /// Highlight the button under the pointer
    pub hover_highlight: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Flag to quit the application
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            formatter: config.formatter(),
            hit_registry: HitAreaRegistry::new(),
            hover_highlight: config.hover_highlight,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Run `action` through the reducer.
    ///
    /// Returns true if the state changed; only then is a redraw requested.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        let next = reduce(&self.state, action);
        let changed = next != self.state;
        tracing::debug!(
            action = action.kind(),
            changed,
            current = ?next.current_operand,
            previous = ?next.previous_operand,
            operation = ?next.operation,
            overwrite = next.overwrite,
            "dispatch"
        );

        if changed {
            self.state = next;
            self.mark_dirty();
        }
        changed
    }

    /// Dispatch the action bound to a keypad button.
    pub fn press(&mut self, button: Button) -> bool {
        self.dispatch(&button.action())
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    /// Upper display line.
    pub fn previous_display(&self) -> String {
        previous_line(&self.state, &self.formatter)
    }

    /// Lower display line.
    pub fn current_display(&self) -> String {
        current_line(&self.state, &self.formatter)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&CalcConfig::default())
    }
}
