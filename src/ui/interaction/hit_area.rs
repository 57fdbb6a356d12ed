//! Hit area registry for clickable keypad buttons.
//!
//! Buttons register their rects while rendering, and the event loop hit-tests
//! mouse positions against the registry to find the button that was clicked.

use crate::ui::keypad::Button;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

/// An action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// A keypad button was pressed.
    Press(Button),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position::new(x, y))
    }
}

/// Registry for managing hit areas across the UI.
///
/// Cleared at the start of each render cycle. Later registrations win for
/// overlapping regions.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the hovered area
    hovered: Option<usize>,
    /// Last known pointer position, re-applied after a clear
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
        if let Some((x, y)) = self.pointer {
            if self.areas.last().is_some_and(|area| area.contains(x, y)) {
                self.hovered = Some(self.areas.len() - 1);
            }
        }
    }

    /// Return the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|idx| self.areas[idx].action)
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.find_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas.iter().rposition(|area| area.contains(x, y))
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let hovered = self.areas.get(self.hovered?)?;
        if hovered.rect == rect {
            hovered.hover_style
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Rect registered for `button`, if it was drawn this frame.
    pub fn rect_for(&self, button: Button) -> Option<Rect> {
        self.areas
            .iter()
            .find(|area| area.action == ClickAction::Press(button))
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
