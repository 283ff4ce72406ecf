//! Hit areas for mouse interaction.
//!
//! Components register clickable regions while rendering; the event loop
//! asks the registry which action a click lands on.

use ratatui::layout::Rect;

use crate::events::UiEvent;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Pick the card at this position in the displayed row
    SelectCard(usize),
    /// The "Travel with this answer" button
    SendAnswer,
    /// The "Go to the next star" button
    NextStar,
}

impl ClickAction {
    /// The user input event this click stands for.
    pub fn to_event(self) -> UiEvent {
        match self {
            ClickAction::SelectCard(index) => UiEvent::CardClicked(index),
            ClickAction::SendAnswer => UiEvent::SendClicked,
            ClickAction::NextStar => UiEvent::ResetClicked,
        }
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

#[inline]
fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Registry of hit areas for the current frame.
///
/// Cleared at the start of every render. Later registrations sit on top of
/// earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<usize>,
    /// Last mouse position, so hover survives the per-frame clear
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
        if let Some((x, y)) = self.pointer {
            if self.areas.last().is_some_and(|a| a.contains(x, y)) {
                self.hovered = Some(self.areas.len() - 1);
            }
        }
    }

    /// Return the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Track the mouse position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.find_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Whether the last known mouse position is inside `rect`.
    ///
    /// Render code uses this to style an element before registering it.
    pub fn is_pointer_over(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|(x, y)| rect_contains(rect, x, y))
    }

    /// Action under the pointer, if any.
    pub fn hovered_action(&self) -> Option<ClickAction> {
        self.hovered.and_then(|i| self.areas.get(i)).map(|a| a.action)
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 5, 4, 2), ClickAction::SendAnswer);
        assert!(area.contains(10, 5));
        assert!(area.contains(13, 6));
        assert!(!area.contains(14, 6));
        assert!(!area.contains(13, 7));
        assert!(!area.contains(9, 5));
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(Rect::new(3, 3, 0, 0), ClickAction::NextStar);
        assert!(!area.contains(3, 3));
    }

    #[test]
    fn test_hit_test_cards() {
        let mut registry = HitAreaRegistry::new();
        for i in 0..3u16 {
            registry.register(Rect::new(i * 20, 0, 18, 8), ClickAction::SelectCard(i as usize));
        }
        assert_eq!(registry.hit_test(25, 3), Some(ClickAction::SelectCard(1)));
        assert_eq!(registry.hit_test(19, 3), None);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_hit_test_overlapping_areas() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), ClickAction::SelectCard(0));
        registry.register(Rect::new(2, 2, 3, 1), ClickAction::SendAnswer);
        assert_eq!(registry.hit_test(3, 2), Some(ClickAction::SendAnswer));
        assert_eq!(registry.hit_test(8, 8), Some(ClickAction::SelectCard(0)));
    }

    #[test]
    fn test_clear_empties_registry() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 5), ClickAction::NextStar);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(1, 1), None);
    }

    #[test]
    fn test_hover_survives_rerender() {
        let button = Rect::new(0, 0, 5, 1);
        let mut registry = HitAreaRegistry::new();
        registry.register(button, ClickAction::SendAnswer);

        assert!(registry.update_hover(2, 0));
        assert!(!registry.update_hover(3, 0));
        assert_eq!(registry.hovered_action(), Some(ClickAction::SendAnswer));

        registry.clear();
        assert!(registry.is_pointer_over(button));
        assert!(!registry.is_pointer_over(Rect::new(0, 1, 5, 1)));
        registry.register(button, ClickAction::SendAnswer);
        assert_eq!(registry.hovered_action(), Some(ClickAction::SendAnswer));
    }

    #[test]
    fn test_click_maps_to_ui_event() {
        assert_eq!(ClickAction::SelectCard(2).to_event(), UiEvent::CardClicked(2));
        assert_eq!(ClickAction::SendAnswer.to_event(), UiEvent::SendClicked);
        assert_eq!(ClickAction::NextStar.to_event(), UiEvent::ResetClicked);
    }
}
