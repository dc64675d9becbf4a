//! Widget base implementation.
//!
//! `WidgetBase` holds the state every widget shares: geometry, visibility,
//! enabled and focus state, and the repaint flag. Widgets embed one and
//! delegate to it through [`Widget::widget_base`](super::Widget::widget_base).

use horizon_suggest_core::Signal;

use crate::geometry::{Point, Rect, Size};

/// How a widget accepts keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// The widget never takes focus.
    #[default]
    NoFocus,
    /// The widget takes focus when clicked.
    ClickFocus,
    /// The widget takes focus by clicking and by tabbing.
    StrongFocus,
}

/// The base implementation for all widgets.
pub struct WidgetBase {
    /// Position relative to the window content area, and size.
    geometry: Rect,
    visible: bool,
    enabled: bool,
    focus_policy: FocusPolicy,
    focused: bool,
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,
}

impl WidgetBase {
    /// Create a new, visible, enabled widget base with empty geometry.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            focus_policy: FocusPolicy::NoFocus,
            focused: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The widget's geometry in window coordinates.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the geometry, emitting `geometry_changed` if it differs.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.update();
            self.geometry_changed.emit(rect);
        }
    }

    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    pub fn width(&self) -> f32 {
        self.geometry.width()
    }

    pub fn height(&self) -> f32 {
        self.geometry.height()
    }

    /// The widget's rectangle in its own coordinates (origin at 0,0).
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.geometry.size)
    }

    /// Map a window-coordinate point into widget coordinates.
    pub fn map_from_window(&self, point: Point) -> Point {
        Point::new(point.x - self.geometry.origin.x, point.y - self.geometry.origin.y)
    }

    /// Check whether a window-coordinate point is inside the widget.
    pub fn contains_window_point(&self, point: Point) -> bool {
        self.visible && self.geometry.contains(point)
    }

    // =========================================================================
    // Visibility and enabled state
    // =========================================================================

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Check whether the widget accepts focus at all.
    pub fn is_focusable(&self) -> bool {
        self.enabled && self.focus_policy != FocusPolicy::NoFocus
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Record the focus state. Called by the widget's focus event handlers.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.update();
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Schedule a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag after painting.
    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("focused", &self.focused)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_geometry_changed_emitted_once() {
        let mut base = WidgetBase::new();
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        base.geometry_changed.connect(move |_| *count_clone.lock() += 1);

        base.set_geometry(Rect::new(1.0, 2.0, 3.0, 4.0));
        base.set_geometry(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(*count.lock(), 1);
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn test_map_from_window() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(10.0, 20.0, 100.0, 30.0));
        assert_eq!(base.map_from_window(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
        assert!(base.contains_window_point(Point::new(15.0, 25.0)));
        base.set_visible(false);
        assert!(!base.contains_window_point(Point::new(15.0, 25.0)));
    }

    #[test]
    fn test_focusable_requires_policy_and_enabled() {
        let mut base = WidgetBase::new();
        assert!(!base.is_focusable());
        base.set_focus_policy(FocusPolicy::StrongFocus);
        assert!(base.is_focusable());
        base.set_enabled(false);
        assert!(!base.is_focusable());
    }
}
