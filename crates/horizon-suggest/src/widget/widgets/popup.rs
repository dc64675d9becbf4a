//! Borderless top-level popup surface.
//!
//! A [`Popup`] is positioned in screen coordinates, independent of the window
//! that owns it. It starts withdrawn. The host decides how to present it: the
//! demo paints visible popups after every window widget, back to front by
//! [`Popup::stacking_order`].
//!
//! The popup hosts one [`ListBox`] that fills its interior.

use std::sync::atomic::{AtomicU64, Ordering};

use horizon_suggest_core::Signal;
use horizon_suggest_core::logging::targets;

use crate::geometry::{Point, Rect, Size};
use crate::style::Color;
use crate::widget::{
    MouseMoveEvent, MousePressEvent, PaintContext, Widget, WidgetBase, WidgetEvent,
};

use super::ListBox;

/// Width of the popup's border.
pub const BORDER_WIDTH: f32 = 1.0;

/// Source of stacking order values; a raise takes the next one.
static NEXT_STACKING: AtomicU64 = AtomicU64::new(1);

/// A top-level surface holding a list of rows.
pub struct Popup {
    base: WidgetBase,
    list: ListBox,
    stacking: u64,
    border_color: Color,
    background: Color,

    /// Emitted with the new visibility after `withdraw` or `deiconify` changes it.
    pub visibility_changed: Signal<bool>,
}

impl Popup {
    /// Create a withdrawn popup around `list`.
    pub fn new(list: ListBox) -> Self {
        let mut base = WidgetBase::new();
        base.set_visible(false);
        let background = list.style().background.unwrap_or(Color::WHITE);
        Self {
            base,
            list,
            stacking: 0,
            border_color: Color::from_rgb8(160, 160, 160),
            background,
            visibility_changed: Signal::new(),
        }
    }

    pub fn list(&self) -> &ListBox {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListBox {
        &mut self.list
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Place the popup in screen coordinates; the list fills the interior.
    pub fn set_screen_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        let interior = Rect::from_origin_size(Point::ZERO, rect.size).deflate(BORDER_WIDTH);
        self.list.set_geometry(interior);
        tracing::debug!(
            target: targets::POPUP,
            x = rect.left(),
            y = rect.top(),
            width = rect.width(),
            height = rect.height(),
            "popup geometry"
        );
    }

    /// The popup's rectangle in screen coordinates.
    pub fn screen_geometry(&self) -> Rect {
        self.base.geometry()
    }

    /// The outer size that shows `rows` list rows.
    pub fn size_for_rows(&self, width: f32, rows: usize) -> Size {
        Size::new(width, rows as f32 * self.list.row_height() + BORDER_WIDTH * 2.0)
    }

    /// Check whether a screen point is inside the visible popup.
    pub fn contains_screen_point(&self, point: Point) -> bool {
        self.base.contains_window_point(point)
    }

    /// Map a screen point into list-local coordinates.
    pub fn map_to_list(&self, point: Point) -> Point {
        let local = self.base.map_from_window(point);
        Point::new(local.x - BORDER_WIDTH, local.y - BORDER_WIDTH)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    pub fn is_visible(&self) -> bool {
        self.base.is_visible()
    }

    /// Hide the popup.
    pub fn withdraw(&mut self) {
        if self.base.is_visible() {
            self.base.set_visible(false);
            self.list.set_hovered(None);
            tracing::debug!(target: targets::POPUP, "popup withdrawn");
            self.visibility_changed.emit(false);
        }
    }

    /// Show the popup.
    pub fn deiconify(&mut self) {
        if !self.base.is_visible() {
            self.base.set_visible(true);
            tracing::debug!(target: targets::POPUP, "popup shown");
            self.visibility_changed.emit(true);
        }
    }

    /// Bring the popup above every other surface.
    pub fn raise(&mut self) {
        self.stacking = NEXT_STACKING.fetch_add(1, Ordering::Relaxed);
        self.base.update();
    }

    /// Position in the stacking order; a larger value is closer to the front.
    pub fn stacking_order(&self) -> u64 {
        self.stacking
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        let mut forwarded = *event;
        forwarded.local_pos = self.map_to_list(event.global_pos);
        let mut list_event = WidgetEvent::MousePress(forwarded);
        self.list.event(&mut list_event)
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let mut forwarded = *event;
        forwarded.local_pos = self.map_to_list(event.global_pos);
        let mut list_event = WidgetEvent::MouseMove(forwarded);
        self.list.event(&mut list_event)
    }
}

impl Widget for Popup {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        self.size_for_rows(self.base.width(), self.list.row_count())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if !self.base.is_visible() {
            return;
        }
        let rect = ctx.rect();
        ctx.fill_rect(rect, self.background);

        let interior = self.list.geometry();
        {
            let origin = ctx.origin().offset_by(interior.origin);
            let mut list_ctx = PaintContext::new(ctx.painter(), origin, interior.size);
            self.list.paint(&mut list_ctx);
        }

        ctx.stroke_rect(rect, self.border_color, BORDER_WIDTH);
    }

    /// Mouse events are expected in screen coordinates (`global_pos`).
    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if !self.base.is_visible() {
            return false;
        }
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            _ => false,
        };
        if handled {
            event.accept();
        }
        handled
    }
}

impl std::fmt::Debug for Popup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popup")
            .field("geometry", &self.base.geometry())
            .field("visible", &self.base.is_visible())
            .field("stacking", &self.stacking)
            .field("list", &self.list)
            .finish()
    }
}

static_assertions::assert_impl_all!(Popup: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::KeyboardModifiers;
    use crate::widget::MouseButton;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn popup_with(rows: &[&str]) -> Popup {
        let mut popup = Popup::new(ListBox::new());
        popup
            .list_mut()
            .set_rows(rows.iter().map(|s| s.to_string()).collect());
        let size = popup.size_for_rows(150.0, rows.len());
        popup.set_screen_geometry(Rect::from_origin_size(Point::new(200.0, 300.0), size));
        popup
    }

    #[test]
    fn test_starts_withdrawn() {
        let popup = Popup::new(ListBox::new());
        assert!(!popup.is_visible());
        assert_eq!(popup.stacking_order(), 0);
    }

    #[test]
    fn test_visibility_signal_only_on_change() {
        let mut popup = popup_with(&["a"]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        popup
            .visibility_changed
            .connect(move |&visible| seen_clone.lock().push(visible));

        popup.deiconify();
        popup.deiconify();
        popup.withdraw();
        popup.withdraw();
        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_raise_orders_popups() {
        let mut first = Popup::new(ListBox::new());
        let mut second = Popup::new(ListBox::new());
        first.raise();
        second.raise();
        assert!(second.stacking_order() > first.stacking_order());
        first.raise();
        assert!(first.stacking_order() > second.stacking_order());
    }

    #[test]
    fn test_size_and_list_geometry() {
        let popup = popup_with(&["a", "b", "c"]);
        let row = popup.list().row_height();
        assert_eq!(popup.screen_geometry().height(), 3.0 * row + 2.0 * BORDER_WIDTH);
        assert_eq!(
            popup.list().geometry(),
            Rect::new(BORDER_WIDTH, BORDER_WIDTH, 148.0, 3.0 * row)
        );
    }

    #[test]
    fn test_click_in_screen_coordinates_selects_row() {
        let mut popup = popup_with(&["a", "b", "c"]);
        popup.deiconify();
        let row = popup.list().row_height();
        let point = Point::new(210.0, 300.0 + BORDER_WIDTH + row * 2.5);
        assert!(popup.contains_screen_point(point));

        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::ZERO,
            Point::ZERO,
            point,
            KeyboardModifiers::NONE,
        ));
        assert!(popup.event(&mut event));
        assert_eq!(popup.list().selected(), Some(2));
    }
}
