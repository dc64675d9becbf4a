//! List box widget.
//!
//! [`ListBox`] shows an ordered list of text rows with an optional selected
//! row and an optional hovered row. All rows have the same height, derived
//! from the font, so hit testing is a division.

use horizon_suggest_core::Signal;

use crate::geometry::{Point, Rect, Size};
use crate::style::{Color, TextStyle};
use crate::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, PaintContext, Widget, WidgetBase, WidgetEvent,
};

/// Vertical padding above and below each row's text.
pub const ROW_PADDING: f32 = 3.0;

/// Horizontal padding before each row's text.
const TEXT_INSET: f32 = 6.0;

/// A vertical list of text rows.
pub struct ListBox {
    base: WidgetBase,
    rows: Vec<String>,
    selected: Option<usize>,
    hovered: Option<usize>,
    style: TextStyle,
    selection_color: Color,
    hover_color: Color,

    /// Emitted with the row index when a row is clicked.
    pub row_clicked: Signal<usize>,
}

impl ListBox {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            rows: Vec::new(),
            selected: None,
            hovered: None,
            style: TextStyle::default(),
            selection_color: Color::from_rgb8(51, 153, 255),
            hover_color: Color::from_rgb8(229, 241, 251),
            row_clicked: Signal::new(),
        }
    }

    /// Set the text style using builder pattern.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    // =========================================================================
    // Rows
    // =========================================================================

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Replace all rows. Clears the selection and hover.
    pub fn set_rows(&mut self, rows: Vec<String>) {
        self.rows = rows;
        self.selected = None;
        self.hovered = None;
        self.base.update();
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.set_rows(Vec::new());
    }

    /// The height of one row.
    pub fn row_height(&self) -> f32 {
        self.style.font_or_default().line_height() + ROW_PADDING * 2.0
    }

    /// Height needed to show every row.
    pub fn content_height(&self) -> f32 {
        self.rows.len() as f32 * self.row_height()
    }

    /// The bounding box of a row in list-local coordinates.
    pub fn row_rect(&self, index: usize) -> Option<Rect> {
        (index < self.rows.len()).then(|| {
            let height = self.row_height();
            Rect::new(0.0, index as f32 * height, self.base.width(), height)
        })
    }

    /// The row at local y coordinate `y`, if any.
    pub fn row_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        let index = (y / self.row_height()) as usize;
        (index < self.rows.len()).then_some(index)
    }

    // =========================================================================
    // Selection and hover
    // =========================================================================

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row. Out-of-range indices clear the selection.
    pub fn set_selected(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.rows.len());
        if self.selected != index {
            self.selected = index;
            self.base.update();
        }
    }

    pub fn clear_selection(&mut self) {
        self.set_selected(None);
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Update the hovered row. Returns `true` if it changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.rows.len());
        if self.hovered != index {
            self.hovered = index;
            self.base.update();
            true
        } else {
            false
        }
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        match self.row_at(event.local_pos.y) {
            Some(index) => {
                self.set_selected(Some(index));
                self.row_clicked.emit(index);
                true
            }
            None => false,
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let inside = self.base.rect().contains(event.local_pos);
        let row = if inside { self.row_at(event.local_pos.y) } else { None };
        self.set_hovered(row)
    }
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ListBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        Size::new(160.0, self.content_height())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let font = self.style.font_or_default();
        let foreground = self.style.foreground.unwrap_or(Color::BLACK);
        let justify = self.style.justify.unwrap_or_default();
        let row_height = self.row_height();
        let width = ctx.width();
        let available = (width - TEXT_INSET * 2.0).max(0.0);

        if let Some(background) = self.style.background {
            ctx.fill_rect(ctx.rect(), background);
        }

        for (index, row) in self.rows.iter().enumerate() {
            let y = index as f32 * row_height;
            if y >= ctx.height() {
                break;
            }
            let row_rect = Rect::new(0.0, y, width, row_height);

            let text_color = if self.selected == Some(index) {
                ctx.fill_rect(row_rect, self.selection_color);
                Color::WHITE
            } else {
                if self.hovered == Some(index) {
                    ctx.fill_rect(row_rect, self.hover_color);
                }
                foreground
            };

            let text_width = ctx.text_width(row, &font);
            let x = TEXT_INSET + justify.offset(available, text_width);
            ctx.draw_text(row, Point::new(x, y + ROW_PADDING), &font, text_color);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
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

impl std::fmt::Debug for ListBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListBox")
            .field("rows", &self.rows)
            .field("selected", &self.selected)
            .field("hovered", &self.hovered)
            .finish()
    }
}

static_assertions::assert_impl_all!(ListBox: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::KeyboardModifiers;
    use crate::widget::traits::testing::{PaintOp, RecordingPainter};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn list(rows: &[&str]) -> ListBox {
        let mut list = ListBox::new();
        list.set_rows(rows.iter().map(|s| s.to_string()).collect());
        let height = list.content_height();
        list.set_geometry(Rect::new(0.0, 0.0, 120.0, height));
        list
    }

    #[test]
    fn test_row_height_from_font() {
        let list = ListBox::new();
        assert_eq!(list.row_height(), 18.0 + 2.0 * ROW_PADDING);
    }

    #[test]
    fn test_row_at_and_row_rect() {
        let list = list(&["Apple", "Banana", "Date"]);
        let h = list.row_height();
        assert_eq!(list.row_at(0.0), Some(0));
        assert_eq!(list.row_at(h + 1.0), Some(1));
        assert_eq!(list.row_at(h * 3.0), None);
        assert_eq!(list.row_at(-1.0), None);
        assert_eq!(list.row_rect(2), Some(Rect::new(0.0, 2.0 * h, 120.0, h)));
        assert_eq!(list.row_rect(3), None);
    }

    #[test]
    fn test_set_rows_clears_selection() {
        let mut list = list(&["a", "b"]);
        list.set_selected(Some(1));
        assert_eq!(list.selected(), Some(1));
        list.set_selected(Some(5));
        assert_eq!(list.selected(), None);
        list.set_selected(Some(0));
        list.set_rows(vec!["c".into()]);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_click_emits_row() {
        let mut list = list(&["Apple", "Banana"]);
        let clicked = Arc::new(Mutex::new(None));
        let clicked_clone = clicked.clone();
        list.row_clicked.connect(move |&row| *clicked_clone.lock() = Some(row));

        let y = list.row_height() * 1.5;
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(10.0, y),
            Point::new(10.0, y),
            Point::new(10.0, y),
            KeyboardModifiers::NONE,
        ));
        assert!(list.event(&mut event));
        assert_eq!(*clicked.lock(), Some(1));
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_paint_selected_row_inverted() {
        let mut list = list(&["Apple", "Banana"]);
        list.set_selected(Some(0));

        let mut painter = RecordingPainter::default();
        {
            let size = list.geometry().size;
            let mut ctx = PaintContext::new(&mut painter, Point::ZERO, size);
            list.paint(&mut ctx);
        }
        assert_eq!(painter.texts(), ["Apple", "Banana"]);
        assert!(painter.ops.iter().any(|op| matches!(
            op,
            PaintOp::Text(text, _, color) if text == "Apple" && *color == Color::WHITE
        )));
    }
}
