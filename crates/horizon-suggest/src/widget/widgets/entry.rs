//! Single-line text entry widget.
//!
//! [`Entry`] edits a [`TextVariable`]. The variable may be shared with the
//! application, which can read or write it at any time; the entry keeps its
//! caret valid against whatever text the variable currently holds.
//!
//! # Example
//!
//! ```
//! use horizon_suggest::core::TextVariable;
//! use horizon_suggest::widget::widgets::Entry;
//!
//! let value = TextVariable::new("Hello");
//! let mut entry = Entry::with_variable(value.clone());
//! entry.insert_text(", world");
//! assert_eq!(value.get(), "Hello, world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use horizon_suggest_core::{Signal, TextVariable};

use crate::geometry::{Point, Rect, Size};
use crate::style::{Color, Font, TextStyle};
use crate::widget::{
    FocusPolicy, Key, KeyPressEvent, MouseButton, MousePressEvent, PaintContext, Widget,
    WidgetBase, WidgetEvent,
};

/// Horizontal padding between the border and the text.
const TEXT_PADDING: f32 = 4.0;

/// A single-line text input bound to a [`TextVariable`].
pub struct Entry {
    base: WidgetBase,
    variable: TextVariable,
    /// Caret position as a byte offset into the text.
    cursor_pos: usize,
    style: TextStyle,

    /// Emitted with the new text after an edit made through this entry.
    pub text_changed: Signal<String>,
    /// Emitted when Enter is pressed.
    pub return_pressed: Signal<()>,
}

impl Entry {
    /// Create an entry with its own empty variable.
    pub fn new() -> Self {
        Self::with_variable(TextVariable::default())
    }

    /// Create an entry editing `variable`, with the caret at the end.
    pub fn with_variable(variable: TextVariable) -> Self {
        let mut base = WidgetBase::new();
        base.set_focus_policy(FocusPolicy::StrongFocus);
        let cursor_pos = variable.with(str::len);
        Self {
            base,
            variable,
            cursor_pos,
            style: TextStyle::default(),
            text_changed: Signal::new(),
            return_pressed: Signal::new(),
        }
    }

    /// Set the text style using builder pattern.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// The variable this entry edits.
    pub fn variable(&self) -> &TextVariable {
        &self.variable
    }

    /// A copy of the current text.
    pub fn text(&self) -> String {
        self.variable.get()
    }

    /// Replace the text and move the caret to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cursor_pos = text.len();
        if self.variable.set(text.clone()) {
            self.base.update();
            self.text_changed.emit(text);
        }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.base.update();
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// The caret position as a byte offset, valid for the current text.
    pub fn cursor_position(&self) -> usize {
        self.variable.with(|text| snap_to_char_boundary(text, self.cursor_pos))
    }

    /// Move the caret. Out-of-range positions are clamped to the text.
    pub fn set_cursor_position(&mut self, pos: usize) {
        self.cursor_pos = self.variable.with(|text| snap_to_char_boundary(text, pos));
        self.base.update();
    }

    /// Move the caret past the last character.
    pub fn move_cursor_to_end(&mut self) {
        self.cursor_pos = self.variable.with(str::len);
        self.base.update();
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_pos = 0;
        self.base.update();
    }

    /// Move the caret one grapheme to the left.
    pub fn move_cursor_left(&mut self) {
        let pos = self.cursor_position();
        self.cursor_pos = self.variable.with(|text| prev_grapheme_boundary(text, pos));
        self.base.update();
    }

    /// Move the caret one grapheme to the right.
    pub fn move_cursor_right(&mut self) {
        let pos = self.cursor_position();
        self.cursor_pos = self.variable.with(|text| next_grapheme_boundary(text, pos));
        self.base.update();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert text at the caret.
    pub fn insert_text(&mut self, inserted: &str) {
        if inserted.is_empty() {
            return;
        }
        let pos = self.cursor_position();
        let mut text = self.text();
        text.insert_str(pos, inserted);
        self.cursor_pos = pos + inserted.len();
        self.commit(text);
    }

    /// Delete the grapheme before the caret (Backspace).
    pub fn delete_char_before(&mut self) {
        let pos = self.cursor_position();
        if pos == 0 {
            return;
        }
        let mut text = self.text();
        let prev = prev_grapheme_boundary(&text, pos);
        text.replace_range(prev..pos, "");
        self.cursor_pos = prev;
        self.commit(text);
    }

    /// Delete the grapheme after the caret (Delete).
    pub fn delete_char_after(&mut self) {
        let pos = self.cursor_position();
        let mut text = self.text();
        if pos >= text.len() {
            return;
        }
        let next = next_grapheme_boundary(&text, pos);
        text.replace_range(pos..next, "");
        self.cursor_pos = pos;
        self.commit(text);
    }

    fn commit(&mut self, text: String) {
        if self.variable.set(text.clone()) {
            self.base.update();
            self.text_changed.emit(text);
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match event.key {
            Key::ArrowLeft => {
                self.move_cursor_left();
                true
            }
            Key::ArrowRight => {
                self.move_cursor_right();
                true
            }
            Key::Home => {
                self.move_cursor_to_start();
                true
            }
            Key::End => {
                self.move_cursor_to_end();
                true
            }
            Key::Backspace => {
                self.delete_char_before();
                true
            }
            Key::Delete => {
                self.delete_char_after();
                true
            }
            Key::Enter => {
                self.return_pressed.emit(());
                true
            }
            _ => {
                if !event.text.is_empty() && !event.modifiers.is_command() {
                    self.insert_text(&event.text);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left || !self.base.is_enabled() {
            return false;
        }
        // No text metrics are available outside paint, so a click places the
        // caret at the end.
        self.move_cursor_to_end();
        true
    }

    fn text_color(&self) -> Color {
        if self.base.is_enabled() {
            self.style.foreground.unwrap_or(Color::BLACK)
        } else {
            Color::from_rgb8(160, 160, 160)
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Entry {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        let line_height = self.style.font_or_default().line_height();
        Size::new(200.0, line_height + 8.0)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let font: Font = self.style.font_or_default();
        let justify = self.style.justify.unwrap_or_default();

        let background = self.style.background.unwrap_or(Color::WHITE);
        ctx.fill_rect(rect, background);

        let border_color = if self.base.has_focus() {
            Color::from_rgb8(51, 153, 255)
        } else {
            Color::from_rgb8(200, 200, 200)
        };
        ctx.stroke_rect(rect, border_color, 1.0);

        let text = self.text();
        let available = (rect.width() - TEXT_PADDING * 2.0).max(0.0);
        let text_width = ctx.text_width(&text, &font);
        let x = TEXT_PADDING + justify.offset(available, text_width);
        let y = ((rect.height() - font.line_height()) / 2.0).max(0.0);

        if !text.is_empty() {
            ctx.draw_text(&text, Point::new(x, y), &font, self.text_color());
        }

        if self.base.has_focus() {
            let cursor_pos = snap_to_char_boundary(&text, self.cursor_pos);
            let cursor_x = if cursor_pos == 0 {
                0.0
            } else {
                ctx.text_width(&text[..cursor_pos], &font)
            };
            ctx.fill_rect(
                Rect::new(x + cursor_x, y, 1.5, font.line_height()),
                self.text_color(),
            );
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::FocusIn(_) => {
                self.base.set_focused(true);
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.base.set_focused(false);
                true
            }
            _ => false,
        };
        if handled {
            event.accept();
        }
        handled
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("text", &self.text())
            .field("cursor_pos", &self.cursor_pos)
            .finish()
    }
}

static_assertions::assert_impl_all!(Entry: Send, Sync);

// =============================================================================
// Grapheme boundaries
// =============================================================================

/// Clamp `pos` to the text and move it back onto a char boundary.
fn snap_to_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

fn prev_grapheme_boundary(text: &str, pos: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(offset, _)| offset)
        .take_while(|&offset| offset < pos)
        .last()
        .unwrap_or(0)
}

fn next_grapheme_boundary(text: &str, pos: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(offset, grapheme)| offset + grapheme.len())
        .find(|&end| end > pos)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::traits::testing::RecordingPainter;
    use crate::widget::{FocusInEvent, FocusReason, KeyboardModifiers};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn press(key: Key, text: &str) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::new(key, KeyboardModifiers::NONE, text, false))
    }

    #[test]
    fn test_typing_writes_variable() {
        let var = TextVariable::default();
        let mut entry = Entry::with_variable(var.clone());
        entry.event(&mut press(Key::Character('a'), "a"));
        entry.event(&mut press(Key::Character('b'), "b"));
        assert_eq!(var.get(), "ab");
        assert_eq!(entry.cursor_position(), 2);
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut entry = Entry::with_variable(TextVariable::new("ace"));
        entry.move_cursor_left();
        entry.move_cursor_left();
        entry.insert_text("b");
        assert_eq!(entry.text(), "abce");
        entry.move_cursor_to_end();
        entry.event(&mut press(Key::Home, ""));
        assert_eq!(entry.cursor_position(), 0);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut entry = Entry::with_variable(TextVariable::new("abc"));
        entry.event(&mut press(Key::Backspace, ""));
        assert_eq!(entry.text(), "ab");
        entry.move_cursor_to_start();
        entry.event(&mut press(Key::Delete, ""));
        assert_eq!(entry.text(), "b");
        entry.move_cursor_to_start();
        entry.delete_char_before();
        assert_eq!(entry.text(), "b");
    }

    #[test]
    fn test_grapheme_aware_backspace() {
        // "e" followed by a combining acute accent is one grapheme
        let mut entry = Entry::with_variable(TextVariable::new("cafe\u{301}"));
        entry.delete_char_before();
        assert_eq!(entry.text(), "caf");
    }

    #[test]
    fn test_external_write_clamps_cursor() {
        let var = TextVariable::new("Elderberry");
        let mut entry = Entry::with_variable(var.clone());
        var.set("Fig");
        assert_eq!(entry.cursor_position(), 3);
        entry.insert_text("s");
        assert_eq!(var.get(), "Figs");
    }

    #[test]
    fn test_cursor_never_splits_char() {
        let entry = Entry::with_variable(TextVariable::new("héllo"));
        assert_eq!(snap_to_char_boundary("héllo", 2), 1);
        assert_eq!(entry.cursor_position(), "héllo".len());
    }

    #[test]
    fn test_text_changed_and_return_signals() {
        let mut entry = Entry::new();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let returns = Arc::new(Mutex::new(0));

        let changes_clone = changes.clone();
        entry.text_changed.connect(move |text| changes_clone.lock().push(text.clone()));
        let returns_clone = returns.clone();
        entry.return_pressed.connect(move |()| *returns_clone.lock() += 1);

        entry.event(&mut press(Key::Character('x'), "x"));
        entry.event(&mut press(Key::Enter, ""));
        entry.set_text("x");

        assert_eq!(*changes.lock(), vec!["x".to_string()]);
        assert_eq!(*returns.lock(), 1);
    }

    #[test]
    fn test_command_modifier_does_not_insert() {
        let mut entry = Entry::new();
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Character('a'),
            KeyboardModifiers::CTRL,
            "a",
            false,
        ));
        assert!(!entry.event(&mut event));
        assert!(!event.is_accepted());
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_paint_draws_text_and_caret_when_focused() {
        let mut entry = Entry::with_variable(TextVariable::new("Fig"));
        entry.set_geometry(Rect::new(0.0, 0.0, 100.0, 26.0));
        entry.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Mouse)));

        let mut painter = RecordingPainter::default();
        {
            let mut ctx = PaintContext::new(&mut painter, Point::ZERO, Size::new(100.0, 26.0));
            entry.paint(&mut ctx);
        }
        assert_eq!(painter.texts(), ["Fig"]);
        // background, caret
        let fills = painter
            .ops
            .iter()
            .filter(|op| matches!(op, crate::widget::traits::testing::PaintOp::Fill(..)))
            .count();
        assert_eq!(fills, 2);
    }
}
