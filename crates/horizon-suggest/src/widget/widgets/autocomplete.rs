//! Text entry with a popup list of matching candidates.
//!
//! [`AutocompleteField`] combines an [`Entry`], a [`Popup`] anchored under it,
//! and the [`ListBox`] inside that popup. Every change to the entry's text
//! recomputes the match list with [`CandidateList::filter`]; the popup shows
//! the matches while the text is non-empty and something matches.
//!
//! # Events
//!
//! The host delivers events through [`Widget::event`]:
//!
//! - `KeyPress` edits the text.
//! - `KeyRelease` navigates: Down/Up move the highlight with wraparound,
//!   Enter copies the highlighted row into the text, Escape hides the popup.
//! - `MousePress` must be delivered for every primary click in the window,
//!   not only clicks on the field. A click on a popup row selects it; any
//!   other click hides the popup. The event is accepted when the field
//!   should hold keyboard focus afterwards.
//! - `MouseMove` tracks the hovered popup row.
//! - `FocusOut` hides the popup.
//! - `WindowConfigure` re-anchors the popup after the window moves or resizes.
//!
//! Mouse positions for the popup are read from `global_pos`; positions for
//! the entry from `window_pos`.
//!
//! # Shared value
//!
//! The text lives in a [`TextVariable`]. Writes made through another clone of
//! the variable are noticed at the start of the next event, or by calling
//! [`AutocompleteField::sync`], and handled exactly like typing.

use horizon_suggest_core::logging::targets;
use horizon_suggest_core::{Signal, TextVariable};

use crate::geometry::{Point, Rect, Size};
use crate::style::TextStyle;
use crate::widget::completer::{CandidateList, Highlight};
use crate::widget::{
    FocusInEvent, FocusOutEvent, Key, KeyReleaseEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, PaintContext, Painter, Widget, WidgetBase, WidgetEvent,
};

use super::{Entry, ListBox, Popup};

// ============================================================================
// Options
// ============================================================================

/// Construction options for an [`AutocompleteField`].
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// Text the field starts with. Does not open the popup.
    pub initial_value: Option<String>,
    /// An existing variable to bind instead of creating a new one.
    pub variable: Option<TextVariable>,
    /// Style forwarded to both the entry and the popup list.
    pub style: TextStyle,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value using builder pattern.
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Bind an existing variable using builder pattern.
    pub fn with_variable(mut self, variable: TextVariable) -> Self {
        self.variable = Some(variable);
        self
    }

    /// Set the text style using builder pattern.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

// ============================================================================
// AutocompleteField
// ============================================================================

/// A text entry that suggests candidates in a popup list.
pub struct AutocompleteField {
    entry: Entry,
    popup: Popup,
    candidates: CandidateList,
    matches: Vec<String>,
    highlight: Highlight,
    /// Variable revision the match list was computed for.
    seen_revision: u64,
    /// Screen position of the owning window's content area.
    content_origin: Point,

    /// Emitted with the text whenever the match list is recomputed for it.
    pub text_changed: Signal<String>,
    /// Emitted with the chosen row after a selection by Enter or click.
    pub activated: Signal<String>,
    /// Emitted with the row text when keyboard navigation highlights a row.
    pub highlighted: Signal<String>,
    /// Emitted when the popup is shown (`true`) or hidden (`false`).
    pub popup_visibility_changed: Signal<bool>,
}

impl AutocompleteField {
    /// Create a field suggesting from `candidates`.
    pub fn new(candidates: impl Into<CandidateList>, options: FieldOptions) -> Self {
        let FieldOptions {
            initial_value,
            variable,
            style,
        } = options;

        let variable = variable.unwrap_or_default();
        if let Some(value) = initial_value {
            variable.set(value);
        }

        let entry = Entry::with_variable(variable).with_style(style.clone());
        let popup = Popup::new(ListBox::new().with_style(style));
        let candidates = candidates.into();

        let mut field = Self {
            entry,
            popup,
            candidates,
            matches: Vec::new(),
            highlight: Highlight::new(),
            seen_revision: 0,
            content_origin: Point::ZERO,
            text_changed: Signal::new(),
            activated: Signal::new(),
            highlighted: Signal::new(),
            popup_visibility_changed: Signal::new(),
        };
        field.refresh_matches();
        field
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// A copy of the current text.
    pub fn text(&self) -> String {
        self.entry.text()
    }

    /// Replace the text. Handled like typing: the popup opens if anything matches.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.entry.set_text(text);
        self.sync();
    }

    /// The shared variable holding the text.
    pub fn variable(&self) -> &TextVariable {
        self.entry.variable()
    }

    /// Pick up a write made to the variable outside this field.
    ///
    /// Returns `true` if the text had changed since the last update.
    pub fn sync(&mut self) -> bool {
        if self.variable().revision() == self.seen_revision {
            return false;
        }
        self.on_text_changed();
        true
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// The current match list, in candidate order.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// The keyboard-highlighted row, always valid for [`matches`](Self::matches).
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlight.valid_index(self.matches.len())
    }

    /// The popup row under the mouse pointer.
    pub fn hovered_index(&self) -> Option<usize> {
        self.popup.list().hovered()
    }

    pub fn is_popup_visible(&self) -> bool {
        self.popup.is_visible()
    }

    /// The popup's screen rectangle while it is visible.
    pub fn popup_geometry(&self) -> Option<Rect> {
        self.popup
            .is_visible()
            .then(|| self.popup.screen_geometry())
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The field's rectangle in screen coordinates.
    pub fn screen_geometry(&self) -> Rect {
        self.geometry().offset(self.content_origin.x, self.content_origin.y)
    }

    /// Record the owning window's content position and re-anchor the popup.
    pub fn handle_window_configure(&mut self, content_origin: Point, _content_size: Size) {
        self.content_origin = content_origin;
        if self.popup.is_visible() {
            self.update_popup_geometry();
        }
    }

    // =========================================================================
    // Popup management
    // =========================================================================

    /// Recompute the match list for the current text. Clears the highlight.
    fn refresh_matches(&mut self) {
        self.seen_revision = self.variable().revision();
        let text = self.text();
        self.matches = self.candidates.filter(&text);
        self.highlight.clear();
        self.popup.list_mut().set_rows(self.matches.clone());
    }

    fn on_text_changed(&mut self) {
        self.refresh_matches();
        let text = self.text();
        tracing::debug!(
            target: targets::COMPLETER,
            query = %text,
            matches = self.matches.len(),
            "match list recomputed"
        );
        self.text_changed.emit(text.clone());

        if text.is_empty() || self.matches.is_empty() {
            self.hide_popup();
        } else {
            self.show_popup();
        }
    }

    fn show_popup(&mut self) {
        self.update_popup_geometry();
        let was_visible = self.popup.is_visible();
        self.popup.deiconify();
        self.popup.raise();
        if !was_visible {
            self.popup_visibility_changed.emit(true);
        }
    }

    fn hide_popup(&mut self) {
        if self.popup.is_visible() {
            self.popup.withdraw();
            self.popup_visibility_changed.emit(false);
        }
    }

    /// Anchor the popup directly under the field, one row per match.
    fn update_popup_geometry(&mut self) {
        let field = self.screen_geometry();
        let size = self.popup.size_for_rows(field.width(), self.matches.len());
        self.popup
            .set_screen_geometry(Rect::from_origin_size(field.bottom_left(), size));
    }

    /// Hide the popup and forget the highlight.
    fn dismiss(&mut self) {
        self.hide_popup();
        self.set_highlight(None);
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        match index {
            Some(index) => self.highlight.set(index, self.matches.len()),
            None => self.highlight.clear(),
        }
        self.popup.list_mut().set_selected(self.highlight.index());
    }

    /// Copy match `index` into the text and close the popup.
    fn select_row(&mut self, index: usize) {
        let Some(value) = self.matches.get(index).cloned() else {
            return;
        };
        tracing::debug!(target: targets::COMPLETER, index, value = %value, "row selected");

        let before = self.variable().revision();
        self.entry.set_text(value.clone());
        let changed = self.variable().revision() != before;
        self.refresh_matches();
        if changed {
            self.text_changed.emit(value.clone());
        }
        self.hide_popup();
        self.entry.move_cursor_to_end();
        self.activated.emit(value);
    }

    fn emit_highlighted(&self) {
        if let Some(text) = self.highlighted_index().and_then(|i| self.matches.get(i)) {
            self.highlighted.emit(text.clone());
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        match event.key {
            Key::Escape => {
                self.hide_popup();
                true
            }
            Key::Enter => match self.highlighted_index() {
                Some(index) => {
                    self.select_row(index);
                    true
                }
                None => false,
            },
            Key::ArrowDown => {
                if self.matches.is_empty() {
                    return false;
                }
                if !self.popup.is_visible() {
                    self.show_popup();
                }
                self.highlight.move_down(self.matches.len());
                self.set_highlight(self.highlight.index());
                self.emit_highlighted();
                true
            }
            Key::ArrowUp => {
                if self.matches.is_empty() {
                    return false;
                }
                if !self.popup.is_visible() {
                    self.show_popup();
                }
                self.highlight.move_up(self.matches.len());
                self.set_highlight(self.highlight.index());
                self.emit_highlighted();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if self.popup.contains_screen_point(event.global_pos) {
            let mut popup_event = WidgetEvent::MousePress(*event);
            if self.popup.event(&mut popup_event) {
                if let Some(row) = self.popup.list().selected() {
                    self.select_row(row);
                    self.entry.widget_base_mut().set_focused(true);
                }
            }
            // A click on the popup border or below the last row still keeps
            // focus in the field.
            return true;
        }

        self.dismiss();

        if self.entry.widget_base().contains_window_point(event.window_pos) {
            let mut entry_event = WidgetEvent::MousePress(MousePressEvent {
                local_pos: self.entry.widget_base().map_from_window(event.window_pos),
                ..*event
            });
            self.entry.event(&mut entry_event)
        } else {
            false
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if !self.popup.is_visible() {
            return false;
        }
        let mut popup_event = WidgetEvent::MouseMove(*event);
        let changed = self.popup.event(&mut popup_event);
        if changed {
            tracing::trace!(target: targets::POPUP, hovered = ?self.hovered_index(), "hover");
        }
        changed
    }

    fn handle_focus_in(&mut self, event: &FocusInEvent) {
        let mut entry_event = WidgetEvent::FocusIn(*event);
        self.entry.event(&mut entry_event);
    }

    fn handle_focus_out(&mut self, event: &FocusOutEvent) {
        let mut entry_event = WidgetEvent::FocusOut(*event);
        self.entry.event(&mut entry_event);
        self.dismiss();
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the popup, if visible, onto a surface covering the owning window.
    ///
    /// Call after painting every widget of the window so the popup lands on top.
    pub fn paint_popup(&self, painter: &mut dyn Painter) {
        let Some(geometry) = self.popup_geometry() else {
            return;
        };
        let origin = Point::new(
            geometry.left() - self.content_origin.x,
            geometry.top() - self.content_origin.y,
        );
        let mut ctx = PaintContext::new(painter, origin, geometry.size);
        self.popup.paint(&mut ctx);
    }
}

impl Widget for AutocompleteField {
    fn widget_base(&self) -> &WidgetBase {
        self.entry.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.entry.widget_base_mut()
    }

    fn size_hint(&self) -> Size {
        self.entry.size_hint()
    }

    /// Paints the entry. The popup is painted separately by [`paint_popup`](Self::paint_popup).
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        self.entry.paint(ctx);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        self.sync();

        let handled = match event {
            WidgetEvent::KeyPress(e) => {
                let mut entry_event = WidgetEvent::KeyPress(e.clone());
                let handled = self.entry.event(&mut entry_event);
                self.sync();
                handled
            }
            WidgetEvent::KeyRelease(e) => self.handle_key_release(e),
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::FocusIn(e) => {
                self.handle_focus_in(e);
                true
            }
            WidgetEvent::FocusOut(e) => {
                self.handle_focus_out(e);
                true
            }
            WidgetEvent::WindowConfigure(e) => {
                self.handle_window_configure(e.content_origin, e.content_size);
                false
            }
        };

        if handled {
            event.accept();
        }
        handled
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.entry.set_geometry(rect);
        if self.popup.is_visible() {
            self.update_popup_geometry();
        }
    }
}

impl std::fmt::Debug for AutocompleteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteField")
            .field("text", &self.text())
            .field("matches", &self.matches)
            .field("highlight", &self.highlighted_index())
            .field("popup_visible", &self.popup.is_visible())
            .finish()
    }
}

static_assertions::assert_impl_all!(AutocompleteField: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{KeyPressEvent, KeyboardModifiers};

    fn field() -> AutocompleteField {
        let mut field = AutocompleteField::new(
            vec!["Apple", "Banana", "Cherry", "Date"],
            FieldOptions::default(),
        );
        field.set_geometry(Rect::new(10.0, 10.0, 200.0, 28.0));
        field.handle_window_configure(Point::new(100.0, 100.0), Size::new(400.0, 300.0));
        field
    }

    fn release(field: &mut AutocompleteField, key: Key) -> bool {
        field.event(&mut WidgetEvent::KeyRelease(KeyReleaseEvent::new(
            key,
            KeyboardModifiers::NONE,
        )))
    }

    #[test]
    fn test_initial_value_does_not_open_popup() {
        let field = AutocompleteField::new(
            vec!["Apple", "Banana"],
            FieldOptions::new().with_initial_value("an"),
        );
        assert_eq!(field.text(), "an");
        assert_eq!(field.matches(), ["Banana"]);
        assert!(!field.is_popup_visible());
    }

    #[test]
    fn test_down_reveals_after_escape() {
        let mut field = field();
        field.set_text("a");
        release(&mut field, Key::Escape);
        assert!(!field.is_popup_visible());

        release(&mut field, Key::ArrowDown);
        assert!(field.is_popup_visible());
        assert_eq!(field.highlighted_index(), Some(0));
    }

    #[test]
    fn test_escape_keeps_text_and_highlight() {
        let mut field = field();
        field.set_text("a");
        release(&mut field, Key::ArrowDown);
        release(&mut field, Key::Escape);
        assert_eq!(field.text(), "a");
        assert_eq!(field.highlighted_index(), Some(0));
    }

    #[test]
    fn test_down_without_matches_does_nothing() {
        let mut field = field();
        assert!(!release(&mut field, Key::ArrowDown));
        field.set_text("xyz");
        assert!(!release(&mut field, Key::ArrowUp));
        assert!(!field.is_popup_visible());
        assert_eq!(field.highlighted_index(), None);
    }

    #[test]
    fn test_enter_without_highlight_does_nothing() {
        let mut field = field();
        field.set_text("a");
        assert!(!release(&mut field, Key::Enter));
        assert_eq!(field.text(), "a");
        assert!(field.is_popup_visible());
    }

    #[test]
    fn test_reshowing_raises_popup() {
        let mut field = field();
        field.set_text("a");
        let first = field.popup().stacking_order();
        field.set_text("ap");
        assert!(field.is_popup_visible());
        assert!(field.popup().stacking_order() > first);
    }

    #[test]
    fn test_selecting_current_text_does_not_report_change() {
        let mut field = field();
        field.set_text("Apple");
        let changes = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        field
            .text_changed
            .connect(move |text| changes_clone.lock().push(text.clone()));
        let activated = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
        let activated_clone = activated.clone();
        field
            .activated
            .connect(move |text| activated_clone.lock().push(text.clone()));

        release(&mut field, Key::ArrowDown);
        assert!(release(&mut field, Key::Enter));
        assert_eq!(field.text(), "Apple");
        assert!(!field.is_popup_visible());
        assert!(changes.lock().is_empty());
        assert_eq!(*activated.lock(), vec!["Apple".to_string()]);
    }

    #[test]
    fn test_typing_opens_popup() {
        let mut field = field();
        field.event(&mut WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Character('e'),
            KeyboardModifiers::NONE,
            "e",
            false,
        )));
        assert_eq!(field.matches(), ["Apple", "Cherry", "Date"]);
        assert!(field.is_popup_visible());
    }
}
