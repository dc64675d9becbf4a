//! Push button widget implementation.
//!
//! A clickable button with a text label. Clicks come from a left mouse press
//! inside the button, or from Space/Enter while it has focus.

use horizon_suggest_core::Signal;

use crate::geometry::{Point, Size};
use crate::style::{Color, Font};
use crate::widget::{
    FocusPolicy, Key, MouseButton, PaintContext, Widget, WidgetBase, WidgetEvent,
};

/// A standard push button.
pub struct PushButton {
    base: WidgetBase,
    text: String,
    font: Font,

    /// Emitted when the button is clicked.
    pub clicked: Signal<()>,
}

impl PushButton {
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.set_focus_policy(FocusPolicy::StrongFocus);
        Self {
            base,
            text: text.into(),
            font: Font::default(),
            clicked: Signal::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Emit `clicked` if the button is enabled.
    pub fn click(&mut self) {
        if self.base.is_enabled() {
            self.clicked.emit(());
        }
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        let text_width = self.text.chars().count() as f32 * self.font.size() * 0.6;
        Size::new((text_width + 24.0).max(80.0), self.font.line_height() + 12.0)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let background = if self.base.is_enabled() {
            Color::from_rgb8(240, 240, 240)
        } else {
            Color::from_rgb8(250, 250, 250)
        };
        ctx.fill_rect(rect, background);
        ctx.stroke_rect(rect, Color::from_rgb8(173, 173, 173), 1.0);

        let text_width = ctx.text_width(&self.text, &self.font);
        let x = ((rect.width() - text_width) / 2.0).max(0.0);
        let y = ((rect.height() - self.font.line_height()) / 2.0).max(0.0);
        ctx.draw_text(&self.text, Point::new(x, y), &self.font, Color::BLACK);

        if self.base.has_focus() && ctx.should_show_focus() {
            ctx.draw_focus_indicator(2.0);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) if e.button == MouseButton::Left => {
                self.click();
                true
            }
            WidgetEvent::KeyPress(e) if matches!(e.key, Key::Space | Key::Enter) => {
                self.click();
                true
            }
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

impl std::fmt::Debug for PushButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushButton").field("text", &self.text).finish()
    }
}

static_assertions::assert_impl_all!(PushButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{KeyPressEvent, KeyboardModifiers, MousePressEvent};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_click_sources() {
        let mut button = PushButton::new("Submit");
        let clicks = Arc::new(Mutex::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |()| *clicks_clone.lock() += 1);

        button.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::ZERO,
            Point::ZERO,
            Point::ZERO,
            KeyboardModifiers::NONE,
        )));
        button.event(&mut WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Space,
            KeyboardModifiers::NONE,
            " ",
            false,
        )));
        button.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Right,
            Point::ZERO,
            Point::ZERO,
            Point::ZERO,
            KeyboardModifiers::NONE,
        )));
        assert_eq!(*clicks.lock(), 2);
    }

    #[test]
    fn test_disabled_does_not_click() {
        let mut button = PushButton::new("Submit");
        button.widget_base_mut().set_enabled(false);
        let clicks = Arc::new(Mutex::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |()| *clicks_clone.lock() += 1);
        button.click();
        assert_eq!(*clicks.lock(), 0);
    }
}
