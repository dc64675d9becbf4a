//! Label widget implementation.

use horizon_suggest_core::Signal;

use crate::geometry::{Point, Size};
use crate::style::{Color, Font, Justify};
use crate::widget::{PaintContext, Widget, WidgetBase};

/// A single line of non-editable text.
pub struct Label {
    base: WidgetBase,
    text: String,
    font: Font,
    text_color: Color,
    justify: Justify,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl Label {
    /// Create a new label. Labels don't take focus.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            font: Font::default(),
            text_color: Color::BLACK,
            justify: Justify::Left,
            text_changed: Signal::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text.clone();
            self.base.update();
            self.text_changed.emit(text);
        }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the text color using builder pattern.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the horizontal justification using builder pattern.
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        // Rough estimate; the painter measures exactly at paint time.
        let width = self.text.chars().count() as f32 * self.font.size() * 0.6;
        Size::new(width, self.font.line_height())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.text.is_empty() {
            return;
        }
        let text_width = ctx.text_width(&self.text, &self.font);
        let x = self.justify.offset(ctx.width(), text_width);
        let y = ((ctx.height() - self.font.line_height()) / 2.0).max(0.0);
        ctx.draw_text(&self.text, Point::new(x, y), &self.font, self.text_color);
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label").field("text", &self.text).finish()
    }
}

static_assertions::assert_impl_all!(Label: Send, Sync);
