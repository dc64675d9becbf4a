//! Core widget trait definitions.
//!
//! - [`Widget`] - Base trait for all UI elements
//! - [`Painter`] - The drawing backend a host supplies
//! - [`PaintContext`] - Painter wrapper passed to [`Widget::paint`], translating
//!   widget-local coordinates to surface coordinates

use crate::geometry::{Point, Rect, Size};
use crate::style::{Color, Font};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// A drawing backend.
///
/// All coordinates are surface coordinates. The demo application implements
/// this over a CPU framebuffer; tests use a recording implementation.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);

    /// Measure the advance width of a single line of text.
    fn text_width(&mut self, text: &str, font: &Font) -> f32;
}

/// Context provided during widget painting.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    /// Offset added to widget-local coordinates.
    origin: Point,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
    show_focus: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a context painting a widget whose top-left is at `origin` on the surface.
    pub fn new(painter: &'a mut dyn Painter, origin: Point, size: Size) -> Self {
        Self {
            painter,
            origin,
            widget_rect: Rect::from_origin_size(Point::ZERO, size),
            show_focus: false,
        }
    }

    /// Set whether to show a focus indicator (builder pattern).
    #[inline]
    pub fn with_show_focus(mut self, show_focus: bool) -> Self {
        self.show_focus = show_focus;
        self
    }

    #[inline]
    pub fn should_show_focus(&self) -> bool {
        self.show_focus
    }

    /// The surface position of the widget's top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Direct access to the painter, in surface coordinates.
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter.fill_rect(rect.offset(self.origin.x, self.origin.y), color);
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.painter
            .stroke_rect(rect.offset(self.origin.x, self.origin.y), color, width);
    }

    pub fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        self.painter
            .draw_text(text, origin.offset_by(self.origin), font, color);
    }

    pub fn text_width(&mut self, text: &str, font: &Font) -> f32 {
        self.painter.text_width(text, font)
    }

    /// Draw the standard 2px focus outline inset into the widget bounds.
    pub fn draw_focus_indicator(&mut self, inset: f32) {
        let focus_color = Color::from_rgb8(0, 120, 215);
        let rect = self.widget_rect.deflate(inset);
        self.stroke_rect(rect, focus_color, 2.0);
    }
}

/// The core trait for all widgets.
///
/// Implementors provide access to their [`WidgetBase`], a preferred size and
/// painting. Event handling defaults to ignoring everything.
pub trait Widget {
    fn widget_base(&self) -> &WidgetBase;

    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's preferred size for layout.
    fn size_hint(&self) -> Size;

    /// Paint the widget. Coordinates passed to `ctx` are widget-local.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event. Returns `true` if the widget handled it.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{PaintOp, RecordingPainter};
    use super::*;

    #[test]
    fn test_paint_context_translates() {
        let mut painter = RecordingPainter::default();
        {
            let mut ctx =
                PaintContext::new(&mut painter, Point::new(10.0, 20.0), Size::new(50.0, 30.0));
            assert_eq!(ctx.rect(), Rect::new(0.0, 0.0, 50.0, 30.0));
            ctx.fill_rect(Rect::new(1.0, 1.0, 5.0, 5.0), Color::BLACK);
            ctx.draw_text("hi", Point::new(2.0, 3.0), &Font::default(), Color::WHITE);
        }
        assert_eq!(
            painter.ops,
            vec![
                PaintOp::Fill(Rect::new(11.0, 21.0, 5.0, 5.0), Color::BLACK),
                PaintOp::Text("hi".to_string(), Point::new(12.0, 23.0), Color::WHITE),
            ]
        );
    }
}
