//! The demo's widget tree: an autocomplete field above a label and a button.
//!
//! `Scene` is independent of the platform window. It receives toolkit events
//! already converted from winit, routes them to the focused widget and the
//! field's global click handling, and paints through any [`Painter`].

use horizon_suggest::core::logging::targets;
use horizon_suggest::prelude::*;
use horizon_suggest::widget::{
    FocusInEvent, FocusOutEvent, KeyPressEvent, MouseMoveEvent, MousePressEvent,
    WindowConfigureEvent,
};

use crate::config::DemoConfig;
use crate::error::ConfigResult;

/// Text of the label next to the button.
pub const LABEL_TEXT: &str = "Other Widget:";
/// Text of the button.
pub const BUTTON_TEXT: &str = "Click Me";

const WINDOW_BACKGROUND: Color = Color::from_rgb(0.94, 0.94, 0.94);
const FRAME_MARGIN: f32 = 8.0;

/// Identifies a widget of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneItem {
    Field,
    Label,
    Button,
}

/// The demo window's widgets and focus.
pub struct Scene {
    field: AutocompleteField,
    label: Label,
    button: PushButton,
    layout: GridLayout<SceneItem>,
    focus: Option<SceneItem>,
    content_size: Size,
}

impl Scene {
    /// Build the scene from the config.
    pub fn new(config: &DemoConfig) -> ConfigResult<Self> {
        let style = config.text_style()?;
        let mut options = FieldOptions::new().with_style(style);
        if !config.field.initial_value.is_empty() {
            options = options.with_initial_value(config.field.initial_value.clone());
        }
        let field = AutocompleteField::new(config.field.candidates.clone(), options);

        let label = Label::new(LABEL_TEXT);
        let button = PushButton::new(BUTTON_TEXT);
        button.clicked.connect(|()| {
            tracing::info!(target: targets::DEMO, "button clicked");
        });
        field.activated.connect(|text| {
            tracing::info!(target: targets::DEMO, value = %text, "suggestion chosen");
        });

        let mut layout = GridLayout::new();
        layout.set_margin(FRAME_MARGIN);
        layout.add_widget_at(SceneItem::Field, 0, 0);
        layout.add_widget_at(SceneItem::Label, 1, 0);
        layout.add_widget_at(SceneItem::Button, 1, 1);

        let mut scene = Self {
            field,
            label,
            button,
            layout,
            focus: None,
            content_size: Size::new(config.window.width as f32, config.window.height as f32),
        };
        scene.relayout();
        Ok(scene)
    }

    pub fn field(&self) -> &AutocompleteField {
        &self.field
    }

    pub fn button(&self) -> &PushButton {
        &self.button
    }

    pub fn focus(&self) -> Option<SceneItem> {
        self.focus
    }

    fn widget_mut(&mut self, item: SceneItem) -> &mut dyn Widget {
        match item {
            SceneItem::Field => &mut self.field,
            SceneItem::Label => &mut self.label,
            SceneItem::Button => &mut self.button,
        }
    }

    fn widget(&self, item: SceneItem) -> &dyn Widget {
        match item {
            SceneItem::Field => &self.field,
            SceneItem::Label => &self.label,
            SceneItem::Button => &self.button,
        }
    }

    fn relayout(&mut self) {
        let placed = self.layout.calculate(Point::ZERO, |item| match item {
            SceneItem::Field => self.field.size_hint(),
            SceneItem::Label => self.label.size_hint(),
            SceneItem::Button => self.button.size_hint(),
        });
        for (item, rect) in placed {
            self.widget_mut(item).set_geometry(rect);
        }
    }

    // =========================================================================
    // Window events
    // =========================================================================

    /// The window moved or resized. `content_origin` is in screen coordinates.
    pub fn configure(&mut self, content_origin: Point, content_size: Size) {
        self.content_size = content_size;
        self.relayout();
        let mut event =
            WidgetEvent::WindowConfigure(WindowConfigureEvent::new(content_origin, content_size));
        self.field.event(&mut event);
    }

    /// The window gained or lost keyboard focus.
    pub fn window_focus(&mut self, focused: bool) {
        if focused {
            let target = self.focus.unwrap_or(SceneItem::Field);
            self.focus = None;
            self.set_focus(Some(target), FocusReason::ActiveWindow);
        } else if let Some(item) = self.focus {
            let mut event = WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::ActiveWindow));
            self.widget_mut(item).event(&mut event);
        }
    }

    fn set_focus(&mut self, target: Option<SceneItem>, reason: FocusReason) {
        if self.focus == target {
            return;
        }
        if let Some(old) = self.focus.take() {
            let mut event = WidgetEvent::FocusOut(FocusOutEvent::new(reason));
            self.widget_mut(old).event(&mut event);
        }
        if let Some(new) = target {
            let mut event = WidgetEvent::FocusIn(FocusInEvent::new(reason));
            self.widget_mut(new).event(&mut event);
        }
        self.focus = target;
        tracing::trace!(target: targets::DEMO, focus = ?target, "focus changed");
    }

    /// Move focus to the next focusable widget.
    fn focus_next(&mut self) {
        let order = [SceneItem::Field, SceneItem::Button];
        let next = match self.focus.and_then(|f| order.iter().position(|&o| o == f)) {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        };
        if self.widget(next).is_focusable() {
            self.set_focus(Some(next), FocusReason::Tab);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a key press or release.
    pub fn key(&mut self, mut event: WidgetEvent) {
        if let WidgetEvent::KeyPress(KeyPressEvent { key: Key::Tab, .. }) = event {
            self.focus_next();
            return;
        }
        match self.focus {
            Some(item) => {
                self.widget_mut(item).event(&mut event);
            }
            None => {
                // Keep external writes to the field's value flowing.
                self.field.sync();
            }
        }
    }

    /// Route a primary or secondary mouse press, in window coordinates.
    pub fn mouse_press(&mut self, event: MousePressEvent) {
        // Every click goes to the field first so it can close its popup.
        let mut field_event = WidgetEvent::MousePress(event);
        if self.field.event(&mut field_event) {
            self.set_focus(Some(SceneItem::Field), FocusReason::Mouse);
            return;
        }

        let button_rect = self.button.geometry();
        if self.button.widget_base().contains_window_point(event.window_pos) {
            let mut button_event = WidgetEvent::MousePress(MousePressEvent {
                local_pos: Point::new(
                    event.window_pos.x - button_rect.left(),
                    event.window_pos.y - button_rect.top(),
                ),
                ..event
            });
            if self.button.event(&mut button_event) {
                self.set_focus(Some(SceneItem::Button), FocusReason::Mouse);
            }
        }
    }

    pub fn mouse_move(&mut self, event: MouseMoveEvent) {
        let mut event = WidgetEvent::MouseMove(event);
        self.field.event(&mut event);
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Fields with a visible popup, back to front by stacking order.
    pub fn overlays(&self) -> Vec<&AutocompleteField> {
        let mut overlays: Vec<&AutocompleteField> =
            [&self.field].into_iter().filter(|f| f.is_popup_visible()).collect();
        overlays.sort_by_key(|f| f.popup().stacking_order());
        overlays
    }

    /// Paint the whole window, then the visible popups on top.
    pub fn paint(&mut self, painter: &mut dyn Painter) {
        self.field.sync();

        painter.fill_rect(
            Rect::from_origin_size(Point::ZERO, self.content_size),
            WINDOW_BACKGROUND,
        );
        for item in [SceneItem::Field, SceneItem::Label, SceneItem::Button] {
            let widget = self.widget(item);
            if !widget.is_visible() {
                continue;
            }
            let geometry = widget.geometry();
            let mut ctx = PaintContext::new(&mut *painter, geometry.origin, geometry.size)
                .with_show_focus(true);
            widget.paint(&mut ctx);
        }
        for field in self.overlays() {
            field.paint_popup(painter);
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("field", &self.field)
            .field("focus", &self.focus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_suggest::widget::{KeyReleaseEvent, MouseButton};

    struct NullPainter {
        texts: Vec<String>,
    }

    impl Painter for NullPainter {
        fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
        fn stroke_rect(&mut self, _rect: Rect, _color: Color, _width: f32) {}
        fn draw_text(&mut self, text: &str, _origin: Point, _font: &Font, _color: Color) {
            self.texts.push(text.to_string());
        }
        fn text_width(&mut self, text: &str, _font: &Font) -> f32 {
            text.len() as f32 * 7.0
        }
    }

    fn scene() -> Scene {
        let mut scene = Scene::new(&DemoConfig::default()).unwrap();
        scene.configure(Point::new(50.0, 60.0), Size::new(420.0, 240.0));
        scene.window_focus(true);
        scene
    }

    fn type_char(scene: &mut Scene, ch: char) {
        scene.key(WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Character(ch),
            KeyboardModifiers::NONE,
            ch.to_string(),
            false,
        )));
        scene.key(WidgetEvent::KeyRelease(KeyReleaseEvent::new(
            Key::Character(ch),
            KeyboardModifiers::NONE,
        )));
    }

    fn press_at(scene: &mut Scene, window_pos: Point) {
        scene.mouse_press(MousePressEvent::new(
            MouseButton::Left,
            window_pos,
            window_pos,
            window_pos.offset_by(Point::new(50.0, 60.0)),
            KeyboardModifiers::NONE,
        ));
    }

    #[test]
    fn test_layout_places_field_above_label_and_button() {
        let scene = scene();
        let field = scene.field().geometry();
        let button = scene.button().geometry();
        assert_eq!(field.top(), FRAME_MARGIN);
        assert!(button.top() >= field.bottom());
        assert!(button.left() >= field.right());
    }

    #[test]
    fn test_window_focus_goes_to_field() {
        let mut scene = scene();
        assert_eq!(scene.focus(), Some(SceneItem::Field));
        type_char(&mut scene, 'g');
        assert_eq!(scene.field().matches(), ["Grape"]);
        assert!(scene.field().is_popup_visible());
    }

    #[test]
    fn test_tab_moves_focus_and_hides_popup() {
        let mut scene = scene();
        type_char(&mut scene, 'a');
        scene.key(WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::Tab,
            KeyboardModifiers::NONE,
            "",
            false,
        )));
        assert_eq!(scene.focus(), Some(SceneItem::Button));
        assert!(!scene.field().is_popup_visible());
    }

    #[test]
    fn test_button_click_closes_popup_and_takes_focus() {
        let mut scene = scene();
        type_char(&mut scene, 'a');
        let center = {
            let rect = scene.button().geometry();
            Point::new(rect.left() + 5.0, rect.top() + 5.0)
        };
        press_at(&mut scene, center);
        assert!(!scene.field().is_popup_visible());
        assert_eq!(scene.focus(), Some(SceneItem::Button));
    }

    #[test]
    fn test_overlays_follow_popup_visibility() {
        let mut scene = scene();
        assert!(scene.overlays().is_empty());

        type_char(&mut scene, 'a');
        let overlays = scene.overlays();
        assert_eq!(overlays.len(), 1);
        assert!(overlays[0].popup().stacking_order() > 0);

        scene.key(WidgetEvent::KeyRelease(KeyReleaseEvent::new(
            Key::Escape,
            KeyboardModifiers::NONE,
        )));
        assert!(scene.overlays().is_empty());
    }

    #[test]
    fn test_paint_draws_popup_last() {
        let mut scene = scene();
        type_char(&mut scene, 'e');
        let mut painter = NullPainter { texts: Vec::new() };
        scene.paint(&mut painter);
        assert_eq!(painter.texts[..3], ["e", LABEL_TEXT, BUTTON_TEXT]);
        assert_eq!(
            painter.texts[painter.texts.len() - 1],
            scene.field().matches().last().cloned().unwrap()
        );
    }
}
