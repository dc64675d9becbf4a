//! Mouse input conversion from winit.
//!
//! winit reports the cursor position and button presses as separate events.
//! [`MouseInputHandler`] remembers the last position so presses can be turned
//! into [`MousePressEvent`]s carrying window and screen coordinates.

use winit::event::{ElementState, MouseButton as WinitMouseButton};

use super::events::{KeyboardModifiers, MouseButton, MouseMoveEvent, MousePressEvent};
use crate::geometry::Point;

/// Converts a winit mouse button to a widget mouse button.
pub fn from_winit_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(4),
        WinitMouseButton::Forward => MouseButton::Other(5),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Tracks the cursor and builds mouse events in window and screen space.
#[derive(Debug, Default)]
pub struct MouseInputHandler {
    /// Last cursor position in window coordinates.
    position: Point,
    /// Screen position of the window's content area.
    content_origin: Point,
}

impl MouseInputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in window coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Record where the window's content area currently sits on screen.
    pub fn set_content_origin(&mut self, origin: Point) {
        self.content_origin = origin;
    }

    /// Map a window position to screen coordinates.
    pub fn to_global(&self, window_pos: Point) -> Point {
        window_pos.offset_by(self.content_origin)
    }

    /// Handle `CursorMoved`, returning the move event with local == window coordinates.
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> MouseMoveEvent {
        self.position = Point::new(x as f32, y as f32);
        MouseMoveEvent::new(self.position, self.position, self.to_global(self.position))
    }

    /// Handle `MouseInput`. Only presses produce an event.
    pub fn handle_mouse_input(
        &self,
        state: ElementState,
        button: WinitMouseButton,
        modifiers: KeyboardModifiers,
    ) -> Option<MousePressEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        Some(MousePressEvent::new(
            from_winit_mouse_button(button),
            self.position,
            self.position,
            self.to_global(self.position),
            modifiers,
        ))
    }
}
