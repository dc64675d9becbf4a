//! Keyboard input conversion from winit.
//!
//! [`KeyboardInputHandler`] tracks modifier state between events and turns
//! winit key events into [`WidgetEvent::KeyPress`] / [`WidgetEvent::KeyRelease`].
//!
//! ```ignore
//! let mut handler = KeyboardInputHandler::new();
//!
//! // WindowEvent::ModifiersChanged(modifiers)
//! handler.update_modifiers(modifiers.state());
//!
//! // WindowEvent::KeyboardInput { event, .. }
//! let widget_event = handler.handle_key(
//!     event.state,
//!     &event.logical_key,
//!     event.text.as_deref(),
//!     event.repeat,
//! );
//! ```

use winit::event::ElementState;
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};

use super::events::{Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, WidgetEvent};

/// Converts a winit logical key to a widget key.
pub fn from_winit_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => from_winit_named_key(named),
        WinitKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Character(c),
                _ => Key::Unknown,
            }
        }
        WinitKey::Unidentified(_) | WinitKey::Dead(_) => Key::Unknown,
    }
}

fn from_winit_named_key(key: &NamedKey) -> Key {
    match key {
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::Escape => Key::Escape,
        NamedKey::Space => Key::Space,
        NamedKey::Shift => Key::Shift,
        NamedKey::Control => Key::Control,
        NamedKey::Alt => Key::Alt,
        NamedKey::Super | NamedKey::Meta => Key::Meta,
        _ => Key::Unknown,
    }
}

/// Converts winit modifier state to widget modifiers.
pub fn from_winit_modifiers(state: ModifiersState) -> KeyboardModifiers {
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Handler for keyboard input that maintains modifier state.
#[derive(Debug, Default)]
pub struct KeyboardInputHandler {
    modifiers: KeyboardModifiers,
}

impl KeyboardInputHandler {
    /// Creates a new keyboard input handler with no modifiers pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current modifier key state.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Updates the modifier state from a `ModifiersChanged` event.
    pub fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = from_winit_modifiers(state);
    }

    /// Converts one winit key event into a widget event.
    ///
    /// Text is only attached to presses, and is dropped when a command
    /// modifier is held so shortcuts never insert characters.
    pub fn handle_key(
        &self,
        state: ElementState,
        logical_key: &WinitKey,
        text: Option<&str>,
        is_repeat: bool,
    ) -> WidgetEvent {
        let key = from_winit_key(logical_key);
        match state {
            ElementState::Pressed => {
                let text = if self.modifiers.is_command() {
                    ""
                } else {
                    text.unwrap_or_default()
                };
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                WidgetEvent::KeyPress(KeyPressEvent::new(key, self.modifiers, text, is_repeat))
            }
            ElementState::Released => {
                WidgetEvent::KeyRelease(KeyReleaseEvent::new(key, self.modifiers))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(from_winit_key(&WinitKey::Named(NamedKey::ArrowDown)), Key::ArrowDown);
        assert_eq!(from_winit_key(&WinitKey::Named(NamedKey::Escape)), Key::Escape);
        assert_eq!(from_winit_key(&WinitKey::Named(NamedKey::F1)), Key::Unknown);
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(from_winit_key(&WinitKey::Character("a".into())), Key::Character('a'));
        assert_eq!(from_winit_key(&WinitKey::Character("ab".into())), Key::Unknown);
    }

    #[test]
    fn test_press_carries_text() {
        let handler = KeyboardInputHandler::new();
        let event = handler.handle_key(
            ElementState::Pressed,
            &WinitKey::Character("x".into()),
            Some("x"),
            false,
        );
        match event {
            WidgetEvent::KeyPress(press) => {
                assert_eq!(press.key, Key::Character('x'));
                assert_eq!(press.text, "x");
            }
            other => panic!("expected key press, got {other:?}"),
        }
    }

    #[test]
    fn test_control_suppresses_text() {
        let mut handler = KeyboardInputHandler::new();
        handler.update_modifiers(ModifiersState::CONTROL);
        assert!(handler.modifiers().control);

        let event = handler.handle_key(
            ElementState::Pressed,
            &WinitKey::Character("a".into()),
            Some("a"),
            false,
        );
        match event {
            WidgetEvent::KeyPress(press) => assert!(press.text.is_empty()),
            other => panic!("expected key press, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_text_is_stripped() {
        let handler = KeyboardInputHandler::new();
        let event = handler.handle_key(
            ElementState::Pressed,
            &WinitKey::Named(NamedKey::Enter),
            Some("\r"),
            false,
        );
        match event {
            WidgetEvent::KeyPress(press) => {
                assert_eq!(press.key, Key::Enter);
                assert!(press.text.is_empty());
            }
            other => panic!("expected key press, got {other:?}"),
        }
    }

    #[test]
    fn test_release() {
        let handler = KeyboardInputHandler::new();
        let up = WinitKey::Named(NamedKey::ArrowUp);
        let event = handler.handle_key(ElementState::Released, &up, None, false);
        assert!(matches!(event, WidgetEvent::KeyRelease(ref r) if r.key == Key::ArrowUp));
    }
}
