//! Widget-specific event types.
//!
//! Events are delivered to [`Widget::event`](super::Widget::event) wrapped in
//! [`WidgetEvent`]. A handler calls `accept()` on an event it consumed so the
//! host stops propagating it.

use crate::geometry::{Point, Size};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if a modifier that suppresses text insertion is held.
    pub fn is_command(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
    /// Any additional button.
    Other(u16),
}

/// Keyboard keys the widgets react to.
///
/// Printable keys arrive as [`Key::Character`]; the text they produce is
/// carried separately in [`KeyPressEvent::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,
    Shift,
    Control,
    Alt,
    Meta,
    Character(char),
    Unknown,
}

impl Key {
    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Key press event, sent when a key goes down (and on auto-repeat).
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    pub base: EventBase,
    pub key: Key,
    pub modifiers: KeyboardModifiers,
    /// The text this key press produces, empty for non-printable keys.
    pub text: String,
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }
}

/// Key release event, sent when a key goes up.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    pub base: EventBase,
    pub key: Key,
    pub modifiers: KeyboardModifiers,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    pub base: EventBase,
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Position in global screen coordinates.
    pub global_pos: Point,
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        global_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
            global_pos,
            modifiers,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub base: EventBase,
    pub local_pos: Point,
    pub window_pos: Point,
    pub global_pos: Point,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, window_pos: Point, global_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            window_pos,
            global_pos,
        }
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// The window was activated or deactivated.
    ActiveWindow,
    /// A popup took or returned focus.
    Popup,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus in event, sent when the widget gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Sent to every widget of a window when the window moves or resizes.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfigureEvent {
    pub base: EventBase,
    /// Screen position of the window's content area.
    pub content_origin: Point,
    /// Size of the window's content area.
    pub content_size: Size,
}

impl WindowConfigureEvent {
    /// Create a new configure event.
    pub fn new(content_origin: Point, content_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            content_origin,
            content_size,
        }
    }
}

/// A type-erased widget event.
#[derive(Debug)]
pub enum WidgetEvent {
    KeyPress(KeyPressEvent),
    KeyRelease(KeyReleaseEvent),
    MousePress(MousePressEvent),
    MouseMove(MouseMoveEvent),
    FocusIn(FocusInEvent),
    FocusOut(FocusOutEvent),
    WindowConfigure(WindowConfigureEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::WindowConfigure(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
            Self::MousePress(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::WindowConfigure(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_through_wrapper() {
        let mut event =
            WidgetEvent::KeyRelease(KeyReleaseEvent::new(Key::Escape, KeyboardModifiers::NONE));
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_modifiers() {
        assert!(!KeyboardModifiers::NONE.any());
        assert!(KeyboardModifiers::SHIFT.any());
        assert!(!KeyboardModifiers::SHIFT.is_command());
        assert!(KeyboardModifiers::CTRL.is_command());
        assert!(Key::Shift.is_modifier());
        assert!(!Key::Character('a').is_modifier());
    }
}
