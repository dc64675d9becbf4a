//! Widget system for Horizon Suggest.
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common state shared by every widget
//! - [`WidgetEvent`]: input and window events with accept/ignore semantics
//! - [`KeyboardInputHandler`] and [`MouseInputHandler`]: winit conversion
//! - [`Painter`] and [`PaintContext`]: the drawing seam a host implements
//!
//! Widgets own their state and are driven directly by whoever owns them.
//! A host converts platform input with the handlers, passes the resulting
//! events to [`Widget::event`], and paints through its own [`Painter`].

mod base;
pub mod completer;
mod events;
mod keyboard;
pub mod layout;
mod mouse;
mod traits;
pub mod widgets;

pub use base::{FocusPolicy, WidgetBase};
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyReleaseEvent,
    KeyboardModifiers, MouseButton, MouseMoveEvent, MousePressEvent, WidgetEvent,
    WindowConfigureEvent,
};
pub use keyboard::{KeyboardInputHandler, from_winit_key, from_winit_modifiers};
pub use mouse::{MouseInputHandler, from_winit_mouse_button};
pub use traits::{PaintContext, Painter, Widget};
