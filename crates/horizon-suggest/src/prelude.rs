//! Prelude module for Horizon Suggest.
//!
//! ```ignore
//! use horizon_suggest::prelude::*;
//! ```

// ============================================================================
// Signal/Slot, Property and Variable
// ============================================================================

pub use horizon_suggest_core::{ConnectionId, Property, Signal, TextVariable};

// ============================================================================
// Geometry and Style
// ============================================================================

pub use crate::geometry::{Point, Rect, Size};
pub use crate::style::{Color, Font, FontFamily, Justify, TextStyle};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::completer::{CandidateList, Highlight};
pub use crate::widget::layout::GridLayout;
pub use crate::widget::{
    FocusPolicy, FocusReason, Key, KeyboardInputHandler, KeyboardModifiers, MouseInputHandler,
    PaintContext, Painter, Widget, WidgetBase, WidgetEvent,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    AutocompleteField, Entry, FieldOptions, Label, ListBox, Popup, PushButton,
};
