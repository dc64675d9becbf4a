//! Widget implementations.
//!
//! - [`Entry`]: single-line text input bound to a `TextVariable`
//! - [`ListBox`]: vertical list of text rows
//! - [`Popup`]: top-level surface in screen coordinates
//! - [`Label`], [`PushButton`]: plain display and click widgets
//! - [`AutocompleteField`]: entry with a popup of matching candidates

mod autocomplete;
mod entry;
mod label;
mod list_box;
mod popup;
mod push_button;

pub use autocomplete::{AutocompleteField, FieldOptions};
pub use entry::Entry;
pub use label::Label;
pub use list_box::{ListBox, ROW_PADDING};
pub use popup::{BORDER_WIDTH, Popup};
pub use push_button::PushButton;
