//! Horizon Suggest: an autocomplete entry widget.
//!
//! The crate provides [`AutocompleteField`](widget::widgets::AutocompleteField),
//! a single-line entry that shows a popup list of matching candidates beneath
//! itself while the user types, together with the toolkit primitives it is
//! built from (entry, listbox, popup surface, label, push button) and the
//! plumbing to drive them from winit.
//!
//! # Example
//!
//! ```
//! use horizon_suggest::prelude::*;
//!
//! let mut field = AutocompleteField::new(
//!     vec!["Apple", "Banana", "Cherry", "Date"],
//!     FieldOptions::default(),
//! );
//! field.set_geometry(Rect::new(10.0, 10.0, 200.0, 28.0));
//! field.handle_window_configure(Point::new(100.0, 100.0), Size::new(400.0, 300.0));
//!
//! field.set_text("a");
//! assert!(field.is_popup_visible());
//! assert_eq!(field.matches(), ["Apple", "Banana", "Date"]);
//! ```

pub mod geometry;
pub mod prelude;
pub mod style;
pub mod widget;

pub use horizon_suggest_core as core;
