//! Core systems for Horizon Suggest.
//!
//! This crate provides the foundational pieces the widget crate is built on:
//!
//! - **Signal/Slot System**: Type-safe notification from widgets to listeners
//! - **Property System**: Change-detecting values with a version counter
//! - **Text Variables**: Shared, observable string values bound to entry widgets
//! - **Logging**: Stable `tracing` targets for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_suggest_core::Signal;
//!
//! let activated = Signal::<String>::new();
//!
//! let conn_id = activated.connect(|text| {
//!     println!("Selected: {}", text);
//! });
//!
//! activated.emit("Banana".to_string());
//! activated.disconnect(conn_id);
//! ```
//!
//! # Text Variable Example
//!
//! ```
//! use horizon_suggest_core::TextVariable;
//!
//! let var = TextVariable::new("Ap");
//! let seen = var.revision();
//!
//! var.set("Apple");
//! assert_eq!(var.get(), "Apple");
//! assert!(var.revision() > seen);
//! ```

pub mod logging;
pub mod property;
pub mod signal;
pub mod variable;

pub use property::Property;
pub use signal::{ConnectionId, Signal};
pub use variable::TextVariable;
