//! Property system for Horizon Suggest.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Every effective change bumps a monotonically increasing
//! version, which lets an owner detect writes it did not make itself.
//!
//! # Example
//!
//! ```
//! use horizon_suggest_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&self, new_value: i32) {
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed. The caller emits the associated notification
/// signal when it returns `true`.
///
/// # Example
///
/// ```
/// use horizon_suggest_core::Property;
///
/// let prop = Property::new(42);
/// assert!(!prop.set(42));
/// assert!(prop.set(100));
/// assert_eq!(prop.get(), 100);
/// assert_eq!(prop.version(), 1);
/// ```
pub struct Property<T> {
    value: RwLock<T>,
    version: AtomicU64,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            version: AtomicU64::new(0),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// The number of effective changes made since construction.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            self.version.fetch_add(1, Ordering::AcqRel);
            tracing::trace!(
                target: targets::PROPERTY,
                version = self.version(),
                "property changed"
            );
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .field("version", &self.version())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(String::from("a"));
        assert!(!prop.set("a".to_string()));
        assert_eq!(prop.version(), 0);

        assert!(prop.set("b".to_string()));
        assert_eq!(prop.get(), "b");
        assert_eq!(prop.version(), 1);
    }

    #[test]
    fn test_with_does_not_bump_version() {
        let prop = Property::new(vec![1, 2, 3]);
        assert_eq!(prop.with(|v| v.len()), 3);
        assert_eq!(prop.version(), 0);
    }
}
