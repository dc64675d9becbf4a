//! Shared text values for entry widgets.
//!
//! A [`TextVariable`] is a cloneable handle to one observable string. An entry
//! widget edits it, the application may read or write it at any time through
//! its own clone, and listeners connect to [`TextVariable::changed`].
//!
//! Widgets that derive state from the text remember the [`revision`] they last
//! processed and compare it on every event, so writes made outside the widget
//! are picked up the same way as keystrokes.
//!
//! [`revision`]: TextVariable::revision

use std::fmt;
use std::sync::Arc;

use crate::logging::targets;
use crate::property::Property;
use crate::signal::Signal;

struct VariableInner {
    value: Property<String>,
    changed: Signal<String>,
}

/// A shared, observable string value.
///
/// Clones share the same value; a write through any clone is visible to all.
#[derive(Clone)]
pub struct TextVariable {
    inner: Arc<VariableInner>,
}

impl TextVariable {
    /// Create a variable holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(VariableInner {
                value: Property::new(value.into()),
                changed: Signal::new(),
            }),
        }
    }

    /// Get a copy of the current text.
    pub fn get(&self) -> String {
        self.inner.value.get()
    }

    /// Access the current text without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        self.inner.value.with(|s| f(s))
    }

    /// Replace the text.
    ///
    /// Returns `true` and emits [`changed`](Self::changed) if the text differs
    /// from the current value.
    pub fn set(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.inner.value.set(value.clone()) {
            tracing::trace!(target: targets::VARIABLE, len = value.len(), "text variable written");
            self.inner.changed.emit(value);
            true
        } else {
            false
        }
    }

    /// Apply an in-place edit to the text.
    ///
    /// The edit counts as a write only if the resulting text differs.
    pub fn update(&self, edit: impl FnOnce(&mut String)) -> bool {
        let mut text = self.get();
        edit(&mut text);
        self.set(text)
    }

    /// A counter that increases with every effective write.
    pub fn revision(&self) -> u64 {
        self.inner.value.version()
    }

    /// Signal emitted with the new text after every effective write.
    pub fn changed(&self) -> &Signal<String> {
        &self.inner.changed
    }

    /// Check whether two handles refer to the same value.
    pub fn ptr_eq(&self, other: &TextVariable) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for TextVariable {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for TextVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextVariable")
            .field("value", &self.get())
            .field("revision", &self.revision())
            .finish()
    }
}

static_assertions::assert_impl_all!(TextVariable: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_clones_share_value() {
        let var = TextVariable::new("x");
        let other = var.clone();
        other.set("y");
        assert_eq!(var.get(), "y");
        assert!(var.ptr_eq(&other));
        assert!(!var.ptr_eq(&TextVariable::new("y")));
    }

    #[test]
    fn test_changed_emitted_only_on_effective_write() {
        let var = TextVariable::default();
        let writes = Arc::new(Mutex::new(Vec::new()));

        let writes_clone = writes.clone();
        var.changed().connect(move |text| {
            writes_clone.lock().push(text.clone());
        });

        assert!(var.set("a"));
        assert!(!var.set("a"));
        assert!(var.update(|s| s.push('b')));

        assert_eq!(*writes.lock(), vec!["a".to_string(), "ab".to_string()]);
        assert_eq!(var.revision(), 2);
    }

    #[test]
    fn test_with_borrows_text() {
        let var = TextVariable::new("Cherry");
        assert_eq!(var.with(|s| s.len()), 6);
    }
}
