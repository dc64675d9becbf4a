//! Candidate filtering and highlight navigation.
//!
//! [`CandidateList`] holds the fixed set of strings an
//! [`AutocompleteField`](super::widgets::AutocompleteField) suggests from, and
//! computes the match list for a query. [`Highlight`] is the keyboard
//! highlight over that match list, with wraparound navigation that never goes
//! out of bounds.
//!
//! # Example
//!
//! ```
//! use horizon_suggest::widget::completer::{CandidateList, Highlight};
//!
//! let candidates = CandidateList::new(["Apple", "Banana", "Cherry", "Date"]);
//! let matches = candidates.filter("a");
//! assert_eq!(matches, ["Apple", "Banana", "Date"]);
//!
//! let mut highlight = Highlight::new();
//! highlight.move_up(matches.len());
//! assert_eq!(highlight.index(), Some(2));
//! ```

use std::sync::Arc;

use horizon_suggest_core::logging::targets;

// ============================================================================
// Candidate List
// ============================================================================

/// An immutable, ordered set of completion candidates.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    items: Arc<[String]>,
    /// Lowercase forms, computed once.
    folded: Arc<[String]>,
}

impl CandidateList {
    /// Create a candidate list, keeping the given order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let folded: Vec<String> = items.iter().map(|s| s.to_lowercase()).collect();
        Self {
            items: items.into(),
            folded: folded.into(),
        }
    }

    /// The candidates in their original order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute the match list for `query`.
    ///
    /// A candidate matches when its lowercase form contains the lowercase
    /// query. Matches keep candidate order. An empty query matches nothing.
    pub fn filter(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let matches: Vec<String> = self
            .items
            .iter()
            .zip(self.folded.iter())
            .filter(|(_, folded)| folded.contains(needle.as_str()))
            .map(|(item, _)| item.clone())
            .collect();

        tracing::trace!(
            target: targets::COMPLETER,
            query,
            matched = matches.len(),
            "filtered candidates"
        );
        matches
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for CandidateList {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for CandidateList {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items)
    }
}

// ============================================================================
// Highlight
// ============================================================================

/// The keyboard highlight over a match list.
///
/// Navigation takes the current match count, so a stale index is corrected
/// rather than trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    index: Option<usize>,
}

impl Highlight {
    /// A highlight with no row selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted row, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The highlighted row, if it is valid for a list of `len` rows.
    pub fn valid_index(&self, len: usize) -> Option<usize> {
        self.index.filter(|&i| i < len)
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Highlight `index`, or clear if it is out of range for `len` rows.
    pub fn set(&mut self, index: usize, len: usize) {
        self.index = (index < len).then_some(index);
    }

    /// Move to the next row, wrapping to row 0 past the end.
    ///
    /// With no highlight, row 0 is highlighted. Returns the new index.
    pub fn move_down(&mut self, len: usize) -> Option<usize> {
        self.index = if len == 0 {
            None
        } else {
            match self.index {
                Some(i) if i + 1 < len => Some(i + 1),
                Some(_) | None => Some(0),
            }
        };
        self.index
    }

    /// Move to the previous row, wrapping to the last row before row 0.
    ///
    /// With no highlight, the last row is highlighted. Returns the new index.
    pub fn move_up(&mut self, len: usize) -> Option<usize> {
        self.index = if len == 0 {
            None
        } else {
            match self.index {
                Some(i) if i > 0 && i < len => Some(i - 1),
                Some(_) | None => Some(len - 1),
            }
        };
        self.index
    }
}
