//! Error Collection
//!
//! Errors filed by category, in the order they were added.

use std::collections::HashMap;
use std::error::Error;

use tracing::debug;

/// Owned, opaque error value. Only its `Display` text is ever used.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Errors grouped by category name.
///
/// A category only exists once an error has been added to it. Category order
/// is not stored; anything that presents categories sorts a copy of the keys.
#[derive(Debug, Default)]
pub struct ErrorCollection {
    categories: HashMap<String, Vec<BoxError>>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `err` to the category, creating the category on its first error
    pub fn add_error(&mut self, category: impl Into<String>, err: impl Into<BoxError>) {
        let category = category.into();
        let err = err.into();
        debug!(category = %category, error = %err, "adding error");
        self.categories.entry(category).or_default().push(err);
    }

    /// True if any error has been added
    pub fn has_errors(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Total number of errors and number of categories, in that order
    pub fn count_errors(&self) -> (usize, usize) {
        let total = self.categories.values().map(Vec::len).sum();
        (total, self.categories.len())
    }

    /// Category names, in no particular order
    pub fn keys(&self) -> Vec<&str> {
        self.categories.keys().map(|s| s.as_str()).collect()
    }

    /// Errors filed under `category`, oldest first. Empty if the category is absent.
    pub fn errors(&self, category: &str) -> &[BoxError] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// One sentence describing the whole collection
    pub fn summary(&self) -> String {
        match self.count_errors() {
            (0, _) => "no errors were found".to_string(),
            (1, _) => "an error was found".to_string(),
            (total, 1) => format!("{total} errors were found"),
            (total, categories) => {
                format!("{total} errors were found in {categories} categories")
            }
        }
    }

    /// Header line for one category.
    ///
    /// Asking about an absent category gives a "no errors" header and leaves
    /// the collection untouched.
    pub fn category_summary(&self, category: &str) -> String {
        match self.errors(category).len() {
            0 => format!("{category} - no errors"),
            1 => format!("{category}:"),
            n => format!("{category} - {n} errors:"),
        }
    }

    /// Category names sorted lexicographically
    pub(crate) fn sorted_keys(&self) -> Vec<&str> {
        let mut keys = self.keys();
        keys.sort_unstable();
        keys
    }
}
