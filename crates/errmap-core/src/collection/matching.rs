use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use super::store::{BoxError, ErrorCollection};

/// Why two collections are not the same.
///
/// Records are sorted, so the message is the same however the underlying maps
/// happen to iterate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Some categories exist in only one of the collections
    #[error("the category names differ:\n\t{}", .records.join("\n\t"))]
    CategoryNamesDiffer { records: Vec<String> },

    /// Same categories, but the errors filed under them differ
    #[error("the error details differ: {}", .records.join(", "))]
    ErrorDetailsDiffer { records: Vec<String> },
}

impl MatchError {
    pub fn records(&self) -> &[String] {
        match self {
            Self::CategoryNamesDiffer { records } | Self::ErrorDetailsDiffer { records } => records,
        }
    }
}

impl ErrorCollection {
    /// Compare with `other` category by category and error by error.
    ///
    /// Category names are checked first; if they differ the errors themselves
    /// are not compared. Errors are equal when their messages are equal.
    pub fn matches(&self, other: &ErrorCollection) -> Result<(), MatchError> {
        let ours: HashSet<&str> = self.keys().into_iter().collect();
        let theirs: HashSet<&str> = other.keys().into_iter().collect();

        let mut records: Vec<String> = ours
            .difference(&theirs)
            .map(|cat| format!("{cat:?} in this, not other"))
            .chain(
                theirs
                    .difference(&ours)
                    .map(|cat| format!("{cat:?} in other, not this")),
            )
            .collect();
        if !records.is_empty() {
            records.sort();
            debug!(count = records.len(), "category names differ");
            return Err(MatchError::CategoryNamesDiffer { records });
        }

        let mut records: Vec<String> = self
            .sorted_keys()
            .into_iter()
            .flat_map(|cat| error_list_diffs(cat, self.errors(cat), other.errors(cat)))
            .collect();
        if !records.is_empty() {
            records.sort();
            debug!(count = records.len(), "error details differ");
            return Err(MatchError::ErrorDetailsDiffer { records });
        }

        Ok(())
    }
}

/// Differences between two error lists filed under the category `name`
fn error_list_diffs(name: &str, ours: &[BoxError], theirs: &[BoxError]) -> Vec<String> {
    let prefix = if name.is_empty() {
        String::new()
    } else {
        format!("{name:?}: ")
    };

    if ours.len() != theirs.len() {
        return vec![format!(
            "{prefix}error counts differ: {} != {}",
            ours.len(),
            theirs.len()
        )];
    }

    ours.iter()
        .zip(theirs)
        .enumerate()
        .filter_map(|(i, (a, b))| {
            let (a, b) = (a.to_string(), b.to_string());
            (a != b).then(|| format!("{prefix}error[{i}]: {a:?} != {b:?}"))
        })
        .collect()
}
