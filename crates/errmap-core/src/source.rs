//! Collection files
//!
//! A collection file is TOML whose top-level keys are category names and
//! whose values are arrays of error messages:
//!
//! ```toml
//! tiger = ["cat too scary", "still too scary"]
//! tigger = ["not a real cat"]
//! ```

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::collection::ErrorCollection;
use crate::error::{ErrMapError, Result};

/// Load a collection file
pub fn load_collection(path: &Path) -> Result<ErrorCollection> {
    if !path.exists() {
        return Err(ErrMapError::CollectionNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_collection(&content).map_err(|message| ErrMapError::CollectionParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse collection file content. Categories with no messages add nothing.
pub fn parse_collection(content: &str) -> std::result::Result<ErrorCollection, String> {
    let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;

    let mut errs = ErrorCollection::new();
    for (category, value) in table {
        let messages = value
            .as_array()
            .ok_or_else(|| format!("category {category:?} is not an array of messages"))?;

        for (i, message) in messages.iter().enumerate() {
            let message = message
                .as_str()
                .ok_or_else(|| format!("{category:?}[{i}] is not a string"))?;
            errs.add_error(category.as_str(), message);
        }
        trace!(category = %category, count = messages.len(), "loaded category");
    }
    Ok(errs)
}
