//! # Collection Module
//!
//! Collects errors under caller-chosen categories so that a program can keep
//! going after a failure and report everything at the end, grouped by cause.
//!
//! ## Module layout
//!
//! - `store`: the [`ErrorCollection`] value, counting and summaries
//! - `report`: rendering of the wrapped, numbered report
//! - `matching`: structural comparison of two collections
//!
//! ## Example
//!
//! ```rust
//! use errmap_core::collection::ErrorCollection;
//!
//! let mut errs = ErrorCollection::new();
//! errs.add_error("tiger", "cat too scary");
//! errs.add_error("tiger", "still too scary");
//! errs.add_error("tigger", "not a real cat");
//!
//! assert_eq!(errs.summary(), "3 errors were found in 2 categories");
//! assert_eq!(errs.category_summary("tiger"), "tiger - 2 errors:");
//!
//! let mut out = Vec::new();
//! errs.report(&mut out, "check").unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "check: 3 errors were found in 2 categories\n\
//!      \x20     tiger - 2 errors:\n\
//!      \x20           1 : cat too scary\n\
//!      \x20           2 : still too scary\n\
//!      \x20     tigger:\n\
//!      \x20           not a real cat\n"
//! );
//! ```

mod matching;
mod report;
mod store;

pub use matching::MatchError;
pub use report::{CATEGORY_INDENT, ERROR_INDENT};
pub use store::{BoxError, ErrorCollection};
