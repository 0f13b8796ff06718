pub mod collection;
pub mod config;
pub mod error;
pub mod source;
pub mod wrap;

pub use collection::{BoxError, ErrorCollection, MatchError, CATEGORY_INDENT, ERROR_INDENT};
pub use config::{Config, ReportConfig};
pub use error::{ErrMapError, Result};
pub use source::{load_collection, parse_collection};
pub use wrap::{LineWrapper, TextWrapper, DEFAULT_WIDTH, MIN_WIDTH};
