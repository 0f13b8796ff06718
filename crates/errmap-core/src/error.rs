use std::path::PathBuf;
use thiserror::Error;

use crate::collection::MatchError;

#[derive(Debug, Error)]
pub enum ErrMapError {
    #[error("Collection file not found: {path}")]
    CollectionNotFound { path: PathBuf },

    #[error("Failed to parse collection file {path}: {message}")]
    CollectionParse { path: PathBuf, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error(transparent)]
    Mismatch(#[from] MatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ErrMapError>;

impl ErrMapError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Mismatch(_) => 2,
            Self::CollectionNotFound { .. } => 3,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let mismatch = ErrMapError::from(MatchError::CategoryNamesDiffer {
            records: vec![r#""a" in this, not other"#.to_string()],
        });
        assert_eq!(mismatch.exit_code(), 2);

        let missing = ErrMapError::CollectionNotFound {
            path: PathBuf::from("nope.toml"),
        };
        assert_eq!(missing.exit_code(), 3);

        let key = ErrMapError::ConfigKeyNotFound {
            key: "report.colour".to_string(),
        };
        assert_eq!(key.exit_code(), 4);

        let io = ErrMapError::from(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_mismatch_is_transparent() {
        let err = ErrMapError::from(MatchError::ErrorDetailsDiffer {
            records: vec![r#""x": error counts differ: 1 != 2"#.to_string()],
        });
        assert_eq!(
            err.to_string(),
            r#"the error details differ: "x": error counts differ: 1 != 2"#
        );
    }
}
