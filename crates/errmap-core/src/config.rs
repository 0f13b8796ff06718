use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ErrMapError, Result};
use crate::wrap::{TextWrapper, DEFAULT_WIDTH, MIN_WIDTH};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# errmap configuration file
# Location: ~/.errmap/config.toml

[report]
# Maximum line width of rendered reports (minimum 20)
# Default: 80
width = 80

# Name printed in front of the summary line when --name is not given
# Default: "" (no prefix)
name = ""
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum line width
    #[serde(default = "default_width")]
    pub width: usize,

    /// Default report name
    #[serde(default)]
    pub name: String,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            name: String::new(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| ErrMapError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        if config.report.width < MIN_WIDTH {
            return Err(ErrMapError::ConfigParse {
                path,
                message: format!("report.width must be at least {MIN_WIDTH}"),
            });
        }

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "report.width" => Some(self.report.width.to_string()),
            "report.name" => Some(format!("{:?}", self.report.name)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "report.width" => {
                self.report.width = parse_width(value)?;
                Ok(())
            }
            "report.name" => {
                self.report.name = value.trim().trim_matches('"').to_string();
                Ok(())
            }
            _ => Err(ErrMapError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["report.width", "report.name"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Wrapper for rendering reports at the configured width
    pub fn wrapper(&self) -> TextWrapper {
        TextWrapper::new(self.report.width)
    }
}

fn parse_width(value: &str) -> Result<usize> {
    let invalid = || ErrMapError::InvalidConfigValue {
        key: "report.width".to_string(),
        value: value.to_string(),
    };

    let width: usize = value.trim().parse().map_err(|_| invalid())?;
    if width < MIN_WIDTH {
        return Err(invalid());
    }
    Ok(width)
}
