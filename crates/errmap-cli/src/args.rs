use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "errmap")]
#[command(about = "Report and compare errors grouped by category")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.errmap)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the wrapped report for a collection file
    Report {
        /// Collection file (TOML: category = ["message", ...])
        file: PathBuf,

        /// Name shown in front of the summary line
        #[arg(short, long)]
        name: Option<String>,

        /// Maximum line width (overrides report.width)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Print the one-line summary, and optionally category headers
    Summary {
        /// Collection file
        file: PathBuf,

        /// Also print the header of this category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
    },

    /// Count errors and categories
    Count {
        /// Collection file
        file: PathBuf,
    },

    /// Compare two collection files
    Diff {
        /// Collection treated as "this"
        this: PathBuf,

        /// Collection treated as "other"
        other: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., report.width)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., report.width)
        key: String,

        /// Value to set (e.g., 100)
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
