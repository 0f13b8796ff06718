use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use errmap_core::config::Config;
use errmap_core::{load_collection, ErrMapError, Result, TextWrapper, MIN_WIDTH};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

const LOG_ENV: &str = "ERRMAP_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    debug!(base_dir = %base_dir.display(), "resolved base directory");

    let result = match cli.command {
        Some(Commands::Report { file, name, width }) => {
            handle_report(&base_dir, &file, name, width)
        }
        Some(Commands::Summary { file, category }) => handle_summary(&file, &category),
        Some(Commands::Count { file }) => handle_count(&file),
        Some(Commands::Diff { this, other }) => handle_diff(&this, &other, cli.quiet),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("ERRMAP_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".errmap"))
        .unwrap_or_else(|| PathBuf::from(".errmap"))
}

fn handle_report(
    base_dir: &Path,
    file: &Path,
    name: Option<String>,
    width: Option<usize>,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let errs = load_collection(file)?;

    let wrapper = match width {
        Some(w) if w < MIN_WIDTH => {
            return Err(ErrMapError::InvalidConfigValue {
                key: "--width".to_string(),
                value: w.to_string(),
            });
        }
        Some(w) => TextWrapper::new(w),
        None => config.wrapper(),
    };
    let name = name.unwrap_or(config.report.name);

    let mut out = BufWriter::new(io::stdout().lock());
    errs.report_with(&mut out, &name, &wrapper)?;
    out.flush()?;
    Ok(())
}

fn handle_summary(file: &Path, categories: &[String]) -> Result<()> {
    let errs = load_collection(file)?;

    println!("{}", errs.summary());
    for category in categories {
        println!("{}", errs.category_summary(category));
    }
    Ok(())
}

fn handle_count(file: &Path) -> Result<()> {
    let errs = load_collection(file)?;
    let (total, categories) = errs.count_errors();
    println!("{} errors in {} categories", total, categories);
    Ok(())
}

fn handle_diff(this: &Path, other: &Path, quiet: bool) -> Result<()> {
    let ours = load_collection(this)?;
    let theirs = load_collection(other)?;

    ours.matches(&theirs)?;
    if !quiet {
        println!(
            "{} {} and {} match",
            "[OK]".green().bold(),
            this.display(),
            other.display()
        );
    }
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(ErrMapError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "errmap", &mut io::stdout());
}
