//! CLI argument definitions for `campus-analytics`

use campus_analytics::config::ConfigOverrides;
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use logger::Level;
use std::path::PathBuf;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `base_url`, `pages`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Scrape the book catalog into a raw CSV file.
    Scrape {
        /// Number of listing pages to fetch (defaults to config `pages`)
        #[arg(short, long, value_name = "N")]
        pages: Option<u32>,

        /// Output CSV path (defaults to `raw_dir/books_raw.csv`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Clean a raw CSV into a typed table with derived columns.
    Clean {
        /// Raw CSV path (defaults to `raw_dir/books_raw.csv`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output CSV path (defaults to `cleaned_dir/cleaned_<input name>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print descriptive and inferential statistics for a cleaned CSV.
    ///
    /// Both sections print by default; `--descriptive` or `--inferential`
    /// restricts the output to that section.
    Stats {
        /// Cleaned CSV path (defaults to `cleaned_dir/cleaned_books_raw.csv`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print only the descriptive section
        #[arg(long)]
        descriptive: bool,

        /// Print only the inferential section
        #[arg(long)]
        inferential: bool,

        /// First category for the mean-price comparison
        #[arg(long, value_name = "CATEGORY", default_value = "Fiction")]
        group_a: String,

        /// Second category for the mean-price comparison
        #[arg(long, value_name = "CATEGORY", default_value = "Nonfiction")]
        group_b: String,
    },
    /// Generate SVG charts and an HTML dashboard from a cleaned CSV.
    Charts {
        /// Cleaned CSV path (defaults to `cleaned_dir/cleaned_books_raw.csv`)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output directory (defaults to config `charts_dir`)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusanalytics",
    about = "campus-analytics command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog base URL
    #[arg(long = "config-base-url", value_name = "URL")]
    pub config_base_url: Option<String>,

    /// Override config catalog base URL (short form)
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override config raw data directory
    #[arg(long = "config-raw-dir", value_name = "DIR")]
    pub config_raw_dir: Option<PathBuf>,

    /// Override config raw data directory (short form)
    #[arg(long = "raw-dir", value_name = "DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Override config cleaned data directory
    #[arg(long = "config-cleaned-dir", value_name = "DIR")]
    pub config_cleaned_dir: Option<PathBuf>,

    /// Override config cleaned data directory (short form)
    #[arg(long = "cleaned-dir", value_name = "DIR")]
    pub cleaned_dir: Option<PathBuf>,

    /// Override config charts output directory
    #[arg(long = "config-charts-dir", value_name = "DIR")]
    pub config_charts_dir: Option<PathBuf>,

    /// Override config charts output directory (short form)
    #[arg(long = "charts-dir", value_name = "DIR")]
    pub charts_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--base-url`) take precedence over long-form flags (e.g.,
    /// `--config-base-url`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            base_url: self
                .base_url
                .clone()
                .or_else(|| self.config_base_url.clone()),
            raw_dir: self
                .raw_dir
                .as_ref()
                .map(path_string)
                .or_else(|| self.config_raw_dir.as_ref().map(path_string)),
            cleaned_dir: self
                .cleaned_dir
                .as_ref()
                .map(path_string)
                .or_else(|| self.config_cleaned_dir.as_ref().map(path_string)),
            charts_dir: self
                .charts_dir
                .as_ref()
                .map(path_string)
                .or_else(|| self.config_charts_dir.as_ref().map(path_string)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_base_url: None,
            base_url: None,
            config_raw_dir: None,
            raw_dir: None,
            config_cleaned_dir: None,
            cleaned_dir: None,
            config_charts_dir: None,
            charts_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.base_url.is_none());
        assert!(overrides.raw_dir.is_none());
        assert!(overrides.cleaned_dir.is_none());
        assert!(overrides.charts_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.base_url = Some("https://books.example.com".to_string());
        cli.raw_dir = Some(PathBuf::from("/data/raw"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(
            overrides.base_url,
            Some("https://books.example.com".to_string())
        );
        assert_eq!(overrides.raw_dir, Some("/data/raw".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli();
        cli.config_base_url = Some("https://long.example.com".to_string());
        cli.base_url = Some("https://short.example.com".to_string());
        cli.config_charts_dir = Some(PathBuf::from("/long/charts"));
        cli.charts_dir = Some(PathBuf::from("/short/charts"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.base_url,
            Some("https://short.example.com".to_string())
        );
        assert_eq!(overrides.charts_dir, Some("/short/charts".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_base_url = Some("https://long.example.com".to_string());
        cli.config_cleaned_dir = Some(PathBuf::from("/long/cleaned"));

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.base_url,
            Some("https://long.example.com".to_string())
        );
        assert_eq!(overrides.cleaned_dir, Some("/long/cleaned".to_string()));
    }
}
