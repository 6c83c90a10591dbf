//! Configuration module for `campus-analytics`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Scraper configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the book catalog (listing pages live under `catalogue/`)
    #[serde(default)]
    pub base_url: String,
    /// Number of listing pages to fetch
    #[serde(default)]
    pub pages: u32,
    /// Retry budget per HTTP request
    #[serde(default)]
    pub retries: u32,
    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: u64,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for raw scraped CSV files
    #[serde(default)]
    pub raw_dir: String,
    /// Directory for cleaned CSV files
    #[serde(default)]
    pub cleaned_dir: String,
    /// Directory for rendered chart documents
    #[serde(default)]
    pub charts_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Scraper settings
    #[serde(default)]
    pub scraper: ScraperConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override scraper base URL
    pub base_url: Option<String>,
    /// Override raw data directory
    pub raw_dir: Option<String>,
    /// Override cleaned data directory
    pub cleaned_dir: Option<String>,
    /// Override charts output directory
    pub charts_dir: Option<String>,
}

impl Config {
    /// Get the `$CAMPUS_ANALYTICS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusanalytics`
    /// - macOS: `~/Library/Application Support/campusanalytics`
    /// - Windows: `%APPDATA%\campusanalytics`
    #[must_use]
    pub fn get_campusanalytics_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusanalytics")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration to ensure that newly added fields are
    /// populated with their default values. String fields are merged when
    /// empty, numeric fields when zero.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.scraper.base_url.is_empty() && !defaults.scraper.base_url.is_empty() {
            self.scraper.base_url.clone_from(&defaults.scraper.base_url);
            changed = true;
        }
        if self.scraper.pages == 0 && defaults.scraper.pages != 0 {
            self.scraper.pages = defaults.scraper.pages;
            changed = true;
        }
        if self.scraper.retries == 0 && defaults.scraper.retries != 0 {
            self.scraper.retries = defaults.scraper.retries;
            changed = true;
        }
        if self.scraper.timeout_secs == 0 && defaults.scraper.timeout_secs != 0 {
            self.scraper.timeout_secs = defaults.scraper.timeout_secs;
            changed = true;
        }

        if self.paths.raw_dir.is_empty() && !defaults.paths.raw_dir.is_empty() {
            self.paths.raw_dir.clone_from(&defaults.paths.raw_dir);
            changed = true;
        }
        if self.paths.cleaned_dir.is_empty() && !defaults.paths.cleaned_dir.is_empty() {
            self.paths.cleaned_dir.clone_from(&defaults.paths.cleaned_dir);
            changed = true;
        }
        if self.paths.charts_dir.is_empty() && !defaults.paths.charts_dir.is_empty() {
            self.paths.charts_dir.clone_from(&defaults.paths.charts_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(base_url) = &overrides.base_url {
            self.scraper.base_url.clone_from(base_url);
        }

        if let Some(raw_dir) = &overrides.raw_dir {
            self.paths.raw_dir.clone_from(raw_dir);
        }
        if let Some(cleaned_dir) = &overrides.cleaned_dir {
            self.paths.cleaned_dir.clone_from(cleaned_dir);
        }
        if let Some(charts_dir) = &overrides.charts_dir {
            self.paths.charts_dir.clone_from(charts_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campusanalytics_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CAMPUS_ANALYTICS` variable in a string
    ///
    /// Replaces occurrences of `$CAMPUS_ANALYTICS` with the actual config
    /// directory path, so configuration values can reference it dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CAMPUS_ANALYTICS") {
            let dir = Self::get_campusanalytics_dir();
            value.replace("$CAMPUS_ANALYTICS", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$CAMPUS_ANALYTICS`
    /// variables in path-like values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.raw_dir = Self::expand_variables(&config.paths.raw_dir);
        config.paths.cleaned_dir = Self::expand_variables(&config.paths.cleaned_dir);
        config.paths.charts_dir = Self::expand_variables(&config.paths.charts_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it and merges missing fields from
    ///   defaults, saving the updated config.
    /// - First run: creates the config directory and saves the defaults.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `base_url`, `pages`,
    /// `retries`, `timeout_secs`, `raw_dir`, `cleaned_dir`, `charts_dir`.
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base_url" | "base-url" => Some(self.scraper.base_url.clone()),
            "pages" => Some(self.scraper.pages.to_string()),
            "retries" => Some(self.scraper.retries.to_string()),
            "timeout_secs" | "timeout-secs" => Some(self.scraper.timeout_secs.to_string()),
            "raw_dir" | "raw-dir" => Some(self.paths.raw_dir.clone()),
            "cleaned_dir" | "cleaned-dir" => Some(self.paths.cleaned_dir.clone()),
            "charts_dir" | "charts-dir" => Some(self.paths.charts_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g. "maybe" for the `verbose` boolean, "many" for `pages`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "base_url" | "base-url" => self.scraper.base_url = value.to_string(),
            "pages" => {
                self.scraper.pages = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'pages': '{value}'"))?;
            }
            "retries" => {
                self.scraper.retries = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'retries': '{value}'"))?;
            }
            "timeout_secs" | "timeout-secs" => {
                self.scraper.timeout_secs = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid number for 'timeout_secs': '{value}'"))?;
            }
            "raw_dir" | "raw-dir" => self.paths.raw_dir = value.to_string(),
            "cleaned_dir" | "cleaned-dir" => self.paths.cleaned_dir = value.to_string(),
            "charts_dir" | "charts-dir" => self.paths.charts_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base_url" | "base-url" => {
                self.scraper.base_url.clone_from(&defaults.scraper.base_url);
            }
            "pages" => self.scraper.pages = defaults.scraper.pages,
            "retries" => self.scraper.retries = defaults.scraper.retries,
            "timeout_secs" | "timeout-secs" => {
                self.scraper.timeout_secs = defaults.scraper.timeout_secs;
            }
            "raw_dir" | "raw-dir" => self.paths.raw_dir.clone_from(&defaults.paths.raw_dir),
            "cleaned_dir" | "cleaned-dir" => {
                self.paths.cleaned_dir.clone_from(&defaults.paths.cleaned_dir);
            }
            "charts_dir" | "charts-dir" => {
                self.paths.charts_dir.clone_from(&defaults.paths.charts_dir);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. Succeeds
    /// silently when no config file exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[scraper]")?;
        writeln!(f, "  base_url = \"{}\"", self.scraper.base_url)?;
        writeln!(f, "  pages = {}", self.scraper.pages)?;
        writeln!(f, "  retries = {}", self.scraper.retries)?;
        writeln!(f, "  timeout_secs = {}", self.scraper.timeout_secs)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  raw_dir = \"{}\"", self.paths.raw_dir)?;
        writeln!(f, "  cleaned_dir = \"{}\"", self.paths.cleaned_dir)?;
        writeln!(f, "  charts_dir = \"{}\"", self.paths.charts_dir)?;

        Ok(())
    }
}
