//! Configuration module for `EduVerse`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

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

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$EDUVERSE";

/// Errors raised while reading, writing or editing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `get`/`set`/`unset` was given a key that does not exist
    #[error("Unknown config key: '{0}'")]
    UnknownKey(String),

    /// A value could not be converted to the key's type
    #[error("Invalid value for '{key}': '{value}'")]
    InvalidValue {
        /// Key being set
        key: String,
        /// Rejected value
        value: String,
    },
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty logs to stderr
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated overview reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
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
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

/// Valid values for the `level` key
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Get the `$EDUVERSE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/eduverse`
    /// - macOS: `~/Library/Application Support/eduverse`
    /// - Windows: `%APPDATA%\eduverse`
    #[must_use]
    pub fn get_eduverse_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eduverse")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_eduverse_dir`](Self::get_eduverse_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_eduverse_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are copied,
    /// so upgrading picks up new settings without clobbering user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were filled in
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (mine, theirs) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ] {
            if mine.is_empty() && !theirs.is_empty() {
                mine.clone_from(theirs);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto this configuration in place
    ///
    /// Prefer [`with_overrides`](Self::with_overrides) when the config may be
    /// saved later in the same run.
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
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Copy of this configuration with CLI overrides applied
    ///
    /// The stored configuration is left untouched, so saving it never
    /// persists one-run overrides.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut runtime = self.clone();
        runtime.apply_overrides(overrides);
        runtime
    }

    /// Log file path with `$EDUVERSE` expanded, or `None` to log to stderr
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        (!self.logging.file.is_empty())
            .then(|| PathBuf::from(Self::expand_variables(&self.logging.file)))
    }

    /// Reports directory with `$EDUVERSE` expanded
    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        PathBuf::from(Self::expand_variables(&self.paths.reports_dir))
    }

    /// Expand `$EDUVERSE` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_eduverse_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults. Path values are kept as
    /// written, `$EDUVERSE` included; use [`log_file`](Self::log_file) and
    /// [`reports_dir`](Self::reports_dir) for resolved paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the schema
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is not valid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// See [`load_or_init`](Self::load_or_init). Runs before logging is set
    /// up, so problems are returned as warnings for the caller to report.
    #[must_use]
    pub fn load() -> (Self, Vec<String>) {
        Self::load_or_init(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, or create it from defaults
    ///
    /// - Existing file: loaded, missing fields merged from defaults and saved back.
    /// - No file (first run): defaults are written out and returned.
    /// - Unreadable or invalid file: defaults are returned with a warning.
    ///
    /// # Returns
    ///
    /// The configuration and any warnings raised while reading or writing it
    #[must_use]
    pub fn load_or_init(config_file: &Path) -> (Self, Vec<String>) {
        let defaults = Self::from_defaults();
        let mut warnings = Vec::new();

        if !config_file.exists() {
            if let Err(e) = defaults.save_to(config_file) {
                warnings.push(format!(
                    "Could not write default config to {}: {e}",
                    config_file.display()
                ));
            }
            return (defaults, warnings);
        }

        let config = match Self::load_from(config_file) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    if let Err(e) = config.save_to(config_file) {
                        warnings.push(format!(
                            "Could not update config {}: {e}",
                            config_file.display()
                        ));
                    }
                }
                config
            }
            Err(e) => {
                warnings.push(format!(
                    "Ignoring config {}: {e}; using defaults",
                    config_file.display()
                ));
                defaults
            }
        };
        (config, warnings)
    }

    /// Read and parse a config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, or the config
    /// cannot be serialized or written
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    ///
    /// # Errors
    /// Same as [`save`](Self::save)
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir` (or `reports-dir`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, `verbose` is not a boolean, or
    /// `level` is not one of error, warn, info, debug, trace
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "level" => {
                let lowered = value.to_ascii_lowercase();
                if !LEVELS.contains(&lowered.as_str()) {
                    return Err(invalid());
                }
                self.logging.level = lowered;
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = value.parse::<bool>().map_err(|_| invalid())?,
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error if the key is not recognized
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), ConfigError> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it
    ///
    /// Succeeds without doing anything if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
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

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
