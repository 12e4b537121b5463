//! Logging setup on top of `tracing-subscriber`.
//!
//! Level precedence is decided by the caller; this module turns the chosen
//! [`Level`] plus an optional log file into a global `fmt` subscriber.
//! `RUST_LOG`, when set, replaces the computed filter.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging levels accepted on the command line and in config
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Errors only
    Error = 1,
    /// Errors and warnings
    Warn = 2,
    /// Adds progress information
    Info = 3,
    /// Adds query-level detail
    Debug = 4,
    /// Everything
    Trace = 5,
}

impl Level {
    /// Directive understood by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!("Unknown log level: {s}")),
        }
    }
}

/// Failure to install the global subscriber
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The log file or its directory could not be opened
    #[error("Failed to open log file {path}: {source}")]
    File {
        /// Requested log file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A subscriber was already installed
    #[error("Logger already initialized: {0}")]
    AlreadySet(String),
}

/// Build the filter: `RUST_LOG` if present, otherwise `level` for everything
fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber
///
/// With `log_file` set, output is appended to that file without ANSI colours
/// and the parent directory is created if needed. Otherwise logs go to stderr
/// so they never mix with command output on stdout. `verbose` adds module
/// targets to each line.
///
/// # Errors
/// Returns [`LoggerError::File`] if the log file cannot be opened, or
/// [`LoggerError::AlreadySet`] if called twice.
pub fn init(level: Level, verbose: bool, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(verbose);

    let result = if let Some(path) = log_file {
        let file_err = |source: std::io::Error| LoggerError::File {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(file_err)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(file_err)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    result.map_err(|e| LoggerError::AlreadySet(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("err".parse::<Level>(), Ok(Level::Error));
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert!("chatty".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_order() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
        assert_eq!(Level::Info.max(Level::Warn), Level::Info);
    }

    #[test]
    fn test_file_logging_creates_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("eduverse.log");

        // Only one global subscriber per process; a second call reports AlreadySet.
        match init(Level::Info, false, Some(&path)) {
            Ok(()) => {
                tracing::info!("hello from test");
                assert!(path.exists());
            }
            Err(LoggerError::AlreadySet(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
