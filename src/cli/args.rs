//! CLI argument definitions for `EduVerse`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use eduverse::config::ConfigOverrides;
use eduverse::shared::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
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
    /// Trace-level logging
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Trace => Self::Trace,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// How listing commands print their results
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Queries shared by the module and API catalogs
#[derive(Debug, Subcommand)]
pub enum CatalogQuery {
    /// List categories, sorted alphabetically.
    Categories,
    /// List records, optionally restricted to one category.
    List {
        /// Category label (case-insensitive), e.g. "Civil Engineering"
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Show the full details of one record.
    Show {
        /// Exact record name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// List every record name in catalog order.
    Names,
    /// Count records per category.
    Distribution,
}

#[derive(Debug, Subcommand)]
pub enum ApiQuery {
    /// Catalog queries shared with modules.
    #[command(flatten)]
    Catalog(CatalogQuery),
    /// Count APIs per implementation complexity (Low, Medium, High).
    Complexity,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (`level`, `file`, `verbose`, `reports_dir`)
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
    /// Browse the educational module catalog.
    Modules {
        #[command(subcommand)]
        query: CatalogQuery,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
        output: OutputFormat,
    },
    /// Browse the API integration catalog.
    Apis {
        #[command(subcommand)]
        query: ApiQuery,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
        output: OutputFormat,
    },
    /// Generate the catalog overview report.
    ///
    /// Renders both catalogs with their category and complexity distributions.
    Report {
        /// Output file path (optional; defaults to `reports_dir`/eduverse_overview.<ext>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "eduverse",
    about = "Browse the EduVerse module and API integration catalogs",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level. Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level for this run
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path for this run
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory for this run
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
        assert_eq!(LogLevelArg::Trace.to_string(), "trace");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["eduverse", "config"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "eduverse",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--reports-dir",
            "/output",
            "config",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_parse_module_queries() {
        let cli = Cli::parse_from(["eduverse", "modules", "list", "--category", "Civil Engineering"]);
        match cli.command {
            Command::Modules {
                query: CatalogQuery::List { category },
                output,
            } => {
                assert_eq!(category.as_deref(), Some("Civil Engineering"));
                assert_eq!(output, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_api_complexity_json() {
        let cli = Cli::parse_from(["eduverse", "apis", "complexity", "--output", "json"]);
        assert!(matches!(
            cli.command,
            Command::Apis {
                query: ApiQuery::Complexity,
                output: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn test_parse_api_show() {
        let cli = Cli::parse_from(["eduverse", "apis", "show", "Blockly"]);
        assert!(matches!(
            cli.command,
            Command::Apis {
                query: ApiQuery::Catalog(CatalogQuery::Show { ref name }),
                ..
            } if name == "Blockly"
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
