//! Command-line interface entry point for `EduVerse`

mod args;
mod commands;

use args::{ApiQuery, Cli, Command};
use clap::Parser;
use eduverse::config::Config;
use eduverse::core::{integration_catalog, module_catalog};
use eduverse::shared::logger::{self, Level};
use std::process::ExitCode;
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let args = Cli::parse();

    // Stored config is what `config` subcommands edit and save; overrides
    // only reach the runtime copy
    let (mut stored, load_warnings) = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // Effective level: --debug, then --log-level, then config, then warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);
    if args.debug_flag {
        level = level.max(Level::Debug);
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        level = level.max(Level::Info);
    }

    // File logging: CLI flag wins, otherwise config logging.file if set
    let log_path = args.log_file.clone().or_else(|| config.log_file());

    match logger::init(level, verbose, log_path.as_deref()) {
        Ok(()) => {
            if let Some(path) = &log_path {
                info!("File logging initialized at: {}", path.display());
            }
            for warning in &load_warnings {
                warn!("{warning}");
            }
        }
        Err(e) => {
            eprintln!("✗ {e}");
            for warning in &load_warnings {
                eprintln!("⚠ {warning}");
            }
        }
    }
    debug!(
        "eduverse started with level {level} (verbose={verbose}, debug={})",
        args.debug_flag
    );

    let result = match args.command {
        Command::Modules { query, output } => {
            commands::catalog::run(module_catalog(), query, output)
        }
        Command::Apis { query, output } => match query {
            ApiQuery::Catalog(query) => commands::catalog::run(integration_catalog(), query, output),
            ApiQuery::Complexity => commands::catalog::complexity(integration_catalog(), output),
        },
        Command::Report { output, format } => {
            commands::report::run(output.as_deref(), &format, &config)
        }
        Command::Config { subcommand } => commands::config::run(subcommand, &mut stored, &defaults),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
