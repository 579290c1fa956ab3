//! Restring CLI Binary
//!
//! Command-line interface for the restring tree mutator.

use clap::Parser;
use restring::cli::{map_error, Cli, RunContext};
use restring::config::ConfigLoader;
use restring::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Restring CLI starting");

    let context = match RunContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute() {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load(cli.config.as_deref())
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
