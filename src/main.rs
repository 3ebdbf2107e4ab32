// MedRedact - PII redaction for Japanese clinical documents
// Copyright (c) 2025 MedRedact Contributors
// Licensed under the MIT License

use clap::Parser;
use medredact::cli::{Cli, Commands};
use medredact::config::{load_config_or_default, LoggingConfig, MedRedactConfig};
use medredact::domain::Result;
use medredact::log_error_with_context;
use medredact::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let loaded = load_config_or_default(cli.config.as_deref());

    // CLI flag wins over the configuration file
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "MedRedact - PII redaction for Japanese clinical documents"
    );

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, loaded: Result<MedRedactConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Clean(args) => match loaded {
            Ok(config) => args.execute(config).await,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ {e}");
                Ok(2)
            }
        },
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref(), loaded).await,
        Commands::Init(args) => args.execute().await,
    }
}
