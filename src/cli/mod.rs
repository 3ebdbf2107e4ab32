//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for MedRedact using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MedRedact - PII redaction for Japanese clinical documents
#[derive(Parser, Debug)]
#[command(name = "medredact")]
#[command(version, about, long_about = None)]
#[command(author = "MedRedact Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "MEDREDACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDREDACT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask PII in text documents
    Clean(commands::clean::CleanArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
