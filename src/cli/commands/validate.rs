//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the MedRedact configuration file and the rule tables it produces.

use crate::config::MedRedactConfig;
use crate::domain::Result;
use crate::redaction::Redactor;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `loaded` is the outcome of loading `config_path` (or the defaults when
    /// no path was given), so load errors surface here with exit code 2.
    pub async fn execute(
        &self,
        config_path: Option<&Path>,
        loaded: Result<MedRedactConfig>,
    ) -> anyhow::Result<i32> {
        let source = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in defaults)".to_string());
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match loaded {
            Ok(c) => {
                println!("✅ Configuration loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let redactor = match Redactor::new(&config.redaction) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Failed to build redaction rules");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let enabled_rules = redactor
            .passes()
            .iter()
            .flat_map(|pass| pass.rules())
            .filter(|rule| rule.is_enabled())
            .count();

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Bare Kanji Names: {}", config.redaction.bare_kanji_names);
        println!("  Protected Terms: {}", redactor.protected_terms().len());
        println!("  Enabled Rules: {enabled_rules}");
        println!("  Max File Size: {} MB", config.input.max_file_size_mb);
        println!(
            "  Audit: {}",
            if config.audit.enabled {
                config.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!(
            "  Local Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
