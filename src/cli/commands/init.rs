//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = crate::config::CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing configuration file");

        println!("📝 Initializing MedRedact configuration");
        println!();

        if self.output.exists() && !self.force {
            println!(
                "❌ Configuration file already exists: {}",
                self.output.display()
            );
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output.display());
                println!(
                    "  2. Validate configuration: medredact --config {} validate-config",
                    self.output.display()
                );
                println!(
                    "  3. Clean documents: medredact --config {} clean <FILES>...",
                    self.output.display()
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate the commented configuration template
    fn generate_config() -> String {
        r#"# MedRedact Configuration File
# PII redaction for Japanese clinical documents
#
# Every setting is optional; the values below are the defaults.
# ${VAR_NAME} is replaced with the environment variable VAR_NAME, and
# MEDREDACT_<SECTION>_<KEY> environment variables override any value.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (print the report only, never write masked text)
dry_run = false

# ============================================================================
# Redaction Rules
# ============================================================================
[redaction]
# Mask any run of 4-8 kanji surrounded by non-kanji as a full name.
# Catches unlabelled names but also masks ordinary medical compounds.
bare_kanji_names = false

# Terms that must never be masked, in addition to the built-in list
# (drug names, departments, diagnoses).
additional_protected_terms = []

# ============================================================================
# Input Documents
# ============================================================================
[input]
# Maximum size of a single document in MB (1-1024)
max_file_size_mb = 10

# ============================================================================
# Audit Trail
# ============================================================================
[audit]
# Record each run with category counts and SHA-256 hashes of masked values
enabled = false

# Audit log file path
log_path = "./audit/redaction.log"

# JSON lines (true) or plain text (false)
json_format = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local JSON log files (console logs always go to stderr)
local_enabled = false

# Local log directory
local_path = "./logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
