//! Configuration management for MedRedact.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! MedRedact reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MEDREDACT_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medredact::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("medredact.toml")?;
//!
//! println!("Log level: {}", config.application.log_level);
//! println!("Bare kanji names: {}", config.redaction.bare_kanji_names);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run default
//! - [`RedactionConfig`] - Optional rules and extra protected terms
//! - [`InputConfig`] - Document size limit
//! - [`AuditConfig`] - Hashed audit trail
//! - [`LoggingConfig`] - Local log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [redaction]
//! bare_kanji_names = false
//! additional_protected_terms = ["ブロナンセリン"]
//!
//! [audit]
//! enabled = true
//! log_path = "${MEDREDACT_AUDIT_DIR}/redaction.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::redaction::config::{AuditConfig, RedactionConfig};
pub use loader::{load_config, load_config_or_default, CONFIG_FILE_NAME};
pub use schema::{ApplicationConfig, InputConfig, LoggingConfig, MedRedactConfig};
