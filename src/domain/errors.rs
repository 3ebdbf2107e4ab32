//! Domain error types
//!
//! This module defines the error hierarchy for MedRedact. "No match" is never
//! an error in the redaction core; only configuration, pattern compilation,
//! matcher failures and document supply produce errors.

use thiserror::Error;

/// Main MedRedact error type
#[derive(Debug, Error)]
pub enum RedactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rule's pattern failed to compile
    #[error("Invalid pattern in rule '{rule}': {message}")]
    Pattern {
        /// Rule name
        rule: &'static str,
        /// Compiler message
        message: String,
    },

    /// The matcher gave up while scanning input (e.g. backtrack limit)
    #[error("Matching failed in rule '{rule}': {message}")]
    Matching {
        /// Rule name
        rule: &'static str,
        /// Engine message
        message: String,
    },

    /// Input document could not be supplied to the redactor
    #[error("Document error: {0}")]
    Document(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for RedactError {
    fn from(err: std::io::Error) -> Self {
        RedactError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RedactError {
    fn from(err: serde_json::Error) -> Self {
        RedactError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RedactError {
    fn from(err: toml::de::Error) -> Self {
        RedactError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RedactError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");

        let err = RedactError::Pattern {
            rule: "birthdate.label",
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid pattern in rule 'birthdate.label': unclosed group"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RedactError = io_err.into();
        assert!(matches!(err, RedactError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RedactError = json_err.into();
        assert!(matches!(err, RedactError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RedactError = toml_err.into();
        assert!(matches!(err, RedactError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = RedactError::Document("unsupported".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
