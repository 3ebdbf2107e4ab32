//! Redaction configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that shape the redactor's rule tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Enable the bare kanji full-name heuristic (off: too many false positives)
    #[serde(default)]
    pub bare_kanji_names: bool,

    /// Extra terms that must never be masked, on top of the built-in list
    #[serde(default)]
    pub additional_protected_terms: Vec<String>,
}

impl RedactionConfig {
    /// Validate the redaction section
    pub fn validate(&self) -> Result<(), String> {
        if self
            .additional_protected_terms
            .iter()
            .any(|term| term.trim().is_empty())
        {
            return Err(
                "redaction.additional_protected_terms cannot contain blank entries".to_string(),
            );
        }
        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines instead of plain text
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/redaction.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate the audit section
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RedactionConfig::default();
        assert!(!config.bare_kanji_names);
        assert!(config.additional_protected_terms.is_empty());
        assert!(config.validate().is_ok());

        let audit = AuditConfig::default();
        assert!(!audit.enabled);
        assert!(audit.json_format);
        assert!(audit.validate().is_ok());
    }

    #[test]
    fn test_blank_protected_term_is_rejected() {
        let config = RedactionConfig {
            bare_kanji_names: false,
            additional_protected_terms: vec!["ブロナンセリン".to_string(), " ".to_string()],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enabled_audit_needs_path() {
        let audit = AuditConfig {
            enabled: true,
            log_path: PathBuf::new(),
            json_format: true,
        };
        assert!(audit.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RedactionConfig = toml::from_str("bare_kanji_names = true").unwrap();
        assert!(config.bare_kanji_names);
        assert!(config.additional_protected_terms.is_empty());
    }
}
