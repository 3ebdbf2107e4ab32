//! Audit logger for redaction runs

use crate::redaction::models::{RedactionCategory, RedactionLog};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    run_id: String,
    source: String,
    redactions_count: usize,
    counts: BTreeMap<String, usize>,
    redactions: Vec<AuditRedaction>,
}

/// Audit redaction entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditRedaction {
    category: RedactionCategory,
    /// SHA-256 hash of the original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for redaction runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Whether entries are written
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Log one redaction run
    ///
    /// `source` must already be masked: it is written as is.
    pub fn log_redaction(&self, source: &str, log: &RedactionLog) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let mut counts = BTreeMap::new();
        for category in log.categories() {
            counts.insert(category.label().to_string(), log.count(category));
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            run_id: Uuid::new_v4().to_string(),
            source: source.to_string(),
            redactions_count: log.len(),
            counts,
            redactions: log
                .iter()
                .map(|e| AuditRedaction {
                    category: e.category,
                    value_hash: hash_pii_value(&e.original_value),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let counts = entry
                .counts
                .iter()
                .map(|(label, count)| format!("{label}={count}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                file,
                "[{}] Run: {} | Source: {} | Redactions: {} | {}",
                entry.timestamp, entry.run_id, entry.source, entry.redactions_count, counts
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
