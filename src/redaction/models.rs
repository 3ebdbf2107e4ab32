//! Redaction data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of personally identifiable information masked by the redactor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionCategory {
    /// Personal names
    Name,
    /// Birthdates (Gregorian, era or composite)
    Birthdate,
    /// Japanese postal codes (〒NNN-NNNN)
    PostalCode,
    /// Street addresses
    Address,
    /// Telephone numbers
    PhoneNumber,
    /// Labelled identifiers (診察券, 患者ID, カルテ番号 ...)
    Id,
    /// Bare patient numbers embedded in file names
    PatientNumber,
}

impl RedactionCategory {
    /// Every category, in declaration order
    pub const ALL: [RedactionCategory; 7] = [
        Self::Name,
        Self::Birthdate,
        Self::PostalCode,
        Self::Address,
        Self::PhoneNumber,
        Self::Id,
        Self::PatientNumber,
    ];

    /// Label used in summary reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "氏名",
            Self::Birthdate => "生年月日",
            Self::PostalCode => "郵便番号",
            Self::Address => "住所",
            Self::PhoneNumber => "電話番号",
            Self::Id => "ID",
            Self::PatientNumber => "患者番号",
        }
    }

    /// Fixed token substituted for a detected span
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "[氏名]",
            Self::Birthdate => "[生年月日]",
            Self::PostalCode => "[郵便番号]",
            Self::Address => "[住所]",
            Self::PhoneNumber => "[電話番号]",
            Self::Id => "[ID]",
            Self::PatientNumber => "[患者番号]",
        }
    }

    /// Check whether `s` is exactly one placeholder token
    pub fn is_placeholder_token(s: &str) -> bool {
        Self::ALL.iter().any(|category| category.placeholder() == s)
    }

    /// Check whether `text` contains any placeholder token
    pub fn contains_placeholder(text: &str) -> bool {
        Self::ALL
            .iter()
            .any(|category| text.contains(category.placeholder()))
    }
}

impl fmt::Display for RedactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One masked span: its category and the text it replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionLogEntry {
    /// Category of the masked span
    pub category: RedactionCategory,
    /// Original text (contains PII, never written to audit logs)
    pub original_value: String,
}

impl RedactionLogEntry {
    /// Create a new log entry
    pub fn new(category: RedactionCategory, original_value: impl Into<String>) -> Self {
        Self {
            category,
            original_value: original_value.into(),
        }
    }
}

/// Ordered record of every redaction performed during one run
///
/// Entries keep detection order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedactionLog {
    entries: Vec<RedactionLogEntry>,
}

impl RedactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, category: RedactionCategory, original_value: &str) {
        self.entries
            .push(RedactionLogEntry::new(category, original_value));
    }

    /// All entries in detection order
    pub fn entries(&self) -> &[RedactionLogEntry] {
        &self.entries
    }

    /// Iterate over entries in detection order
    pub fn iter(&self) -> std::slice::Iter<'_, RedactionLogEntry> {
        self.entries.iter()
    }

    /// Total number of redactions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was redacted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of redactions in one category
    pub fn count(&self, category: RedactionCategory) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    /// Distinct categories in order of first detection
    pub fn categories(&self) -> Vec<RedactionCategory> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    /// Original values recorded for one category, in detection order
    pub fn values_for(&self, category: RedactionCategory) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.original_value.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a RedactionLog {
    type Item = &'a RedactionLogEntry;
    type IntoIter = std::slice::Iter<'a, RedactionLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Output of a full redaction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionResult {
    /// Input text with every accepted span replaced by its placeholder
    pub masked_text: String,
    /// Every redaction performed, in pass-execution order
    pub log: RedactionLog,
}

impl RedactionResult {
    /// Split into masked text and log
    pub fn into_parts(self) -> (String, RedactionLog) {
        (self.masked_text, self.log)
    }

    /// True when at least one span was masked
    pub fn has_redactions(&self) -> bool {
        !self.log.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_wrap_labels() {
        for category in RedactionCategory::ALL {
            assert_eq!(category.placeholder(), format!("[{}]", category.label()));
        }
    }

    #[test]
    fn test_contains_placeholder() {
        assert!(RedactionCategory::contains_placeholder("住所：[住所]"));
        assert!(RedactionCategory::contains_placeholder("[郵便番号] 東京都"));
        assert!(!RedactionCategory::contains_placeholder("住所：東京都"));
        assert!(!RedactionCategory::contains_placeholder("[住所"));

        assert!(RedactionCategory::is_placeholder_token("[患者番号]"));
        assert!(!RedactionCategory::is_placeholder_token("住所：[住所]"));
    }

    #[test]
    fn test_log_keeps_order_and_duplicates() {
        let mut log = RedactionLog::new();
        log.record(RedactionCategory::PhoneNumber, "03-1234-5678");
        log.record(RedactionCategory::Name, "田中太郎");
        log.record(RedactionCategory::PhoneNumber, "03-1234-5678");

        assert_eq!(log.len(), 3);
        assert_eq!(log.count(RedactionCategory::PhoneNumber), 2);
        assert_eq!(
            log.categories(),
            vec![RedactionCategory::PhoneNumber, RedactionCategory::Name]
        );
        assert_eq!(
            log.values_for(RedactionCategory::PhoneNumber),
            vec!["03-1234-5678", "03-1234-5678"]
        );
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&RedactionCategory::PatientNumber).unwrap();
        assert_eq!(json, "\"patient_number\"");

        let entry = RedactionLogEntry::new(RedactionCategory::Id, "ID:123");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["category"], "id");
        assert_eq!(json["original_value"], "ID:123");
    }
}
