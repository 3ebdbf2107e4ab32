//! Summary reporting for redaction runs
//!
//! The console form groups the log by category in order of first detection
//! and shows at most [`SUMMARY_SAMPLE_LIMIT`] values per category.

use super::models::{RedactionCategory, RedactionLog};
use serde::{Deserialize, Serialize};

/// Values shown per category before the remainder is collapsed
pub const SUMMARY_SAMPLE_LIMIT: usize = 3;

const REPORT_HEADER: &str = "=== 削除した個人情報 ===";
const NOTHING_DETECTED: &str = "個人情報は検出されませんでした。";

/// Per-category summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category
    pub category: RedactionCategory,
    /// Japanese label of the category
    pub label: String,
    /// Number of redactions
    pub count: usize,
    /// First values, up to [`SUMMARY_SAMPLE_LIMIT`]
    pub samples: Vec<String>,
}

impl CategorySummary {
    /// Redactions not listed in `samples`
    pub fn remaining(&self) -> usize {
        self.count.saturating_sub(self.samples.len())
    }
}

/// Summary of one redaction log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Total redactions
    pub total: usize,
    /// Categories in order of first detection
    pub categories: Vec<CategorySummary>,
}

impl SummaryReport {
    /// Build the summary of `log`
    pub fn from_log(log: &RedactionLog) -> Self {
        let categories = log
            .categories()
            .into_iter()
            .map(|category| {
                let values = log.values_for(category);
                CategorySummary {
                    category,
                    label: category.label().to_string(),
                    count: values.len(),
                    samples: values
                        .into_iter()
                        .take(SUMMARY_SAMPLE_LIMIT)
                        .map(str::to_string)
                        .collect(),
                }
            })
            .collect();

        Self {
            total: log.len(),
            categories,
        }
    }

    /// True when nothing was redacted
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        if self.is_empty() {
            return NOTHING_DETECTED.to_string();
        }

        let mut lines = vec![REPORT_HEADER.to_string()];
        for summary in &self.categories {
            lines.push(format!("\n{}: {}件", summary.label, summary.count));
            for (i, value) in summary.samples.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, value));
            }
            if summary.remaining() > 0 {
                lines.push(format!("  ... 他 {}件", summary.remaining()));
            }
        }
        lines.join("\n")
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Human-readable summary of `log`, grouped by category
pub fn summary_report(log: &RedactionLog) -> String {
    SummaryReport::from_log(log).format_console()
}
