//! Multi-document bundles
//!
//! Several source files are combined into one text, each under a header that
//! names the file. File names can themselves carry PII (`240065_山本　百花_.txt`),
//! so every name is passed through the redactor before it is used, including
//! in error messages.

use super::reader::{read_text_document, DocumentKind};
use crate::domain::{RedactError, Result};
use crate::redaction::Redactor;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 60;

/// Combined text of several documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBundle {
    text: String,
    documents: Vec<String>,
    failures: Vec<String>,
}

impl DocumentBundle {
    /// Read every file and combine the readable ones
    ///
    /// Unreadable files are collected as `❌ {masked name}: {error}` lines.
    ///
    /// # Errors
    ///
    /// Fails when no file could be read, or when masking a file name fails.
    pub fn build<P: AsRef<Path>>(
        paths: &[P],
        redactor: &Redactor,
        max_bytes: u64,
    ) -> Result<Self> {
        let mut sections = Vec::new();
        let mut documents = Vec::new();
        let mut failures = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let masked_name = redactor.clean_name(&file_name(path))?;

            match read_text_document(path, max_bytes) {
                Ok(content) => {
                    sections.push(format_section(&masked_name, DocumentKind::Text, &content));
                    documents.push(masked_name);
                }
                Err(e) => failures.push(format!("❌ {masked_name}: {e}")),
            }
        }

        if sections.is_empty() && !failures.is_empty() {
            return Err(RedactError::Document(format!(
                "すべてのファイルの読み込みに失敗しました:\n{}",
                failures.join("\n")
            )));
        }

        if !failures.is_empty() {
            tracing::warn!(
                failed = failures.len(),
                read = documents.len(),
                "Some documents could not be read"
            );
        }

        Ok(Self {
            text: sections.join("\n\n"),
            documents,
            failures,
        })
    }

    /// Combined text, still containing PII
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Masked names of the documents included, in input order
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// `❌ {masked name}: {error}` lines for files that could not be read
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Consume the bundle, returning its text
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Header plus content for one document
pub fn format_section(masked_name: &str, kind: DocumentKind, content: &str) -> String {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    format!("{rule}\nファイル: {masked_name} (種別: {kind})\n{rule}\n{content}\n")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
