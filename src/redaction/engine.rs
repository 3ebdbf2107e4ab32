//! Redaction engine
//!
//! [`Redactor`] owns the ordered pass table and the protected vocabulary. It
//! is immutable once built: every [`clean_text`](Redactor::clean_text) call
//! starts a fresh [`RedactionLog`], so one instance can be shared across
//! threads behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use medredact::redaction::{RedactionCategory, Redactor};
//!
//! # fn example() -> medredact::domain::Result<()> {
//! let redactor = Redactor::builtin()?;
//! let result = redactor.clean_text("電話番号：03-1234-5678")?;
//!
//! assert_eq!(result.masked_text, "電話番号：[電話番号]");
//! assert_eq!(result.log.count(RedactionCategory::PhoneNumber), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::config::RedactionConfig;
use super::models::{RedactionLog, RedactionResult};
use super::passes::{Pass, PassKind};
use super::protected::ProtectedTermSet;
use crate::domain::Result;
use std::time::Instant;

/// Multi-pass PII redactor
#[derive(Debug)]
pub struct Redactor {
    passes: Vec<Pass>,
    protected: ProtectedTermSet,
}

impl Redactor {
    /// Build a redactor from configuration
    ///
    /// # Errors
    ///
    /// Returns [`RedactError::Pattern`](crate::domain::RedactError::Pattern)
    /// if a rule pattern fails to compile.
    pub fn new(config: &RedactionConfig) -> Result<Self> {
        let passes = PassKind::PIPELINE_ORDER
            .into_iter()
            .map(|kind| Pass::build(kind, config))
            .collect::<Result<Vec<_>>>()?;

        let protected = ProtectedTermSet::with_additional(&config.additional_protected_terms);

        tracing::debug!(
            passes = passes.len(),
            protected_terms = protected.len(),
            bare_kanji_names = config.bare_kanji_names,
            "Redactor initialized"
        );

        Ok(Self { passes, protected })
    }

    /// Redactor with the default configuration
    pub fn builtin() -> Result<Self> {
        Self::new(&RedactionConfig::default())
    }

    /// Passes in execution order
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Protected vocabulary used by the name rules
    pub fn protected_terms(&self) -> &ProtectedTermSet {
        &self.protected
    }

    /// Mask every detected PII span in `text`
    ///
    /// # Errors
    ///
    /// Returns [`RedactError::Matching`](crate::domain::RedactError::Matching)
    /// when a backtracking matcher gives up on the input. No partial result
    /// is returned in that case.
    pub fn clean_text(&self, text: &str) -> Result<RedactionResult> {
        let start = Instant::now();
        let mut log = RedactionLog::new();
        let mut current = text.to_string();

        for pass in &self.passes {
            current = pass.apply(&current, &self.protected, &mut log)?;
        }

        tracing::debug!(
            input_chars = text.chars().count(),
            redactions = log.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Text cleaned"
        );

        Ok(RedactionResult {
            masked_text: current,
            log,
        })
    }

    /// Mask a file name, discarding the log
    pub fn clean_name(&self, name: &str) -> Result<String> {
        Ok(self.clean_text(name)?.masked_text)
    }
}
