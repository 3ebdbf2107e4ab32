//! Ordered redaction passes
//!
//! Each pass is an ordered table of [`Rule`]s for one kind of PII. The
//! pipeline runs the passes in [`PassKind::PIPELINE_ORDER`]: structured data
//! (dates, phone numbers, addresses, IDs) is masked before names, because the
//! name rules are the least reliable and would otherwise swallow address or
//! ID text.

pub mod address;
pub mod birthdate;
pub mod medical_id;
pub mod name;
pub mod phone;

use super::config::RedactionConfig;
use super::models::RedactionLog;
use super::protected::ProtectedTermSet;
use super::rule::Rule;
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label separators: colons and horizontal whitespace, never a line break
pub(crate) const LABEL_SEPARATOR: &str = r"[：:\t\p{Zs}]*";

/// At least one horizontal whitespace character
pub(crate) const HORIZONTAL_SPACE: &str = r"[\t\p{Zs}]+";

/// Kanji range used by the name and address rules
pub(crate) const KANJI: &str = "一-龯";

/// Katakana range, including the prolonged sound mark
pub(crate) const KATAKANA: &str = "ァ-ヴー";

/// Kind of PII handled by a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// Birthdates
    Birthdate,
    /// Telephone numbers
    PhoneNumber,
    /// Postal codes and addresses
    Address,
    /// Medical IDs and patient numbers
    MedicalId,
    /// Personal names
    Name,
}

impl PassKind {
    /// The only order in which the pipeline may run
    pub const PIPELINE_ORDER: [PassKind; 5] = [
        Self::Birthdate,
        Self::PhoneNumber,
        Self::Address,
        Self::MedicalId,
        Self::Name,
    ];

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Birthdate => "birthdate",
            Self::PhoneNumber => "phone",
            Self::Address => "address",
            Self::MedicalId => "medical_id",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pass of the pipeline: a kind plus its ordered rules
#[derive(Debug)]
pub struct Pass {
    kind: PassKind,
    rules: Vec<Rule>,
}

impl Pass {
    /// Build the rule table for `kind`
    pub fn build(kind: PassKind, config: &RedactionConfig) -> Result<Self> {
        let rules = match kind {
            PassKind::Birthdate => birthdate::rules()?,
            PassKind::PhoneNumber => phone::rules()?,
            PassKind::Address => address::rules()?,
            PassKind::MedicalId => medical_id::rules()?,
            PassKind::Name => name::rules(config.bare_kanji_names)?,
        };
        Ok(Self { kind, rules })
    }

    /// Kind of this pass
    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// Rules in execution order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order, each on the previous rule's output
    pub fn apply(
        &self,
        text: &str,
        protected: &ProtectedTermSet,
        log: &mut RedactionLog,
    ) -> Result<String> {
        let before = log.len();
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule.apply(&current, protected, log)?;
        }
        tracing::debug!(
            pass = %self.kind,
            redactions = log.len() - before,
            "Pass completed"
        );
        Ok(current)
    }
}

/// Numeric value of an ASCII or full-width decimal digit
pub(crate) fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '０'..='９' => Some(c as u32 - '０' as u32),
        _ => None,
    }
}

/// Parse a run of ASCII or full-width digits
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    s.chars().try_fold(0u32, |acc, c| {
        let d = digit_value(c)?;
        acc.checked_mul(10)?.checked_add(d)
    })
}

/// Whether `c` is a decimal digit in any script
pub(crate) fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        assert_eq!(
            PassKind::PIPELINE_ORDER,
            [
                PassKind::Birthdate,
                PassKind::PhoneNumber,
                PassKind::Address,
                PassKind::MedicalId,
                PassKind::Name,
            ]
        );
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("1975"), Some(1975));
        assert_eq!(parse_digits("１９７５"), Some(1975));
        assert_eq!(parse_digits("19a5"), None);
    }

    #[test]
    fn test_every_pass_builds() {
        let config = RedactionConfig::default();
        for kind in PassKind::PIPELINE_ORDER {
            let pass = Pass::build(kind, &config).unwrap();
            assert_eq!(pass.kind(), kind);
            assert!(!pass.rules().is_empty());
        }
    }
}
