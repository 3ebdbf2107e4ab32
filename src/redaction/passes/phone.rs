//! Phone number pass
//!
//! Parenthesized area codes (`(03) 1234-5678`), fully hyphenated numbers
//! (`090-1234-5678`) and bare ten or eleven digit numbers starting with `0`.

use super::is_digit;
use crate::domain::Result;
use crate::redaction::models::RedactionCategory;
use crate::redaction::protected::ProtectedTermSet;
use crate::redaction::rule::{Candidate, Matcher, Rule};

/// Build the phone number rules
pub fn rules() -> Result<Vec<Rule>> {
    let category = RedactionCategory::PhoneNumber;

    Ok(vec![
        Rule::new(
            "phone.parenthesized",
            category,
            Matcher::linear(
                "phone.parenthesized",
                r"[(（]\d{2,4}[)）][\t\p{Zs}]*\d{2,4}[-－]\d{4}",
            )?,
        ),
        Rule::new(
            "phone.hyphenated",
            category,
            Matcher::linear("phone.hyphenated", r"\d{2,4}[-－]\d{3,4}[-－]\d{4}")?,
        )
        .with_accept(not_glued_to_digits),
        Rule::new(
            "phone.bare",
            category,
            Matcher::linear("phone.bare", r"\b0\d{9,10}\b")?,
        ),
    ])
}

/// Reject digit runs that are really part of a longer number
///
/// Dates and postal codes never reach this check: the middle group needs
/// three or four digits and three groups are required.
fn not_glued_to_digits(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    !is_digit(candidate.char_before()) && !is_digit(candidate.char_after())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::RedactionLog;
    use test_case::test_case;

    fn run(text: &str) -> (String, RedactionLog) {
        let protected = ProtectedTermSet::builtin();
        let mut log = RedactionLog::new();
        let mut current = text.to_string();
        for rule in rules().unwrap() {
            current = rule.apply(&current, &protected, &mut log).unwrap();
        }
        (current, log)
    }

    #[test_case("電話：090-1234-5678", "電話：[電話番号]" ; "mobile")]
    #[test_case("TEL 03-1234-5678", "TEL [電話番号]" ; "landline")]
    #[test_case("0120－123－4567", "[電話番号]" ; "full width hyphens")]
    #[test_case("(03) 1234-5678", "[電話番号]" ; "parenthesized area code")]
    #[test_case("（045）123-4567", "[電話番号]" ; "full width parentheses")]
    #[test_case("連絡先 09012345678 まで", "連絡先 [電話番号] まで" ; "bare mobile")]
    #[test_case("0312345678", "[電話番号]" ; "bare landline")]
    fn test_phone_numbers_are_masked(input: &str, expected: &str) {
        let (out, log) = run(input);
        assert_eq!(out, expected);
        assert_eq!(log.count(RedactionCategory::PhoneNumber), 1);
    }

    #[test_case("2023-04-15" ; "iso date")]
    #[test_case("123-4567" ; "postal code")]
    #[test_case("19123-456-7890" ; "glued digits")]
    #[test_case("1234567890" ; "bare number without leading zero")]
    #[test_case("012345678901" ; "twelve digits")]
    fn test_non_phone_numbers_survive(input: &str) {
        let (out, log) = run(input);
        assert_eq!(out, input);
        assert!(log.is_empty());
    }
}
