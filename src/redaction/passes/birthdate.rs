//! Birthdate pass
//!
//! Rules, in order:
//! 1. `生年月日` label followed by at least six date characters
//! 2. Gregorian year with era annotation: `2003(H15)/10/19`
//! 3. Full Gregorian date with a plausible birth year (1900–2029)
//! 4. Full era date, kanji (`昭和60年3月9日`) or Latin (`S60.3.9`) form
//!
//! Partial dates such as `平成20年頃` or `2020年4月` are never matched.

use super::{is_digit, parse_digits, LABEL_SEPARATOR};
use crate::domain::Result;
use crate::redaction::models::RedactionCategory;
use crate::redaction::protected::ProtectedTermSet;
use crate::redaction::rule::{Candidate, Matcher, Rewrite, Rule};
use std::ops::RangeInclusive;

/// Years accepted by the full Gregorian date rule
pub const BIRTH_YEAR_RANGE: RangeInclusive<u32> = 1900..=2029;

/// Build the birthdate rules
pub fn rules() -> Result<Vec<Rule>> {
    let category = RedactionCategory::Birthdate;

    let label = format!(
        r"生年月日{sep}([\d年月日明大昭平令和MTSHR./\-()]{{6,}})",
        sep = LABEL_SEPARATOR
    );

    Ok(vec![
        Rule::new(
            "birthdate.label",
            category,
            Matcher::linear("birthdate.label", &label)?,
        )
        .with_rewrite(Rewrite::Fixed("生年月日：[生年月日]"))
        .with_value_group(1),
        Rule::new(
            "birthdate.composite",
            category,
            Matcher::linear(
                "birthdate.composite",
                r"\d{4}[(（][MTSHR]\d{1,3}[)）][/\-.]\d{1,2}[/\-.]\d{1,2}",
            )?,
        ),
        Rule::new(
            "birthdate.gregorian",
            category,
            Matcher::linear(
                "birthdate.gregorian",
                r"(\d{4})[年/\-.]\d{1,2}[月/\-.]\d{1,2}日?",
            )?,
        )
        .with_accept(plausible_birth_year),
        Rule::new(
            "birthdate.era_kanji",
            category,
            Matcher::linear(
                "birthdate.era_kanji",
                r"(?:明治|大正|昭和|平成|令和|[明大昭平令])(?:\d{1,3}|元)[年.．]\d{1,2}[月.．]\d{1,2}日?",
            )?,
        ),
        Rule::new(
            "birthdate.era_latin",
            category,
            Matcher::linear(
                "birthdate.era_latin",
                r"[MTSHR]\d{1,3}[./]\d{1,2}[./]\d{1,2}",
            )?,
        )
        .with_accept(standalone_era_letter),
    ])
}

fn plausible_birth_year(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    if is_digit(candidate.char_before()) {
        return false;
    }
    candidate
        .group(1)
        .and_then(parse_digits)
        .is_some_and(|year| BIRTH_YEAR_RANGE.contains(&year))
}

fn standalone_era_letter(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    !candidate
        .char_before()
        .is_some_and(|c| c.is_ascii_alphanumeric())
}
