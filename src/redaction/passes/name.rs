//! Name pass
//!
//! The least reliable pass, so it runs last. Every rule captures the name in
//! group 1 and masks it only when it contains no protected term and has at
//! least two non-space characters.
//!
//! The bare kanji full-name heuristic (`田中太郎` with no label or delimiter)
//! produces too many false positives on clinical narrative. It is kept as an
//! explicit rule that stays disabled unless `bare_kanji_names` is set.

use super::{HORIZONTAL_SPACE, KANJI, KATAKANA, LABEL_SEPARATOR};
use crate::domain::Result;
use crate::redaction::models::RedactionCategory;
use crate::redaction::protected::ProtectedTermSet;
use crate::redaction::rule::{Candidate, Matcher, Rewrite, Rule};

/// Minimum non-space length of a delimited name
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum length of a bare kanji full name
pub const MIN_BARE_NAME_CHARS: usize = 4;

/// One or two kanji/katakana tokens, optionally separated by spaces
fn name_pattern() -> String {
    format!(
        r"[{k}{kt}]{{1,5}}{sp}[{k}{kt}]{{1,5}}|[{k}{kt}]{{2,10}}",
        k = KANJI,
        kt = KATAKANA,
        sp = HORIZONTAL_SPACE,
    )
}

/// Build the name rules
pub fn rules(bare_kanji_names: bool) -> Result<Vec<Rule>> {
    let name = name_pattern();
    let category = RedactionCategory::Name;

    let label = format!(
        r"(?:患者)?氏名{sep}({name})(?:\s|/|$)",
        sep = LABEL_SEPARATOR
    );
    let filename = format!(r"_({name})_");
    let after_id = format!(r"\[(?:患者番号|ID)\]_?({name})_");
    let after_number = format!(
        r"\d+([{k}]{{1,5}}{sp}[{k}]{{1,5}})(?:\s|$)",
        k = KANJI,
        sp = HORIZONTAL_SPACE,
    );
    let bare = format!(
        r"(?<![{k}])[{k}]{{2,4}}\s*[{k}]{{2,3}}(?![{k}])",
        k = KANJI
    );

    Ok(vec![
        Rule::new("name.label", category, Matcher::linear("name.label", &label)?)
            .with_rewrite(Rewrite::Group(1))
            .with_value_group(1)
            .with_accept(plausible_name),
        Rule::new(
            "name.filename",
            category,
            Matcher::linear("name.filename", &filename)?,
        )
        .with_rewrite(Rewrite::Fixed("_[氏名]_"))
        .with_value_group(1)
        .with_accept(plausible_name),
        Rule::new(
            "name.after_id",
            category,
            Matcher::linear("name.after_id", &after_id)?,
        )
        .with_rewrite(Rewrite::Group(1))
        .with_value_group(1)
        .with_accept(plausible_name),
        Rule::new(
            "name.after_number",
            category,
            Matcher::linear("name.after_number", &after_number)?,
        )
        .with_rewrite(Rewrite::Group(1))
        .with_value_group(1)
        .with_accept(plausible_name),
        Rule::new(
            "name.bare_kanji",
            category,
            Matcher::backtracking("name.bare_kanji", &bare)?,
        )
        .with_accept(plausible_bare_name)
        .with_enabled(bare_kanji_names),
    ])
}

fn plausible_name(candidate: &Candidate<'_>, protected: &ProtectedTermSet) -> bool {
    let Some(name) = candidate.group(1).map(str::trim) else {
        return false;
    };
    !protected.is_protected(name)
        && name.chars().filter(|c| !c.is_whitespace()).count() >= MIN_NAME_CHARS
}

fn plausible_bare_name(candidate: &Candidate<'_>, protected: &ProtectedTermSet) -> bool {
    let name = candidate.as_str();
    !protected.is_protected(name) && name.chars().count() >= MIN_BARE_NAME_CHARS
}
