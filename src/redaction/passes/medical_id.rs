//! Medical ID pass

use super::LABEL_SEPARATOR;
use crate::domain::Result;
use crate::redaction::models::RedactionCategory;
use crate::redaction::protected::ProtectedTermSet;
use crate::redaction::rule::{Candidate, Matcher, Rewrite, Rule};

/// Build the medical ID rules
///
/// Labelled identifiers become `[ID]` together with their label. A run of
/// four to eight digits directly followed by `_` is the file-name patient
/// number convention: the digits become `[患者番号]` and the underscore stays.
pub fn rules() -> Result<Vec<Rule>> {
    let label = format!(
        r"(?:診察券(?:番号)?|患者ID|患者番号|カルテ番号){sep}[\w\-]+",
        sep = LABEL_SEPARATOR
    );
    let bare_label = format!(r"ID{sep}[\w\-]+", sep = LABEL_SEPARATOR);
    let patient_number_label = format!(r"患者番号{sep}\d{{4,8}}", sep = LABEL_SEPARATOR);

    Ok(vec![
        Rule::new(
            "id.label",
            RedactionCategory::Id,
            Matcher::linear("id.label", &label)?,
        ),
        Rule::new(
            "id.bare_label",
            RedactionCategory::Id,
            Matcher::linear("id.bare_label", &bare_label)?,
        )
        .with_accept(standalone_id_label),
        Rule::new(
            "id.patient_number_label",
            RedactionCategory::Id,
            Matcher::linear("id.patient_number_label", &patient_number_label)?,
        ),
        Rule::new(
            "id.filename_patient_number",
            RedactionCategory::PatientNumber,
            Matcher::linear("id.filename_patient_number", r"\b(\d{4,8})_")?,
        )
        .with_rewrite(Rewrite::Group(1))
        .with_value_group(1),
    ])
}

// `UUID:...` and similar words ending in "ID" are not labels
fn standalone_id_label(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    !candidate
        .char_before()
        .is_some_and(|c| c.is_ascii_alphabetic())
}
