//! Address pass
//!
//! Postal codes first, then explicit `住所` labels, then free-standing
//! addresses led by a prefecture name. The two address rules skip text that
//! already holds a placeholder, so running the pass twice changes nothing.

use super::{is_digit, KANJI, KATAKANA, LABEL_SEPARATOR};
use crate::domain::Result;
use crate::redaction::models::RedactionCategory;
use crate::redaction::protected::ProtectedTermSet;
use crate::redaction::rule::{Candidate, Matcher, Rewrite, Rule};

/// The 47 prefectures, without their 都/道/府/県 suffix
pub const PREFECTURES: [&str; 47] = [
    "北海道", "青森", "岩手", "宮城", "秋田", "山形", "福島", "茨城", "栃木", "群馬", "埼玉",
    "千葉", "東京", "神奈川", "新潟", "富山", "石川", "福井", "山梨", "長野", "岐阜", "静岡",
    "愛知", "三重", "滋賀", "京都", "大阪", "兵庫", "奈良", "和歌山", "鳥取", "島根", "岡山",
    "広島", "山口", "徳島", "香川", "愛媛", "高知", "福岡", "佐賀", "長崎", "熊本", "大分",
    "宮崎", "鹿児島", "沖縄",
];

/// Build the address rules
pub fn rules() -> Result<Vec<Rule>> {
    let label = format!(r"住所{sep}([^\r\n]+)", sep = LABEL_SEPARATOR);

    let prefecture = format!(
        r"(?:{prefectures})(?:都|道|府|県)?[{kanji}ぁ-ん{katakana}]+[市区町村郡][{kanji}ぁ-ん{katakana}0-9０-９\-－]+",
        prefectures = PREFECTURES.join("|"),
        kanji = KANJI,
        katakana = KATAKANA,
    );

    Ok(vec![
        Rule::new(
            "address.postal",
            RedactionCategory::PostalCode,
            Matcher::linear(
                "address.postal",
                r"〒[\t\p{Zs}]*\d{3}[-－]?\d{4}|\d{3}[-－]\d{4}",
            )?,
        )
        .with_accept(standalone_postal_code),
        Rule::new(
            "address.label",
            RedactionCategory::Address,
            Matcher::linear("address.label", &label)?,
        )
        .with_rewrite(Rewrite::Fixed("住所：[住所]"))
        .with_value_group(1)
        .with_accept(unmasked_label_value),
        Rule::new(
            "address.prefecture",
            RedactionCategory::Address,
            Matcher::linear("address.prefecture", &prefecture)?,
        )
        .with_accept(unmasked_span),
    ])
}

fn standalone_postal_code(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    !is_digit(candidate.char_before()) && !is_digit(candidate.char_after())
}

fn unmasked_label_value(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    if RedactionCategory::contains_placeholder(candidate.line()) {
        return false;
    }
    candidate
        .group(1)
        .map(|value| value.trim_matches(|c: char| c == '：' || c == ':' || c.is_whitespace()))
        .is_some_and(|value| !value.is_empty())
}

fn unmasked_span(candidate: &Candidate<'_>, _: &ProtectedTermSet) -> bool {
    !RedactionCategory::contains_placeholder(candidate.as_str())
}
