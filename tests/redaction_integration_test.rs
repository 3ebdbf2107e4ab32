//! End-to-end tests for the redaction pipeline

use medredact::redaction::{
    summary_report, RedactionCategory, RedactionConfig, Redactor, SummaryReport,
};
use std::sync::Arc;
use std::thread;

const REFERRAL: &str = "
    患者氏名：田中太郎
    生年月日：1975年3月9日
    住所：東京都渋谷区神南1-2-3
    電話番号：03-1234-5678
    診察券番号：123456

    診断名：統合失調症
    2020年4月頃より幻聴と被害念慮が出現。
    リスペリドン3mg/日で治療中。
    ";

const REFERRAL_MASKED: &str = "
    患者氏名：[氏名]
    生年月日：[生年月日]
    住所：[住所]
    電話番号：[電話番号]
    [ID]

    診断名：統合失調症
    2020年4月頃より幻聴と被害念慮が出現。
    リスペリドン3mg/日で治療中。
    ";

fn redactor() -> Redactor {
    Redactor::builtin().expect("Failed to build redactor")
}

#[test]
fn test_referral_letter() {
    let result = redactor().clean_text(REFERRAL).unwrap();
    assert_eq!(result.masked_text, REFERRAL_MASKED);

    let entries: Vec<_> = result
        .log
        .iter()
        .map(|e| (e.category, e.original_value.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (RedactionCategory::Birthdate, "1975年3月9日"),
            (RedactionCategory::PhoneNumber, "03-1234-5678"),
            (RedactionCategory::Address, "東京都渋谷区神南1-2-3"),
            (RedactionCategory::Id, "診察券番号：123456"),
            (RedactionCategory::Name, "田中太郎"),
        ]
    );
}

#[test]
fn test_category_literals() {
    let redactor = redactor();
    let cases = [
        ("生年月日：1975年3月9日", "生年月日：[生年月日]"),
        ("住所：東京都渋谷区神南1-2-3", "住所：[住所]"),
        ("電話番号：03-1234-5678", "電話番号：[電話番号]"),
        ("診察券番号：123456", "[ID]"),
        ("患者氏名：田中太郎", "患者氏名：[氏名]"),
    ];

    for (input, expected) in cases {
        let result = redactor.clean_text(input).unwrap();
        assert_eq!(result.masked_text, expected, "input: {input}");
        assert_eq!(result.log.len(), 1, "input: {input}");
    }
}

#[test]
fn test_birthdate_log_value() {
    let result = redactor().clean_text("生年月日：1975年3月9日").unwrap();
    assert_eq!(
        result.log.values_for(RedactionCategory::Birthdate),
        vec!["1975年3月9日"]
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let redactor = redactor();
    let first = redactor.clean_text(REFERRAL).unwrap();
    let second = redactor.clean_text(&first.masked_text).unwrap();

    assert_eq!(second.masked_text, first.masked_text);
    assert!(second.log.is_empty());
}

#[test]
fn test_file_name_masking() {
    let redactor = redactor();
    assert_eq!(
        redactor.clean_name("240065_山本　百花_.txt").unwrap(),
        "[患者番号]_[氏名]_.txt"
    );
    assert_eq!(
        redactor.clean_name("紹介状_大阪府大阪市北区梅田_.txt").unwrap(),
        "紹介状_[住所]_.txt"
    );
    assert_eq!(redactor.clean_name("経過記録.txt").unwrap(), "経過記録.txt");
}

#[test]
fn test_summary_report_for_referral() {
    let result = redactor().clean_text(REFERRAL).unwrap();
    let report = summary_report(&result.log);

    assert!(report.starts_with("=== 削除した個人情報 ==="));
    assert!(report.contains("\n生年月日: 1件\n  1. 1975年3月9日"));
    assert!(report.contains("\n氏名: 1件\n  1. 田中太郎"));

    let birthdate = report.find("生年月日:").unwrap();
    let name = report.find("氏名:").unwrap();
    assert!(birthdate < name);
}

#[test]
fn test_summary_report_truncates_long_categories() {
    let text = "電話：090-1111-2222\n電話：090-3333-4444\n電話：090-5555-6666\n電話：090-7777-8888\n電話：090-9999-0000";
    let result = redactor().clean_text(text).unwrap();
    let report = summary_report(&result.log);

    assert!(report.contains("電話番号: 5件"));
    assert!(report.contains("  3. 090-5555-6666"));
    assert!(!report.contains("090-7777-8888"));
    assert!(report.contains("  ... 他 2件"));
}

#[test]
fn test_summary_report_empty() {
    let result = redactor().clean_text("特記事項なし").unwrap();
    assert!(!result.has_redactions());
    assert_eq!(summary_report(&result.log), "個人情報は検出されませんでした。");
}

#[test]
fn test_summary_report_json() {
    let result = redactor().clean_text(REFERRAL).unwrap();
    let report = SummaryReport::from_log(&result.log);
    let json: serde_json::Value = serde_json::from_str(&report.format_json().unwrap()).unwrap();

    assert_eq!(json["total"], 5);
    assert_eq!(json["categories"][0]["category"], "birthdate");
    assert_eq!(json["categories"][0]["label"], "生年月日");
}

#[test]
fn test_additional_protected_terms() {
    let config = RedactionConfig {
        bare_kanji_names: false,
        additional_protected_terms: vec!["山田".to_string()],
    };
    let redactor = Redactor::new(&config).unwrap();

    let result = redactor.clean_text("患者氏名：山田花子").unwrap();
    assert_eq!(result.masked_text, "患者氏名：山田花子");
    assert!(result.log.is_empty());

    let builtin = Redactor::builtin().unwrap();
    assert_eq!(
        builtin.clean_text("患者氏名：山田花子").unwrap().masked_text,
        "患者氏名：[氏名]"
    );
}

#[test]
fn test_shared_redactor_keeps_logs_separate() {
    let redactor = Arc::new(redactor());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let redactor = Arc::clone(&redactor);
            thread::spawn(move || {
                let text = format!("電話番号：090-1234-{:04}", 1000 + i);
                redactor.clean_text(&text).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.masked_text, "電話番号：[電話番号]");
        assert_eq!(
            result.log.values_for(RedactionCategory::PhoneNumber),
            vec![format!("090-1234-{:04}", 1000 + i)]
        );
    }
}
