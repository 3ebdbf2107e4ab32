//! Integration tests for the clean command

use medredact::cli::commands::clean::CleanArgs;
use medredact::config::MedRedactConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn clean_args(files: Vec<PathBuf>) -> CleanArgs {
    CleanArgs {
        files,
        output: None,
        output_dir: None,
        dry_run: false,
        json: false,
        bare_kanji_names: false,
    }
}

#[tokio::test]
async fn test_clean_writes_audit_without_plaintext() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("240065_紹介状.txt");
    let output = dir.path().join("masked.txt");
    let audit_path = dir.path().join("audit").join("redaction.log");
    fs::write(&input, "患者氏名：田中太郎\n生年月日：1975年3月9日").unwrap();

    let mut config = MedRedactConfig::default();
    config.audit.enabled = true;
    config.audit.log_path = audit_path.clone();

    let mut args = clean_args(vec![input]);
    args.output = Some(output.clone());

    assert_eq!(args.execute(config).await.unwrap(), 0);

    let masked = fs::read_to_string(&output).unwrap();
    assert!(masked.contains("患者氏名：[氏名]\n生年月日：[生年月日]"));

    let audit = fs::read_to_string(&audit_path).unwrap();
    let entry: serde_json::Value = serde_json::from_str(audit.lines().next().unwrap()).unwrap();
    assert_eq!(entry["source"], "[患者番号]_紹介状.txt");
    assert_eq!(entry["redactions_count"], 2);

    for pii in ["田中太郎", "1975年3月9日", "240065"] {
        assert!(!audit.contains(pii), "audit leaked: {pii}");
    }
}

#[tokio::test]
async fn test_per_file_mode_handles_name_collisions() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let a = dir.path().join("111111_経過.txt");
    let b = dir.path().join("222222_経過.txt");
    fs::write(&a, "電話：090-1111-2222").unwrap();
    fs::write(&b, "電話：090-3333-4444").unwrap();

    let mut config = MedRedactConfig::default();
    config.audit.log_path = dir.path().join("audit.log");

    let mut args = clean_args(vec![a, b]);
    args.output_dir = Some(out.clone());
    args.json = true;

    assert_eq!(args.execute(config).await.unwrap(), 0);

    assert_eq!(
        fs::read_to_string(out.join("[患者番号]_経過.txt")).unwrap(),
        "電話：[電話番号]"
    );
    assert_eq!(
        fs::read_to_string(out.join("[患者番号]_経過-2.txt")).unwrap(),
        "電話：[電話番号]"
    );
    assert!(!dir.path().join("audit.log").exists());
}

#[tokio::test]
async fn test_per_file_mode_skips_unreadable_files() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let good = dir.path().join("good.txt");
    fs::write(&good, "特記事項なし").unwrap();

    let mut args = clean_args(vec![good, dir.path().join("scan.pdf")]);
    args.output_dir = Some(out.clone());

    assert_eq!(args.execute(MedRedactConfig::default()).await.unwrap(), 0);
    assert!(out.join("good.txt").exists());
    assert!(!out.join("scan.pdf").exists());
}

#[tokio::test]
async fn test_bare_kanji_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("note.txt");
    let output = dir.path().join("masked.txt");
    fs::write(&input, "担当は鈴木一郎です").unwrap();

    let mut args = clean_args(vec![input]);
    args.output = Some(output.clone());
    args.bare_kanji_names = true;

    assert_eq!(args.execute(MedRedactConfig::default()).await.unwrap(), 0);
    assert!(fs::read_to_string(&output)
        .unwrap()
        .contains("担当は[氏名]です"));
}
