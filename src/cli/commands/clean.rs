//! Clean command implementation
//!
//! This module implements the `clean` command, which masks PII in text
//! documents. By default every input is combined into one bundle, cleaned in
//! a single run and written to stdout (or `--output`), with the summary report
//! on stderr. With `--output-dir` each document is cleaned on its own and
//! written under its masked file name.

use crate::config::MedRedactConfig;
use crate::document::{read_text_document, DocumentBundle};
use crate::redaction::audit::AuditLogger;
use crate::redaction::{RedactionResult, Redactor, SummaryReport};
use crate::{log_clean_complete, log_clean_start};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Text documents to clean (.txt)
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Write the masked bundle to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Clean each document separately and write it into this directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report what would be masked without writing masked text
    #[arg(long)]
    pub dry_run: bool,

    /// Print the summary report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable the bare kanji full-name heuristic
    #[arg(long)]
    pub bare_kanji_names: bool,
}

/// Summary for one document cleaned in per-file mode
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    report: SummaryReport,
}

/// A document cleaned in per-file mode
struct CleanedFile {
    source: PathBuf,
    masked_name: String,
    result: RedactionResult,
}

impl CleanArgs {
    /// Execute the clean command
    pub async fn execute(&self, mut config: MedRedactConfig) -> anyhow::Result<i32> {
        if self.bare_kanji_names {
            tracing::info!("Enabling bare kanji name rule from CLI");
            config.redaction.bare_kanji_names = true;
        }
        let dry_run = self.dry_run || config.application.dry_run;

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let redactor = Arc::new(
            Redactor::new(&config.redaction).context("Failed to build redaction rules")?,
        );
        let audit = AuditLogger::new(
            config.audit.log_path.clone(),
            config.audit.json_format,
            config.audit.enabled,
        )?;

        if dry_run {
            tracing::info!("Dry run mode enabled - no masked text will be written");
        }

        match &self.output_dir {
            Some(dir) => {
                self.clean_each(redactor, &audit, dir, config.input.max_bytes(), dry_run)
                    .await
            }
            None => self.clean_bundle(&redactor, &audit, config.input.max_bytes(), dry_run),
        }
    }

    /// Combine every input into one text and clean it in a single run
    fn clean_bundle(
        &self,
        redactor: &Redactor,
        audit: &AuditLogger,
        max_bytes: u64,
        dry_run: bool,
    ) -> anyhow::Result<i32> {
        let start = Instant::now();
        log_clean_start!(self.files.len(), "bundle");

        let bundle = match DocumentBundle::build(&self.files, redactor, max_bytes) {
            Ok(bundle) => bundle,
            Err(e) => {
                tracing::error!(error = %e, "No document could be read");
                eprintln!("{e}");
                return Ok(5);
            }
        };

        if !bundle.failures().is_empty() {
            eprintln!(
                "⚠️  一部のファイルの読み込みに失敗しました:\n{}",
                bundle.failures().join("\n")
            );
        }

        let result = redactor.clean_text(bundle.text())?;
        audit.log_redaction(&bundle.documents().join(", "), &result.log)?;

        let report = SummaryReport::from_log(&result.log);
        let report_text = self.render_report(&report)?;

        if dry_run {
            println!("{report_text}");
        } else {
            match &self.output {
                Some(path) => {
                    fs::write(path, &result.masked_text).with_context(|| {
                        format!("Failed to write masked text: {}", path.display())
                    })?;
                    tracing::info!(output = %path.display(), "Masked text written");
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(result.masked_text.as_bytes())?;
                    stdout.flush()?;
                }
            }
            eprintln!("{report_text}");
        }

        log_clean_complete!(bundle.documents().len(), result.log.len(), start.elapsed());
        Ok(0)
    }

    /// Clean every input independently and concurrently
    async fn clean_each(
        &self,
        redactor: Arc<Redactor>,
        audit: &AuditLogger,
        dir: &Path,
        max_bytes: u64,
        dry_run: bool,
    ) -> anyhow::Result<i32> {
        let start = Instant::now();
        log_clean_start!(self.files.len(), "per-file");

        if !dry_run {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }

        let handles: Vec<_> = self
            .files
            .iter()
            .cloned()
            .map(|path| {
                let redactor = Arc::clone(&redactor);
                tokio::task::spawn_blocking(move || clean_file(&redactor, path, max_bytes))
            })
            .collect();

        let mut reports = Vec::new();
        let mut failures = Vec::new();
        let mut used_names = HashSet::new();
        let mut total_redactions = 0;

        for handle in handles {
            let cleaned = match handle.await? {
                Ok(cleaned) => cleaned,
                Err(failure) => {
                    failures.push(failure);
                    continue;
                }
            };

            let output = if dry_run {
                None
            } else {
                let target = unique_output_path(dir, &cleaned.masked_name, &mut used_names);
                if is_same_file(&target, &cleaned.source) {
                    failures.push(format!(
                        "❌ {}: 出力先が入力ファイルと同じです",
                        cleaned.masked_name
                    ));
                    continue;
                }
                fs::write(&target, &cleaned.result.masked_text).with_context(|| {
                    format!("Failed to write masked text: {}", target.display())
                })?;
                Some(target)
            };

            audit.log_redaction(&cleaned.masked_name, &cleaned.result.log)?;
            total_redactions += cleaned.result.log.len();

            reports.push(FileReport {
                file: cleaned.masked_name,
                output,
                report: SummaryReport::from_log(&cleaned.result.log),
            });
        }

        self.print_file_reports(&reports, dry_run)?;

        if !failures.is_empty() {
            eprintln!(
                "⚠️  一部のファイルの処理に失敗しました:\n{}",
                failures.join("\n")
            );
        }

        log_clean_complete!(reports.len(), total_redactions, start.elapsed());

        if reports.is_empty() {
            return Ok(5);
        }
        Ok(0)
    }

    fn print_file_reports(&self, reports: &[FileReport], dry_run: bool) -> anyhow::Result<()> {
        let rendered = if self.json {
            serde_json::to_string_pretty(reports)?
        } else {
            reports
                .iter()
                .map(|r| {
                    let mut section = format!("ファイル: {}\n", r.file);
                    if let Some(output) = &r.output {
                        section.push_str(&format!("出力: {}\n", output.display()));
                    }
                    section.push_str(&r.report.format_console());
                    section
                })
                .collect::<Vec<_>>()
                .join("\n\n")
        };

        if dry_run {
            println!("{rendered}");
        } else {
            eprintln!("{rendered}");
        }
        Ok(())
    }

    fn render_report(&self, report: &SummaryReport) -> anyhow::Result<String> {
        if self.json {
            Ok(report.format_json()?)
        } else {
            Ok(report.format_console())
        }
    }
}

/// Read and clean one document; failures come back as `❌ {masked name}: {error}`
fn clean_file(redactor: &Redactor, path: PathBuf, max_bytes: u64) -> Result<CleanedFile, String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let masked_name = redactor
        .clean_name(&name)
        .map_err(|e| format!("❌ [ファイル名]: {e}"))?;

    let content =
        read_text_document(&path, max_bytes).map_err(|e| format!("❌ {masked_name}: {e}"))?;
    let result = redactor
        .clean_text(&content)
        .map_err(|e| format!("❌ {masked_name}: {e}"))?;

    Ok(CleanedFile {
        source: path,
        masked_name,
        result,
    })
}

/// `dir/name`, with `-2`, `-3` ... before the extension when the name is taken
fn unique_output_path(dir: &Path, name: &str, used: &mut HashSet<String>) -> PathBuf {
    if used.insert(name.to_string()) {
        return dir.join(name);
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    let mut n = 2;
    loop {
        let candidate = match ext {
            Some(ext) => format!("{stem}-{n}.{ext}"),
            None => format!("{stem}-{n}"),
        };
        if used.insert(candidate.clone()) {
            return dir.join(candidate);
        }
        n += 1;
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
