// MedRedact - PII redaction for Japanese clinical documents
// Copyright (c) 2025 MedRedact Contributors
// Licensed under the MIT License

//! # MedRedact - PII redaction for Japanese clinical documents
//!
//! MedRedact masks personally identifying information in Japanese medical
//! text (referral letters, discharge summaries, nursing notes) before the
//! text leaves the clinic, for example to be pasted into an LLM prompt.
//!
//! ## Overview
//!
//! Masking runs five passes in a fixed order:
//!
//! 1. **Birthdate** - labelled dates, Gregorian and Japanese-era dates
//! 2. **Phone number** - parenthesized, hyphenated and bare numbers
//! 3. **Address** - postal codes, labelled addresses, prefecture-led addresses
//! 4. **Medical ID** - patient numbers and chart IDs
//! 5. **Name** - labelled names and names embedded in file names
//!
//! Each match is replaced by a fixed placeholder (`[氏名]`, `[住所]`, ...) and
//! recorded in a log. Medical vocabulary on the protected list is never
//! masked.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`redaction`] - Rules, passes, the redactor, reports and audit trail
//! - [`document`] - Reading text documents and bundling them for one run
//! - [`domain`] - Error and result types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use medredact::redaction::{summary_report, Redactor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let redactor = Redactor::builtin()?;
//! let result = redactor.clean_text("患者氏名：田中太郎\n電話：090-1234-5678")?;
//!
//! assert_eq!(result.masked_text, "患者氏名：[氏名]\n電話：[電話番号]");
//! assert_eq!(result.log.len(), 2);
//! println!("{}", summary_report(&result.log));
//! # Ok(())
//! # }
//! ```
//!
//! ## Documents
//!
//! ```rust,no_run
//! use medredact::document::{DocumentBundle, DEFAULT_MAX_BYTES};
//! use medredact::redaction::Redactor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let redactor = Redactor::builtin()?;
//! let bundle = DocumentBundle::build(&["紹介状.txt", "退院サマリー.txt"], &redactor, DEFAULT_MAX_BYTES)?;
//! let result = redactor.clean_text(bundle.text())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with a [`domain::RedactError`].
//! The CLI layer wraps these in `anyhow` and maps them to exit codes.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod logging;
pub mod redaction;
