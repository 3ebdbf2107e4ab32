//! PII redaction for Japanese clinical text
//!
//! The pipeline is an ordered rewrite system: five passes (birthdate, phone,
//! address, medical ID, name) each run an ordered table of regex rules over
//! the output of the previous one. Every accepted match is replaced by a fixed
//! placeholder such as `[氏名]` and recorded in a [`RedactionLog`].
//!
//! # Architecture
//!
//! - **Rules**: matcher, acceptance predicate and rewrite mode ([`rule`])
//! - **Passes**: per-category rule tables in fixed order ([`passes`])
//! - **Protected terms**: medical vocabulary that is never masked ([`protected`])
//! - **Report/Audit**: human summary and hashed audit trail
//!
//! # Usage
//!
//! ```
//! use medredact::redaction::{summary_report, Redactor};
//!
//! # fn example() -> medredact::domain::Result<()> {
//! let redactor = Redactor::builtin()?;
//! let result = redactor.clean_text("生年月日：1975年3月9日")?;
//!
//! assert_eq!(result.masked_text, "生年月日：[生年月日]");
//! println!("{}", summary_report(&result.log));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod models;
pub mod passes;
pub mod protected;
pub mod report;
pub mod rule;

pub use config::{AuditConfig, RedactionConfig};
pub use engine::Redactor;
pub use models::{RedactionCategory, RedactionLog, RedactionLogEntry, RedactionResult};
pub use protected::ProtectedTermSet;
pub use report::{summary_report, SummaryReport};
