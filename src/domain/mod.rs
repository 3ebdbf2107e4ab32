//! Domain types for MedRedact.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, RedactError>`]:
//!
//! ```rust
//! use medredact::domain::{RedactError, Result};
//! use medredact::redaction::Redactor;
//!
//! fn example() -> Result<()> {
//!     let redactor = Redactor::builtin()?;
//!     let result = redactor.clean_text("患者氏名：田中太郎")?;
//!     assert_eq!(result.masked_text, "患者氏名：[氏名]");
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::RedactError;
pub use result::Result;
