//! Audit logging module
//!
//! Records one line per redaction run with counts and hashed values only.

pub mod logger;

pub use logger::AuditLogger;
