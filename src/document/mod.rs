//! Document supply
//!
//! Reads source documents and combines them into one text for redaction.
//! Only plain text files are supported, in UTF-8 or a Japanese legacy encoding.

pub mod bundle;
pub mod reader;

pub use bundle::DocumentBundle;
pub use reader::{read_text_document, DocumentKind, DEFAULT_MAX_BYTES};
