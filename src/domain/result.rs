//! Result type alias for MedRedact

use super::errors::RedactError;

/// Result type alias for MedRedact operations
///
/// # Examples
///
/// ```
/// use medredact::domain::result::Result;
/// use medredact::domain::errors::RedactError;
///
/// fn failing_function() -> Result<()> {
///     Err(RedactError::Document("unsupported file".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedactError>;
