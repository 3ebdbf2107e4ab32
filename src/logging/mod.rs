//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - Console output on stderr, filtered by level or `RUST_LOG`
//! - Optional JSON log files with rotation
//!
//! Log events carry counts, rule names and masked file names only. Original
//! PII values never reach the log.
//!
//! # Example
//!
//! ```no_run
//! use medredact::logging::init_logging;
//! use medredact::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a cleaning run
///
/// # Example
///
/// ```no_run
/// use medredact::log_clean_start;
///
/// log_clean_start!(3, "bundle");
/// ```
#[macro_export]
macro_rules! log_clean_start {
    ($files:expr, $mode:expr) => {
        tracing::info!(files = $files, mode = $mode, "Starting clean");
    };
}

/// Log the completion of a cleaning run
///
/// # Example
///
/// ```no_run
/// use medredact::log_clean_complete;
/// use std::time::Duration;
///
/// log_clean_complete!(3, 12, Duration::from_millis(40));
/// ```
#[macro_export]
macro_rules! log_clean_complete {
    ($documents:expr, $redactions:expr, $duration:expr) => {
        tracing::info!(
            documents = $documents,
            redactions = $redactions,
            duration_ms = $duration.as_millis() as u64,
            "Clean completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use medredact::log_error_with_context;
/// use medredact::domain::RedactError;
///
/// let error = RedactError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
