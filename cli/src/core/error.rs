//! # codetidy Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout codetidy. It follows a
//! two-layer approach:
//! - `CodetidyError`: a `thiserror` enum naming the failure kinds that callers
//!   may want to tell apart (archive parsing, configuration, templating, ...)
//! - `Result<T>`: an alias for `anyhow::Result<T>` so any function can attach
//!   context with `.context()` / `.with_context()`
//!
//! Only two failure kinds are ever shown to an end user of the upload page:
//! an archive that cannot be opened, and a generic processing failure. The
//! detail carried by the other variants ends up in the logs and on the CLI.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! anyhow::bail!(CodetidyError::Archive(format!("'{}' is not a ZIP file", name)));
//!
//! // Recognize the archive failure further up
//! if let Some(CodetidyError::Archive(_)) = err.downcast_ref::<CodetidyError>() {
//!     // ...
//! }
//! ```
//!
use thiserror::Error;

/// Message shown to users for any failure while handling an upload.
pub const GENERIC_PROCESSING_MESSAGE: &str = "Error processing file";

/// Custom error type for the codetidy application.
#[derive(Error, Debug)]
pub enum CodetidyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Failed to process ZIP archive: {0}")]
    Archive(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Error processing file: {0}")]
    Processing(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Returns `true` when the error chain contains an archive parsing failure.
pub fn is_archive_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<CodetidyError>(),
            Some(CodetidyError::Archive(_))
        )
    })
}
