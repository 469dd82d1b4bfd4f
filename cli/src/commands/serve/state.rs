//! # codetidy Server State
//!
//! File: cli/src/commands/serve/state.rs
//!
//! ## Overview
//!
//! The upload server remembers exactly one thing: the outcome of the most
//! recent upload. Each new outcome replaces the previous one wholesale.
//!
//! ## Ordering
//!
//! Uploads can overlap (a large archive still processing while a small file
//! is dropped in). Every request takes a token from a monotonically
//! increasing counter when it arrives, and `publish` only stores an outcome
//! whose token is newer than the stored one. A slow, older upload therefore
//! never overwrites the result of a newer one. There is no cancellation:
//! the older upload still runs to completion and its caller still receives
//! its own result.
//!
use crate::commands::readme::utils::generator;
use crate::common::source::formatter::FormatOptions;
use crate::common::source::ingest::{self, FileRecord};
use crate::core::error::Result;
use anyhow::Context;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Everything produced from one successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedUpload {
    pub upload_name: String,
    pub files: Vec<FileRecord>,
    /// Generated README; only present for ZIP uploads.
    pub readme: Option<String>,
}

impl ProcessedUpload {
    /// Runs ingestion and, for archives, README generation.
    pub fn from_upload(upload_name: &str, bytes: &[u8], options: &FormatOptions) -> Result<Self> {
        let files = ingest::ingest_upload(upload_name, bytes, options)?;
        let readme = if ingest::is_zip_name(upload_name) {
            let readme = match generator::title_from_upload(upload_name) {
                Some(title) => generator::generate_readme_titled(&files, title),
                None => generator::generate_readme(&files),
            };
            Some(readme.context("Failed to generate README")?)
        } else {
            None
        };
        Ok(Self {
            upload_name: upload_name.to_string(),
            files,
            readme,
        })
    }

    pub fn is_archive(&self) -> bool {
        ingest::is_zip_name(&self.upload_name)
    }
}

/// Result of the latest upload, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub enum LastOutcome {
    Processed(ProcessedUpload),
    Failed { upload_name: String, message: String },
}

/// Stored outcome together with the token of the request that produced it.
#[derive(Debug, Clone)]
pub struct TokenedOutcome {
    pub token: u64,
    pub outcome: Arc<LastOutcome>,
}

/// Shared state of the upload server.
#[derive(Debug)]
pub struct AppState {
    next_token: AtomicU64,
    last: RwLock<Option<TokenedOutcome>>,
    pub format_options: FormatOptions,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(format_options: FormatOptions) -> Self {
        Self {
            next_token: AtomicU64::new(0),
            last: RwLock::new(None),
            format_options,
        }
    }

    /// Issues the token for a newly arrived request. Tokens start at 1.
    pub fn begin_request(&self) -> u64 {
        self.next_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Stores `outcome` unless a newer request has already published.
    ///
    /// Returns `true` when the outcome became the current one.
    pub async fn publish(&self, token: u64, outcome: LastOutcome) -> bool {
        let mut slot = self.last.write().await;
        if let Some(current) = slot.as_ref() {
            if current.token > token {
                debug!(
                    "Discarding outcome of request {} (request {} already published)",
                    token, current.token
                );
                return false;
            }
        }
        *slot = Some(TokenedOutcome {
            token,
            outcome: Arc::new(outcome),
        });
        true
    }

    /// The current outcome, if any upload has completed.
    pub async fn latest(&self) -> Option<TokenedOutcome> {
        self.last.read().await.clone()
    }
}
