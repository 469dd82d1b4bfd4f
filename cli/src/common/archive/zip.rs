//! # codetidy ZIP Archive Reading (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! Opens an in-memory ZIP archive and returns its file entries, in the order
//! the archive's central directory lists them. Directory entries are skipped
//! and never returned.
//!
//! Any failure to parse the archive, or to read one of its entries, is
//! reported as `CodetidyError::Archive` so the upload layer can recognize it.
//!
//! ## Usage
//!
//! ```rust
//! let bytes = std::fs::read("project.zip")?;
//! for entry in archive::zip::read_entries(&bytes)? {
//!     println!("{} ({} bytes)", entry.path, entry.data.len());
//! }
//! ```
//!
use crate::core::error::{CodetidyError, Result};
use anyhow::anyhow;
use std::io::{Cursor, Read};
use tracing::{debug, warn};

/// One file stored in a ZIP archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Archive-relative path using `/` separators.
    pub path: String,
    /// Uncompressed entry contents.
    pub data: Vec<u8>,
}

/// # Read ZIP Entries (`read_entries`)
///
/// Parses `bytes` as a ZIP archive and extracts every file entry.
///
/// Entries are skipped (with a warning) when their name would resolve outside
/// the archive root, e.g. absolute paths or `..` components.
///
/// ## Errors
///
/// Returns `CodetidyError::Archive` if the archive cannot be opened or an entry
/// cannot be decompressed.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut archive = ::zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| anyhow!(CodetidyError::Archive(e.to_string())))?;
    debug!("Opened ZIP archive with {} entries", archive.len());

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| anyhow!(CodetidyError::Archive(format!("entry #{}: {}", index, e))))?;

        if file.is_dir() {
            debug!("Skipping directory entry: {}", file.name());
            continue;
        }
        if file.enclosed_name().is_none() {
            warn!("Skipping archive entry with unsafe path: {}", file.name());
            continue;
        }

        let path = file.name().replace('\\', "/");
        // The declared size is untrusted; never reserve more than the archive itself.
        let capacity = file.size().min(bytes.len() as u64) as usize;
        let mut data = Vec::with_capacity(capacity);
        file.read_to_end(&mut data).map_err(|e| {
            anyhow!(CodetidyError::Archive(format!(
                "failed to read entry '{}': {}",
                path, e
            )))
        })?;
        entries.push(ArchiveEntry { path, data });
    }
    Ok(entries)
}
