//! # codetidy Filesystem I/O Utilities
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used when the CLI writes its artifacts
//! (formatted files, generated READMEs):
//! - `ensure_dir_exists`: creates a directory tree, failing if a file is in the way
//! - `write_string_to_file`: writes text, creating parent directories first
//! - `join_relative`: places an archive-relative path under an output directory
//!
//! Errors carry the offending path as context.
//!
use crate::core::error::{CodetidyError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Creates `path` (and its parents) if needed.
///
/// Fails with `CodetidyError::FileSystem` when `path` exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(CodetidyError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Writes `content` to `path`, creating missing parent directories.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Joins a `/`-separated, archive-relative path onto `base`.
///
/// Only normal components are accepted; anything that would climb out of
/// `base` (or an empty path) is rejected.
pub fn join_relative(base: &Path, relative: &str) -> Result<PathBuf> {
    let mut joined = base.to_path_buf();
    let mut pushed = false;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                joined.push(part);
                pushed = true;
            }
            Component::CurDir => {}
            _ => anyhow::bail!(CodetidyError::FileSystem(format!(
                "Refusing to write outside the output directory: '{}'",
                relative
            ))),
        }
    }
    if !pushed {
        anyhow::bail!(CodetidyError::FileSystem(format!(
            "Empty relative path: '{}'",
            relative
        )));
    }
    Ok(joined)
}
