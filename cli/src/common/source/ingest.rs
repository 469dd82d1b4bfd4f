//! # codetidy Ingester
//!
//! File: cli/src/common/source/ingest.rs
//!
//! ## Overview
//!
//! Turns one upload into a list of `FileRecord`s. An upload is either a
//! single file or a ZIP archive (recognized by a `.zip` name). Each file is
//! decoded as text, classified by extension, and run through the formatter.
//!
//! ## Architecture
//!
//! - `ingest_path`: async entry point for files on disk (reads with `tokio::fs`)
//! - `ingest_upload`: works on a name plus raw bytes, used by both the CLI
//!   and the upload server
//!
//! Entries are processed one after another in archive order. There are no
//! size limits and no binary detection: bytes that are not valid UTF-8 are
//! decoded lossily and formatted like any other text.
//!
use super::formatter::{self, FormatOptions};
use super::language::Language;
use crate::common::archive;
use crate::core::error::Result;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// One ingested file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Base name (last path segment).
    pub name: String,
    /// Archive-relative path; equals `name` for a standalone upload.
    pub path: String,
    /// Raw decoded text.
    pub content: String,
    /// Formatter output, present once the formatter has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl FileRecord {
    /// Classifies and formats `content`, producing a complete record.
    pub fn new(path: &str, content: String, options: &FormatOptions) -> Self {
        let name = base_name(path).to_string();
        let language = Language::from_filename(&name);
        let outcome = formatter::format_source(&content, language, options);
        if outcome.is_passed_through() {
            debug!("Formatting skipped for '{}', keeping original text", path);
        }
        FileRecord {
            name,
            path: path.to_string(),
            content,
            formatted: Some(outcome.into_text()),
        }
    }

    pub fn language(&self) -> Language {
        Language::from_filename(&self.name)
    }
}

/// `true` when `name` designates a ZIP upload.
pub fn is_zip_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".zip")
}

/// File name under which a formatted file is offered for download.
pub fn formatted_file_name(name: &str) -> String {
    format!("formatted_{}", name)
}

/// Last `/`-separated segment of `path`.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// # Ingest File From Disk (`ingest_path`)
///
/// Reads the file at `path` and ingests it under its file name.
pub async fn ingest_path(path: &Path, options: &FormatOptions) -> Result<Vec<FileRecord>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("Path '{}' has no file name", path.display()))?;
    ingest_upload(&name, &bytes, options)
}

/// # Ingest Upload (`ingest_upload`)
///
/// Ingests `bytes` uploaded under `name`. ZIP uploads yield one record per
/// file entry; anything else yields exactly one record.
///
/// ## Errors
///
/// Returns an archive error when `name` ends in `.zip` but the bytes are not
/// a readable archive.
pub fn ingest_upload(name: &str, bytes: &[u8], options: &FormatOptions) -> Result<Vec<FileRecord>> {
    if !is_zip_name(name) {
        debug!("Ingesting single file '{}' ({} bytes)", name, bytes.len());
        let content = String::from_utf8_lossy(bytes).into_owned();
        return Ok(vec![FileRecord::new(base_name(name), content, options)]);
    }

    let entries = archive::zip::read_entries(bytes)
        .with_context(|| format!("Failed to open archive '{}'", name))?;
    let records: Vec<FileRecord> = entries
        .into_iter()
        .map(|entry| {
            let content = String::from_utf8_lossy(&entry.data).into_owned();
            FileRecord::new(&entry.path, content, options)
        })
        .collect();
    info!("Ingested {} files from '{}'", records.len(), name);
    Ok(records)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::is_archive_error;
    use ::zip::write::SimpleFileOptions;
    use std::io::{Cursor, Write};
    use tempfile::tempdir;

    fn build_zip(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ::zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_single_file_upload() -> Result<()> {
        let records = ingest_upload("app.js", b"if (a) {\nb();\n}", &FormatOptions::default())?;
        assert_eq!(
            records,
            vec![FileRecord {
                name: "app.js".into(),
                path: "app.js".into(),
                content: "if (a) {\nb();\n}".into(),
                formatted: Some("  if (a) {\nb();\n}".into()),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_zip_upload_yields_one_record_per_file() -> Result<()> {
        let bytes = build_zip(&[
            ("src/a.py", "def a():\n  pass"),
            ("src/b.py", "x = 1"),
            ("README.md", "# Demo"),
        ]);
        let records = ingest_upload("demo.zip", &bytes, &FormatOptions::default())?;

        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(!record.path.is_empty());
            assert!(record.path.ends_with(&record.name));
            assert!(record.formatted.is_some());
        }
        assert_eq!(records[0].name, "a.py");
        assert_eq!(records[0].path, "src/a.py");
        assert_eq!(records[0].formatted.as_deref(), Some("    def a():\npass"));
        assert_eq!(records[2].formatted.as_deref(), Some("# Demo"));
        Ok(())
    }

    #[test]
    fn test_zip_extension_is_case_insensitive() -> Result<()> {
        let bytes = build_zip(&[("x.txt", "hi")]);
        let records = ingest_upload("BUNDLE.ZIP", &bytes, &FormatOptions::default())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "x.txt");
        Ok(())
    }

    #[test]
    fn test_corrupt_zip_is_archive_error() {
        let err = ingest_upload("broken.zip", b"PK\x03\x04 nope", &FormatOptions::default())
            .unwrap_err();
        assert!(is_archive_error(&err));
    }

    #[test]
    fn test_binary_content_is_decoded_lossily() -> Result<()> {
        let records = ingest_upload("blob.bin", &[0xff, 0xfe, b'a'], &FormatOptions::default())?;
        assert_eq!(records[0].content, "\u{fffd}\u{fffd}a");
        Ok(())
    }

    #[tokio::test]
    async fn test_ingest_path_reads_from_disk() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("Main.java");
        std::fs::write(&file, "class Main {\n}\n")?;

        let records = ingest_path(&file, &FormatOptions::default()).await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "Main.java");
        assert_eq!(records[0].formatted.as_deref(), Some("    class Main {\n}"));
        Ok(())
    }

    #[tokio::test]
    async fn test_ingest_path_missing_file() {
        let dir = tempdir().unwrap();
        let result = ingest_path(&dir.path().join("nope.js"), &FormatOptions::default()).await;
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_formatted_file_name() {
        assert_eq!(formatted_file_name("app.js"), "formatted_app.js");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("a/b/c.rs"), "c.rs");
        assert_eq!(base_name("c.rs"), "c.rs");
    }
}
