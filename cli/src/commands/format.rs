//! # codetidy Format Command (`commands::format`)
//!
//! File: cli/src/commands/format.rs
//!
//! ## Overview
//!
//! Implements `codetidy format <FILE>`: ingests a single file or a ZIP
//! archive and emits the re-indented text.
//!
//! - Without `--output`, formatted text goes to stdout. Archive entries are
//!   each preceded by a `==> path <==` header.
//! - With `--output DIR`, a single file is written as
//!   `DIR/formatted_<name>`; archive entries are written under `DIR` at
//!   their archive path.
//!
//! ```bash
//! codetidy format src/app.js
//! codetidy format project.zip -o tidied/
//! ```
//!
use crate::common::fs::io;
use crate::common::source::ingest::{self, FileRecord};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Format Command Arguments (`FormatArgs`)
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Source file or ZIP archive to format.
    pub input: PathBuf,

    /// Directory to write formatted files into. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// # Handle Format Command (`handle_format`)
pub async fn handle_format(args: FormatArgs) -> Result<()> {
    info!("Handling format command for '{}'", args.input.display());

    let cfg = config::load_config().context("Failed to load codetidy configuration")?;
    let is_archive = args
        .input
        .file_name()
        .is_some_and(|n| ingest::is_zip_name(&n.to_string_lossy()));
    let records = ingest::ingest_path(&args.input, &cfg.formatter.to_options()).await?;

    match args.output {
        None => print!("{}", render_listing(&records, is_archive)),
        Some(dir) => {
            let targets = output_targets(&records, is_archive, &dir)?;
            for (path, record) in &targets {
                io::write_string_to_file(path, formatted_text(record))?;
            }
            println!(
                "✅ Wrote {} formatted file(s) to {}",
                targets.len(),
                dir.display()
            );
        }
    }
    Ok(())
}

fn formatted_text(record: &FileRecord) -> &str {
    record.formatted.as_deref().unwrap_or(&record.content)
}

/// Stdout rendering: bare text for a single file, headed sections for archives.
fn render_listing(records: &[FileRecord], is_archive: bool) -> String {
    if !is_archive {
        return records
            .iter()
            .map(|r| format!("{}\n", formatted_text(r)))
            .collect();
    }
    records
        .iter()
        .map(|r| format!("==> {} <==\n{}\n\n", r.path, formatted_text(r)))
        .collect()
}

/// Destination of every record below `dir`.
fn output_targets<'a>(
    records: &'a [FileRecord],
    is_archive: bool,
    dir: &Path,
) -> Result<Vec<(PathBuf, &'a FileRecord)>> {
    records
        .iter()
        .map(|record| -> Result<(PathBuf, &'a FileRecord)> {
            let path = if is_archive {
                io::join_relative(dir, &record.path)?
            } else {
                dir.join(ingest::formatted_file_name(&record.name))
            };
            Ok((path, record))
        })
        .collect()
}
