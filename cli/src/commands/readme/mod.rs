//! # codetidy Readme Command (`commands::readme`)
//!
//! File: cli/src/commands/readme/mod.rs
//!
//! ## Overview
//!
//! Implements `codetidy readme <ZIP>`: ingests a ZIP archive and writes a
//! generated `README.md` describing its contents.
//!
//! ## Workflow
//!
//! 1. Refuse inputs that are not `.zip` files (documentation is only
//!    generated for archives)
//! 2. Load configuration for formatter limits and the output location
//! 3. Ingest the archive (every entry is formatted along the way)
//! 4. Render the README and write it (or print it with `--stdout`)
//!
//! ```bash
//! codetidy readme project.zip
//! codetidy readme project.zip -o docs/OVERVIEW.md --title "My Project"
//! codetidy readme project.zip --stdout
//! ```
//!
use crate::common::fs::io;
use crate::common::source::ingest;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

pub mod utils;

use utils::generator;

/// # Readme Command Arguments (`ReadmeArgs`)
#[derive(Parser, Debug)]
pub struct ReadmeArgs {
    /// ZIP archive to document.
    pub input: PathBuf,

    /// Where to write the README. Defaults to `<output.directory>/<output.readme_file>`
    /// from the configuration (`./README.md` out of the box).
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the README to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Heading of the README. Defaults to the archive name without `.zip`.
    #[arg(long)]
    pub title: Option<String>,
}

/// # Handle Readme Command (`handle_readme`)
///
/// ## Errors
///
/// Fails if the input is not a `.zip` file, cannot be read or parsed, or the
/// README cannot be rendered or written.
pub async fn handle_readme(args: ReadmeArgs) -> Result<()> {
    info!("Handling readme command for '{}'", args.input.display());

    let upload_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("Path '{}' has no file name", args.input.display()))?;
    if !ingest::is_zip_name(&upload_name) {
        anyhow::bail!(
            "README generation needs a ZIP archive, got '{}'. Use 'codetidy format' for single files.",
            upload_name
        );
    }

    let cfg = config::load_config().context("Failed to load codetidy configuration")?;
    let records = ingest::ingest_path(&args.input, &cfg.formatter.to_options()).await?;

    let title = args
        .title
        .as_deref()
        .or_else(|| generator::title_from_upload(&upload_name));
    let readme = match title {
        Some(title) => generator::generate_readme_titled(&records, title),
        None => generator::generate_readme(&records),
    }
    .with_context(|| format!("Failed to generate README for '{}'", upload_name))?;

    if args.stdout {
        print!("{}", readme);
        return Ok(());
    }

    let target = args.output.unwrap_or_else(|| {
        PathBuf::from(&cfg.output.directory).join(&cfg.output.readme_file)
    });
    io::write_string_to_file(&target, &readme)?;
    println!(
        "✅ Generated {} documenting {} files.",
        target.display(),
        records.len()
    );
    Ok(())
}
