//! # codetidy Source Handling (`common::source`)
//!
//! File: cli/src/common/source/mod.rs
//!
//! ## Overview
//!
//! The pipeline every upload goes through, leaves first:
//!
//! - **`language`**: Maps a file name to a `Language`, which carries a display
//!   label and a formatting style.
//! - **`formatter`**: Line-based re-indentation heuristics.
//! - **`ingest`**: Reads a single file or a ZIP archive into `FileRecord`s,
//!   formatting each one on the way.
//!
//! ```rust
//! use crate::common::source::{formatter::FormatOptions, ingest};
//!
//! let records = ingest::ingest_path(Path::new("project.zip"), &FormatOptions::default()).await?;
//! ```
//!

pub mod formatter;
pub mod ingest;
pub mod language;
