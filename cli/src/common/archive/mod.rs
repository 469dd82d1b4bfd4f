//! # codetidy Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Groups archive-related helpers. The only format codetidy consumes is ZIP,
//! read fully into memory from an upload or a file on disk.
//!
//! - **`zip`**: Opens a ZIP archive and yields its file entries in
//!   central-directory order, skipping directory entries.
//!
//! ```rust
//! use crate::common::archive;
//!
//! let entries = archive::zip::read_entries(&bytes)?;
//! ```
//!

pub mod zip;
