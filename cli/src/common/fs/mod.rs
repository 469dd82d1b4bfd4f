//! # codetidy Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the CLI commands when writing their output.
//!
//! - **`io`**: Directory creation, text writes, and safe placement of
//!   archive-relative paths under an output directory.
//!

pub mod io;
