//! # codetidy Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level subcommands of the `codetidy` CLI. Each module defines its own
//! clap arguments struct and an async `handle_*` function called from
//! `main.rs`.
//!
//! - `format`: re-indent a file or every file in a ZIP archive
//! - `readme`: generate a README for a ZIP archive
//! - `serve`: run the local upload page
//!

/// `codetidy format <FILE>`: heuristic re-indentation.
pub mod format;
/// `codetidy readme <ZIP>`: documentation generation.
pub mod readme;
/// `codetidy serve`: upload server with downloads of the results.
pub mod serve;
