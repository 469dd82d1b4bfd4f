//! # codetidy README Utilities (`commands::readme::utils`)
//!
//! File: cli/src/commands/readme/utils/mod.rs
//!
//! ## Overview
//!
//! Building blocks of the README generator. They are `pub` so the upload
//! server can reuse them.
//!
//! - **`tree_builder`**: Nested, insertion-ordered tree from archive paths.
//! - **`tree_printer`**: Box-drawing rendering of that tree.
//! - **`stats`**: File counts per display label.
//! - **`framework_detector`**: Substring-based framework guesses.
//! - **`main_file`**: Conventional entry-point lookup.
//! - **`generator`**: Assembles everything into the Markdown template.
//!

pub mod framework_detector;
pub mod generator;
pub mod main_file;
pub mod stats;
pub mod tree_builder;
pub mod tree_printer;
