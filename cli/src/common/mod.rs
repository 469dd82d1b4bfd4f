//! # codetidy Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! Building blocks used by the commands:
//! - `archive`: reading ZIP archives into memory
//! - `fs`: writing output files and joining archive paths safely
//! - `source`: language classification, the heuristic formatter and ingestion
//!

pub mod archive;
pub mod fs;
pub mod source;
