//! # codetidy Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! Infrastructure shared by every command:
//! - `config`: layered TOML configuration
//! - `error`: `CodetidyError` and the crate-wide `Result` alias
//! - `templating`: Tera rendering of Markdown templates
//!

pub mod config;
pub mod error;
pub mod templating;
