//! # codetidy Serve Command (`commands::serve`)
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! Implements `codetidy serve`: a local web page where a source file or ZIP
//! archive can be dropped in, with the formatted files and (for archives) a
//! generated README offered for download.
//!
//! ## Architecture
//!
//! - `config`: command arguments and the effective server settings
//! - `state`: the latest upload outcome, guarded by request tokens
//! - `routes`: axum router and request handlers
//! - `page`: the HTML/JS upload page
//! - `server_logic`: port selection, startup and graceful shutdown
//!
//! ```bash
//! codetidy serve
//! codetidy serve --port 9000 --host 0.0.0.0 --no-cors
//! ```
//!
use crate::core::config as core_config;
use crate::core::error::Result;
use anyhow::Context;
use tracing::info;

pub use config::ServeArgs;

pub mod config;
pub mod page;
pub mod routes;
pub mod server_logic;
pub mod state;

/// # Handle Serve Command (`handle_serve`)
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let cfg = core_config::load_config().context("Failed to load codetidy configuration")?;
    let server_config = config::ServerConfig::resolve(&args, &cfg);
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config).await
}
