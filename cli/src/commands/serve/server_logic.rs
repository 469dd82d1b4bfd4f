//! # codetidy HTTP Server
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! Starts the upload server:
//! 1. Find an available port, moving up from the configured one if it is taken
//! 2. Build the router around fresh `AppState`
//! 3. Print connection details
//! 4. Serve until Ctrl+C or SIGTERM, then shut down gracefully
//!
use super::config::ServerConfig;
use super::routes;
use super::state::AppState;
use crate::core::error::{CodetidyError, Result};
use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// ## Errors
///
/// Fails when no port can be bound within `MAX_PORT_ATTEMPTS` tries or the
/// server itself stops with an error.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let listener = bind_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound server address")?;

    let state = Arc::new(AppState::new(config.format_options.clone()));
    let app = routes::create_app(state, config.enable_cors);

    println!("\n=================================================================");
    println!("🌐 Upload page:       http://{}", display_addr(addr));
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!(
        "📏 Max indent level:  {}",
        config.format_options.max_indent_level
    );
    println!("=================================================================\n");
    info!("Starting upload server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!(CodetidyError::Server(e.to_string())))?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Browser-friendly form of the bound address (`localhost` for loopback).
fn display_addr(addr: SocketAddr) -> String {
    if addr.ip().is_loopback() || addr.ip().is_unspecified() {
        format!("localhost:{}", addr.port())
    } else {
        addr.to_string()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Bind Available Port (`bind_available_port`)
///
/// Binds `start_port`, or the next free port after it, trying at most
/// `max_attempts` ports. The listener is kept so the port cannot be taken
/// between probing and serving.
async fn bind_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<TcpListener> {
    let mut current_port = start_port;
    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, bound to port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable ({}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    Err(anyhow::anyhow!(CodetidyError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports",
        host, start_port, max_attempts
    ))))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_bind_available_port_start_is_free() -> Result<()> {
        let host: IpAddr = Ipv4Addr::LOCALHOST.into();
        let listener = bind_available_port(host, 50_410, 5).await?;
        assert_eq!(listener.local_addr()?.ip(), host);
        Ok(())
    }

    #[tokio::test]
    async fn test_bind_available_port_skips_occupied() -> Result<()> {
        let host: IpAddr = Ipv4Addr::LOCALHOST.into();
        let occupied = TcpListener::bind(SocketAddr::new(host, 0)).await?;
        let start_port = occupied.local_addr()?.port();

        let listener = bind_available_port(host, start_port, 5).await?;
        let port = listener.local_addr()?.port();
        assert!(port > start_port);
        assert!(port < start_port.saturating_add(5));
        Ok(())
    }

    #[test]
    fn test_display_addr() {
        let loopback = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), 8000);
        assert_eq!(display_addr(loopback), "localhost:8000");
        let other = SocketAddr::new(Ipv4Addr::new(10, 0, 0, 2).into(), 8000);
        assert_eq!(display_addr(other), "10.0.0.2:8000");
    }
}
