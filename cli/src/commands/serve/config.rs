//! # codetidy Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Resolves the effective settings for `codetidy serve`. Values come from the
//! `[serve]` and `[formatter]` sections of the loaded configuration and are
//! overridden by command-line flags when those are given.
//!
use crate::common::source::formatter::FormatOptions;
use crate::core::config::Config;
use clap::Parser;
use std::net::IpAddr;

/// # Serve Command Arguments (`ServeArgs`)
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (default from config, 8000 out of the box).
    /// The next free port is used if it is taken.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind to. Use `0.0.0.0` to accept connections from other machines.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub format_options: FormatOptions,
}

impl ServerConfig {
    /// Merges command-line flags over the loaded configuration.
    pub fn resolve(args: &ServeArgs, cfg: &Config) -> Self {
        Self {
            host: args.host.unwrap_or(cfg.serve.host),
            port: args.port.unwrap_or(cfg.serve.port),
            enable_cors: cfg.serve.enable_cors && !args.no_cors,
            format_options: cfg.formatter.to_options(),
        }
    }
}
