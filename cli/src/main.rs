//! # codetidy Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `codetidy` CLI:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on the verbosity flag
//! - Routing execution to the command handlers
//!
//! ```bash
//! codetidy --help
//! codetidy -vv readme project.zip
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging (`-v` info, `-vv` debug, `-vvv` trace; `RUST_LOG` wins)
//! 3. Route to the command handler
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;

#[derive(Parser, Debug)]
#[command(
    name = "codetidy",
    about = "🧹 codetidy: heuristic source re-indentation and README generation",
    long_about = "Re-indents source files with simple per-language heuristics, and generates\n\
                  README documentation for ZIP archives of a project.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Re-indent a source file or every file in a ZIP archive.
    #[command(alias = "f")]
    Format(commands::format::FormatArgs),
    /// Generate a README.md describing a ZIP archive.
    #[command(alias = "r")]
    Readme(commands::readme::ReadmeArgs),
    /// Run the local upload page.
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Format(args) => commands::format::handle_format(args).await,
        Commands::Readme(args) => commands::readme::handle_readme(args).await,
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
