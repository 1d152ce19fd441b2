//! # gzembed Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! `gzembed` is a post-install build helper for embedded web UIs. It gzips a
//! static HTML asset and either embeds the bytes in a `PROGMEM` C header or
//! drops the compressed file into a project's `data/` directory for
//! filesystem upload.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the mode handlers
//! - Reporting failures as `Error: <message>` on stdout; the run still exits
//!   with status 0 so the host build carries on
//!
//! ## Examples
//!
//! ```bash
//! # Embed src/index.html into include/index_html_gz.h
//! gzembed header
//!
//! # Write data/index.html.gz into the project being built
//! PROJECT_DIR=/work/firmware gzembed -v data
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The two embedder modes
mod common; // Compression, header rendering and filesystem helpers
mod core; // Configuration and error types

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gzembed",
    about = "Gzip a static web asset and embed it for an embedded device",
    long_about = "Compresses a static HTML asset with gzip and emits either a PROGMEM C header\n\
                  or a compressed file in the project's data directory for filesystem upload.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining the available embedder modes.
#[derive(Parser, Debug)]
enum Commands {
    /// Embed the compressed asset in a C header as a PROGMEM byte array.
    #[command(alias = "h")]
    Header(commands::header::HeaderArgs),
    /// Write the compressed asset into the project's data directory.
    #[command(alias = "d")]
    Data(commands::data::DataArgs),
}

fn main() -> anyhow::Result<()> {
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
        Commands::Header(args) => commands::header::handle_header(args),
        Commands::Data(args) => commands::data::handle_data(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        println!("{}", render_error(&e));
    }

    Ok(())
}

/// Formats a failure with its whole cause chain on one line.
fn render_error(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}
