//! # gzembed Data Mode
//!
//! File: cli/src/commands/data.rs
//!
//! ## Overview
//!
//! Compresses the static asset straight into `<project_dir>/data/index.html.gz`,
//! ready to be uploaded to the device filesystem. No header is generated and
//! nothing is cleaned up: the compressed file is the final artifact.
//!
//! The project directory comes from `--project-dir`, then the `PROJECT_DIR`
//! environment variable a build tool can export, then the library root.
//!
//! ## Examples
//!
//! ```bash
//! PROJECT_DIR=/work/firmware gzembed data
//! gzembed data --project-dir ../firmware --source web/index.html
//! ```
//!
use crate::commands::PathArgs;
use crate::common::archive::compression;
use crate::common::fs::io;
use crate::core::config::{self, EmbedPaths};
use crate::core::error::{EmbedError, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Data Command Arguments (`DataArgs`)
#[derive(Parser, Debug)]
pub struct DataArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Root of the project being built; the output lands in its `data/` directory.
    #[arg(long, env = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,
}

/// # Handle Data Command (`handle_data`)
pub fn handle_data(args: DataArgs) -> Result<()> {
    info!("Handling data command with args: {:?}", args);
    let mut overrides = args.paths.overrides();
    overrides.project_dir = args.project_dir;
    let paths = config::resolve_paths(&overrides)?;
    debug!("Resolved paths: {:?}", paths);
    debug!("Project directory: {}", paths.project_dir.display());
    embed_data(&paths)
}

/// Writes the compressed asset into the project's data directory.
///
/// The source is checked before the directory is touched, so a missing
/// source leaves the project tree unchanged.
pub fn embed_data(paths: &EmbedPaths) -> Result<()> {
    if !paths.source.is_file() {
        return Err(EmbedError::MissingSource {
            path: paths.source.clone(),
        }
        .into());
    }
    io::ensure_dir_exists(&paths.data_dir)?;
    let size = compression::compress_file(&paths.source, &paths.data_file)?;
    println!(
        "Successfully compressed {} to {}",
        paths.source.display(),
        paths.data_file.display()
    );
    info!("Wrote {} compressed bytes to {}", size, paths.data_file.display());
    Ok(())
}
