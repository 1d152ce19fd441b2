//! # gzembed Header Mode
//!
//! File: cli/src/commands/header.rs
//!
//! ## Overview
//!
//! Compresses the library's static asset and embeds the result in a C header
//! as a `PROGMEM` byte array, so the firmware can serve it straight from flash.
//!
//! Steps, in order:
//! 1. Compress `src/index.html` to the intermediate `src/index.html.gz`
//! 2. Read the intermediate back and render it as `include/index_html_gz.h`
//! 3. Delete the intermediate file
//!
//! A failure in steps 1 or 2 aborts the run. A failure in step 3 is reported
//! but the header stands and the command succeeds.
//!
//! ## Examples
//!
//! ```bash
//! # Run from the library root, as a post-install hook would
//! gzembed header
//!
//! # Point at another library checkout
//! gzembed -v header --root ../my-lib
//! ```
//!
use crate::commands::PathArgs;
use crate::common::archive::compression::{self, CompressedAsset};
use crate::common::archive::header;
use crate::common::fs::io;
use crate::core::config::{self, EmbedPaths};
use crate::core::error::{EmbedError, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info, warn};

/// # Header Command Arguments (`HeaderArgs`)
#[derive(Parser, Debug)]
pub struct HeaderArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

/// # Handle Header Command (`handle_header`)
///
/// Resolves the paths for this run and embeds the asset into its header.
pub fn handle_header(args: HeaderArgs) -> Result<()> {
    info!("Handling header command with args: {:?}", args);
    let paths = config::resolve_paths(&args.paths.overrides())?;
    debug!("Resolved paths: {:?}", paths);
    debug!("Library root: {}", paths.root.display());
    embed_header(&paths)
}

/// Runs the three header-mode steps against already resolved paths.
pub fn embed_header(paths: &EmbedPaths) -> Result<()> {
    compression::compress_file(&paths.source, &paths.temp_gz)?;
    println!(
        "Successfully compressed {} to {}",
        paths.source.display(),
        paths.temp_gz.display()
    );

    let asset = CompressedAsset::from_gzip_file(&paths.source, &paths.temp_gz)?;
    debug!(
        "Rendering {} bytes from {} as {}",
        asset.len(),
        asset.source_path().display(),
        paths.symbols.array
    );

    let text = header::render_header(asset.bytes(), &paths.symbols);
    io::write_string_to_file(&paths.header, &text)?;
    println!("Successfully created {}", paths.header.display());

    finish_cleanup(io::remove_file(&paths.temp_gz), &paths.temp_gz)?;

    info!(
        "Embedded {} ({} compressed bytes) into {}",
        paths.source.display(),
        asset.len(),
        paths.header.display()
    );
    Ok(())
}

/// Reports the outcome of removing the intermediate file.
///
/// A non-fatal failure is printed and swallowed, since the header is already
/// written. Anything else is passed back to the caller.
fn finish_cleanup(result: Result<()>, path: &Path) -> Result<()> {
    match result {
        Ok(()) => {
            println!("Removed temporary file: {}", path.display());
            Ok(())
        }
        Err(err) => match err.downcast_ref::<EmbedError>() {
            Some(cleanup) if !cleanup.is_fatal() => {
                warn!("{}", cleanup);
                println!("{}", cleanup);
                Ok(())
            }
            _ => Err(err),
        },
    }
}
