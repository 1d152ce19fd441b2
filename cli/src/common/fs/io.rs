//! # gzembed Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the embedder commands. Each wrapper
//! maps its I/O failure onto the embedder's error taxonomy so the message that
//! reaches the user names the failing path:
//!
//! - **`ensure_dir_exists`**: creates a directory and its parents if absent,
//!   and rejects a path that exists but is not a directory (`OutputWriteFailure`).
//! - **`write_string_to_file`**: ensures the parent directory exists, then
//!   overwrites the file (`OutputWriteFailure`).
//! - **`remove_file`**: deletes an intermediate artifact (`CleanupFailure`).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! io::ensure_dir_exists(Path::new("./data"))?;
//! io::write_string_to_file(Path::new("./include/index_html_gz.h"), "#endif\n")?;
//! io::remove_file(Path::new("./src/index.html.gz"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{EmbedError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created along with any
/// missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns `EmbedError::OutputWriteFailure` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| EmbedError::OutputWriteFailure {
            path: path.to_path_buf(),
            error: e,
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(EmbedError::OutputWriteFailure {
            path: path.to_path_buf(),
            error: io::Error::new(
                io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        }
        .into());
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory is created first if it is missing.
///
/// # Errors
///
/// Returns `EmbedError::OutputWriteFailure` if the parent directory cannot be
/// created or the file cannot be written.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).map_err(|e| EmbedError::OutputWriteFailure {
        path: path.to_path_buf(),
        error: e,
    })?;
    info!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Removes a file left behind as an intermediate artifact.
///
/// # Errors
///
/// Returns `EmbedError::CleanupFailure`, which callers treat as non-fatal.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| EmbedError::CleanupFailure {
        path: path.to_path_buf(),
        error: e,
    })?;
    debug!("Removed file: {:?}", path);
    Ok(())
}
