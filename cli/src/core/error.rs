//! # gzembed Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy of the asset embedder. Every failure
//! is caught at the step that produced it, wrapped in an `EmbedError` carrying
//! the failing path and the underlying I/O error, and propagated to `main.rs`
//! where it is printed as `Error: <message>`.
//!
//! ## Architecture
//!
//! - `EmbedError`: a `thiserror` enum, one variant per failure class
//! - `Result<T>`: a type alias for `anyhow::Result<T>`
//!
//! Failure classes:
//! - `MissingSource`: the source asset does not exist (fatal)
//! - `CompressionFailure`: I/O or encoding error while producing the gzip stream,
//!   naming both the source and the `.gz` being produced (fatal)
//! - `OutputWriteFailure`: the header, destination file or a directory cannot be written (fatal)
//! - `CleanupFailure`: the intermediate `.gz` could not be removed (non-fatal)
//! - `Config`: invalid configuration or unresolvable paths (fatal)
//!
//! ## Examples
//!
//! ```rust
//! if !source.is_file() {
//!     return Err(EmbedError::MissingSource { path: source.to_path_buf() }.into());
//! }
//!
//! // Non-fatal classes are matched on after downcasting
//! if let Some(EmbedError::CleanupFailure { .. }) = err.downcast_ref::<EmbedError>() {
//!     warn!("{}", err);
//! }
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the embedder.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("{} not found in library src directory", path.display())]
    MissingSource { path: PathBuf },

    #[error("Error compressing {} to {}: {error}", path.display(), dest.display())]
    CompressionFailure {
        path: PathBuf,
        dest: PathBuf,
        error: io::Error,
    },

    #[error("Error writing {}: {error}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        error: io::Error,
    },

    #[error("Error removing {}: {error}", path.display())]
    CleanupFailure {
        path: PathBuf,
        error: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EmbedError {
    /// Only a failed cleanup of the intermediate file leaves the primary output intact.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EmbedError::CleanupFailure { .. })
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
