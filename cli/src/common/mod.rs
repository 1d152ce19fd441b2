//! # gzembed Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`archive`**: gzip compression and C header rendering.
//! - **`fs`**: directory creation, file writes and intermediate cleanup.
//!

/// Compression and rendering of embedded assets.
pub mod archive;
/// Filesystem helpers mapped onto the embedder's error taxonomy.
pub mod fs;
