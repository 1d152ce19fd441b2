//! # gzembed Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem operations used by the embedder. Everything lives in the `io`
//! submodule; import from it directly, e.g. `crate::common::fs::io::ensure_dir_exists`.
//!

/// Directory creation, file writes and file removal.
pub mod io;
