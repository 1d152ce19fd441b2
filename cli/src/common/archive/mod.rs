//! # gzembed Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the two halves of asset embedding: producing the
//! gzip stream and rendering it into its target encoding. Keeping them apart
//! lets header mode and file mode share one compression routine.
//!
//! ## Architecture
//!
//! - **`compression`**: deterministic gzip encoding of a source file and the
//!   in-memory `CompressedAsset` type.
//! - **`header`**: renders compressed bytes as a `PROGMEM` C header.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{compression, header};
//!
//! # fn run(paths: &crate::core::config::EmbedPaths) -> crate::core::error::Result<()> {
//! compression::compress_file(&paths.source, &paths.temp_gz)?;
//! let asset = compression::CompressedAsset::from_gzip_file(&paths.source, &paths.temp_gz)?;
//! let text = header::render_header(asset.bytes(), &paths.symbols);
//! # Ok(())
//! # }
//! ```
//!

pub mod compression;
pub mod header;
