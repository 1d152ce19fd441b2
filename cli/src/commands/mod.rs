//! # gzembed Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the two embedder modes exposed by the CLI. Each mode
//! is an independent entry point; a build pipeline wires in only one of them.
//!
//! ## Command Groups
//!
//! - `header`: compress the asset and embed it in a `PROGMEM` C header
//! - `data`: compress the asset into the project's `data/` directory for filesystem upload
//!
//! Both share `PathArgs`, the flags that locate the library root and the
//! source asset.
//!
use crate::core::config::Overrides;
use clap::Args;
use std::path::PathBuf;

/// Compress-to-header mode.
pub mod header;
/// Compress-to-file mode.
pub mod data;

/// Location flags shared by every embedder mode.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Library root holding `src/` and `include/`. Defaults to the current directory.
    #[arg(long, env = "GZEMBED_ROOT")]
    pub root: Option<PathBuf>,

    /// Source asset, overriding `source` from `.gzembed.toml`.
    /// Relative paths resolve against the library root.
    #[arg(long)]
    pub source: Option<PathBuf>,
}

impl PathArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            root: self.root.clone(),
            source: self.source.clone(),
            project_dir: None,
        }
    }
}
