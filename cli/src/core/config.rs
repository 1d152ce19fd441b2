//! # gzembed Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module resolves where the embedder reads its source asset and where it
//! writes its outputs. Settings are layered, each level overriding the one
//! before it:
//!
//! 1. Default values defined in the code (`src/index.html`, `include`, `data`)
//! 2. Project-specific `.gzembed.toml` in the library root or its ancestors
//! 3. Environment variables (`GZEMBED_ROOT`, `PROJECT_DIR`), read by clap
//! 4. Command-line flags (`--root`, `--source`, `--project-dir`)
//!
//! ## Architecture
//!
//! - `Config`: the deserialized `.gzembed.toml` with defaults filled in
//! - `Overrides`: values supplied by the command line or environment
//! - `EmbedPaths`: the fully resolved, absolute paths one invocation uses
//!
//! Relative `source` and `include_dir` resolve against the library root.
//! `data_dir` resolves against the project directory, which stands in for the
//! build tool's project-root accessor and defaults to the library root.
//!
//! ## Examples
//!
//! ```rust
//! let paths = config::resolve_paths(&Overrides::default())?;
//! println!("Embedding {} into {}", paths.source.display(), paths.header.display());
//! ```
//!
use crate::common::archive::header::HeaderSymbols;
use crate::core::error::{EmbedError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Name of the project configuration file searched for from the library root upward.
pub const PROJECT_CONFIG_FILENAME: &str = ".gzembed.toml";

/// Settings loaded from `.gzembed.toml`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source asset, relative to the library root unless absolute.
    #[serde(default = "default_source")]
    pub source: String,
    /// Directory receiving the generated header, relative to the library root.
    #[serde(default = "default_include_dir")]
    pub include_dir: String,
    /// Directory receiving the standalone `.gz`, relative to the project directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            include_dir: default_include_dir(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_source() -> String {
    "src/index.html".to_string()
}
fn default_include_dir() -> String {
    "include".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}

/// Values taken from the command line (or their environment fallbacks).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub project_dir: Option<PathBuf>,
}

/// Every path a single embedder run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPaths {
    pub root: PathBuf,
    pub source: PathBuf,
    /// Intermediate compressed file written next to the source in header mode.
    pub temp_gz: PathBuf,
    pub header: PathBuf,
    pub project_dir: PathBuf,
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
    pub symbols: HeaderSymbols,
}

/// Resolves the effective paths for this invocation.
///
/// The library root is canonicalized first so the configuration search can
/// walk its ancestors. Missing source files are *not* an error here; the
/// commands report them as `MissingSource` so the message names the path.
pub fn resolve_paths(overrides: &Overrides) -> Result<EmbedPaths> {
    let root_input = match &overrides.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let root = root_input.canonicalize().map_err(|e| {
        anyhow!(EmbedError::Config(format!(
            "Library root '{}' cannot be resolved: {}",
            root_input.display(),
            e
        )))
    })?;

    // Searched upward from the library root, not the working directory
    let config = load_config(&root)?;
    debug!("Effective configuration: {:?}", config);

    let source = match &overrides.source {
        Some(source) => absolutize(&root, source),
        None => absolutize(&root, Path::new(&config.source)),
    };
    let project_dir = match &overrides.project_dir {
        Some(dir) => absolutize(&root, dir),
        None => root.clone(),
    };
    build_paths(root, source, project_dir, &config)
}

fn build_paths(
    root: PathBuf,
    source: PathBuf,
    project_dir: PathBuf,
    config: &Config,
) -> Result<EmbedPaths> {
    let file_name = source.file_name().ok_or_else(|| {
        anyhow!(EmbedError::Config(format!(
            "Source path '{}' has no file name",
            source.display()
        )))
    })?;
    let mut gz_name = file_name.to_os_string();
    gz_name.push(".gz");
    let gz_name = PathBuf::from(gz_name);

    let symbols = HeaderSymbols::from_file_name(&gz_name.to_string_lossy());
    let temp_gz = source.with_file_name(&gz_name);
    let header =
        absolutize(&root, Path::new(&config.include_dir)).join(symbols.header_file_name());
    let data_dir = absolutize(&project_dir, Path::new(&config.data_dir));
    let data_file = data_dir.join(&gz_name);

    Ok(EmbedPaths {
        root,
        source,
        temp_gz,
        header,
        project_dir,
        data_dir,
        data_file,
        symbols,
    })
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Loads `.gzembed.toml` from `start_dir` or its nearest ancestor, falling back to defaults.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let mut config = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            debug!(
                "No project configuration file ({}) found from {} upward.",
                PROJECT_CONFIG_FILENAME,
                start_dir.display()
            );
            Config::default()
        }
    };
    expand_config_paths(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(EmbedError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

fn expand_config_paths(config: &mut Config) {
    config.source = shellexpand::tilde(&config.source).into_owned();
    config.include_dir = shellexpand::tilde(&config.include_dir).into_owned();
    config.data_dir = shellexpand::tilde(&config.data_dir).into_owned();
}

fn validate_config(config: &Config) -> Result<()> {
    for (key, value) in [
        ("source", &config.source),
        ("include_dir", &config.include_dir),
        ("data_dir", &config.data_dir),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!(EmbedError::Config(format!(
                "'{}' cannot be an empty path",
                key
            ))));
        }
    }
    if Path::new(&config.source).file_name().is_none() {
        return Err(anyhow!(EmbedError::Config(format!(
            "Source path '{}' has no file name",
            config.source
        ))));
    }
    Ok(())
}
