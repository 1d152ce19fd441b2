//! # gzembed CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`header.rs`, `data.rs`,
//! `main_tests.rs`). Each of those files is compiled as a separate test crate
//! that runs the compiled `gzembed` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

/// # Get gzembed Command (`gzembed_cmd`)
///
/// Creates a `Command` for the compiled `gzembed` binary with the
/// environment fallbacks cleared, so the outer environment cannot leak
/// into a test.
///
/// ## Panics
/// Panics if the `gzembed` binary cannot be found via `Command::cargo_bin`.
pub fn gzembed_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gzembed").expect("Failed to find gzembed binary for testing");
    cmd.env_remove("GZEMBED_ROOT")
        .env_remove("PROJECT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a temporary library root with `src/index.html` holding `content`.
pub fn library_with(content: &[u8]) -> TempDir {
    let root = tempfile::tempdir().expect("Failed to create temp library root");
    fs::create_dir_all(root.path().join("src")).expect("Failed to create src dir");
    fs::write(root.path().join("src/index.html"), content).expect("Failed to write index.html");
    root
}

/// Decompresses a gzip stream.
pub fn gunzip(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut out)
        .expect("Invalid gzip stream");
    out
}

/// Extracts the byte array from a generated header.
pub fn header_bytes(header: &Path) -> Vec<u8> {
    let text = fs::read_to_string(header).expect("Failed to read header");
    let start = text.find("PROGMEM = {").expect("Array declaration missing");
    let end = text.find("};").expect("Array terminator missing");
    text[start..end]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|token| token.strip_prefix("0x"))
        .map(|hex| u8::from_str_radix(hex, 16).expect("Invalid hex literal"))
        .collect()
}
