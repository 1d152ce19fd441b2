//! # gzembed Compression Utilities (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! This module is the single "produce compressed bytes" step shared by both
//! embedder modes. Header mode and file mode differ only in how they serialize
//! the result; the gzip stream itself always comes from here.
//!
//! ## Architecture
//!
//! The module leverages the `flate2` crate for gzip encoding.
//!
//! - `gzip_encoder` builds a `GzEncoder` at maximum compression with a fixed
//!   gzip header: modification time 0, no embedded file name. Identical input
//!   therefore always yields byte-identical output.
//! - `compress_file` streams a source file into a destination `.gz` file.
//! - `CompressedAsset` holds the compressed bytes of one source asset in
//!   memory, ready to be rendered.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::compression::{self, CompressedAsset};
//! use std::path::Path;
//!
//! # fn main() -> crate::core::error::Result<()> {
//! let source = Path::new("src/index.html");
//! let gz = Path::new("src/index.html.gz");
//!
//! // Stream the source into a .gz file on disk
//! compression::compress_file(source, gz)?;
//!
//! // Load it back for rendering
//! let asset = CompressedAsset::from_gzip_file(source, gz)?;
//! println!("{} compressed to {} bytes", source.display(), asset.len());
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{EmbedError, Result};
use flate2::{write::GzEncoder, Compression, GzBuilder};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Wraps `writer` in a gzip encoder configured for reproducible output.
pub fn gzip_encoder<W: Write>(writer: W) -> GzEncoder<W> {
    GzBuilder::new().mtime(0).write(writer, Compression::best())
}

/// Compresses the full contents of `source` into `dest`, returning the compressed size.
///
/// ## Errors
///
/// - `EmbedError::MissingSource` if `source` is not an existing regular file.
/// - `EmbedError::OutputWriteFailure` if `dest` cannot be created.
/// - `EmbedError::CompressionFailure` for any I/O error while reading the
///   source or writing and finishing the gzip stream. The error names both paths.
pub fn compress_file(source: &Path, dest: &Path) -> Result<u64> {
    if !source.is_file() {
        return Err(EmbedError::MissingSource {
            path: source.to_path_buf(),
        }
        .into());
    }
    let compression_failure = |e: io::Error| EmbedError::CompressionFailure {
        path: source.to_path_buf(),
        dest: dest.to_path_buf(),
        error: e,
    };

    let input = File::open(source).map_err(compression_failure)?;
    let output = File::create(dest).map_err(|e| EmbedError::OutputWriteFailure {
        path: dest.to_path_buf(),
        error: e,
    })?;

    let mut reader = BufReader::new(input);
    let mut encoder = gzip_encoder(BufWriter::new(output));
    let read = io::copy(&mut reader, &mut encoder).map_err(compression_failure)?;
    let mut writer = encoder.finish().map_err(compression_failure)?;
    writer.flush().map_err(compression_failure)?;

    let written = fs::metadata(dest).map_err(compression_failure)?.len();
    info!(
        "Compressed {} ({} bytes) to {} ({} bytes)",
        source.display(),
        read,
        dest.display(),
        written
    );
    Ok(written)
}

/// The gzip-compressed form of one source asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedAsset {
    source_path: PathBuf,
    bytes: Vec<u8>,
}

impl CompressedAsset {
    /// Loads a gzip stream previously produced from `source` by [`compress_file`].
    pub fn from_gzip_file(source: &Path, gz_path: &Path) -> Result<Self> {
        let bytes = fs::read(gz_path).map_err(|e| EmbedError::CompressionFailure {
            path: source.to_path_buf(),
            dest: gz_path.to_path_buf(),
            error: e,
        })?;
        debug!("Read {} bytes back from {}", bytes.len(), gz_path.display());
        Ok(Self {
            source_path: source.to_path_buf(),
            bytes,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::tempdir;

    fn gunzip(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_compress_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("index.html");
        let dest = dir.path().join("index.html.gz");
        let html = "<html><body>".to_string() + &"hello ".repeat(200) + "</body></html>";
        fs::write(&source, &html)?;

        let size = compress_file(&source, &dest)?;
        let gz = fs::read(&dest)?;

        assert_eq!(size as usize, gz.len());
        assert!(gz.len() < html.len());
        assert_eq!(&gz[..2], &[0x1F, 0x8B]);
        assert_eq!(gunzip(&gz), html.as_bytes());
        Ok(())
    }

    #[test]
    fn test_output_is_deterministic() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("index.html");
        fs::write(&source, "<html></html>")?;
        let first = dir.path().join("a.gz");
        let second = dir.path().join("b.gz");

        compress_file(&source, &first)?;
        compress_file(&source, &second)?;

        assert_eq!(fs::read(&first)?, fs::read(&second)?);
        Ok(())
    }

    #[test]
    fn test_gzip_header_has_no_timestamp_and_max_level() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("index.html");
        let dest = dir.path().join("index.html.gz");
        fs::write(&source, "<html></html>")?;
        compress_file(&source, &dest)?;
        let asset = CompressedAsset::from_gzip_file(&source, &dest)?;
        let bytes = asset.bytes();

        // mtime is bytes 4..8, FLG (byte 3) has FNAME clear
        assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
        assert_eq!(bytes[3] & 0x08, 0);
        // XFL = 2 marks maximum compression
        assert_eq!(bytes[8], 2);
        Ok(())
    }

    #[test]
    fn test_html_scenario_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("index.html");
        let dest = dir.path().join("index.html.gz");
        fs::write(&source, "<html></html>")?;

        compress_file(&source, &dest)?;
        let asset = CompressedAsset::from_gzip_file(&source, &dest)?;
        assert!(!asset.is_empty());
        assert_eq!(asset.len(), fs::metadata(&dest)?.len() as usize);
        assert_eq!(asset.source_path(), source.as_path());
        assert_eq!(gunzip(asset.bytes()), b"<html></html>");
        Ok(())
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("index.html");
        let dest = dir.path().join("index.html.gz");

        let err = compress_file(&source, &dest).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmbedError>(),
            Some(EmbedError::MissingSource { .. })
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_unwritable_destination_is_output_write_failure() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("index.html");
        fs::write(&source, "<html></html>").unwrap();
        let dest = dir.path().join("missing-dir").join("index.html.gz");

        let err = compress_file(&source, &dest).unwrap_err();
        match err.downcast_ref::<EmbedError>() {
            Some(EmbedError::OutputWriteFailure { path, .. }) => assert_eq!(path, &dest),
            other => panic!("expected OutputWriteFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_intermediate_names_both_paths() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("index.html");
        let gz_path = dir.path().join("index.html.gz");

        let err = CompressedAsset::from_gzip_file(&source, &gz_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmbedError>(),
            Some(EmbedError::CompressionFailure { .. })
        ));
        let message = err.to_string();
        assert!(message.starts_with("Error compressing "));
        assert!(message.contains("index.html to "));
        assert!(message.contains("index.html.gz: "));
    }
}
