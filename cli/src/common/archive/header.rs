//! # gzembed C Header Rendering (`common::archive::header`)
//!
//! File: cli/src/common/archive/header.rs
//!
//! ## Overview
//!
//! Renders compressed bytes into a C header that stores them in program memory
//! (`PROGMEM`) on the device. The output layout is fixed:
//!
//! ```c
//! #ifndef INDEX_HTML_GZ_H
//! #define INDEX_HTML_GZ_H
//!
//! #include <pgmspace.h>
//!
//! // Binary data of index.html.gz
//! const unsigned char index_html_gz_data[] PROGMEM = {
//!     0x1F, 0x8B, 0x08, ...
//! };
//!
//! // Length of the gzip-compressed data
//! const size_t index_html_gz_len = sizeof(index_html_gz_data);
//!
//! #endif
//! ```
//!
//! The byte listing holds sixteen bytes per line, each line indented by four
//! spaces. Every line but the last ends with a comma.
//!
use std::fmt::Write;

/// Bytes rendered on each line of the array initializer.
pub const BYTES_PER_LINE: usize = 16;

const INDENT: &str = "    ";

/// C identifiers derived from the compressed file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSymbols {
    /// File name quoted in the array comment, e.g. `index.html.gz`.
    pub label: String,
    /// Include guard, e.g. `INDEX_HTML_GZ_H`.
    pub guard: String,
    /// Array identifier, e.g. `index_html_gz_data`.
    pub array: String,
    /// Length constant identifier, e.g. `index_html_gz_len`.
    pub len: String,
    stem: String,
}

impl HeaderSymbols {
    /// `index.html.gz` becomes `index_html_gz`, and so on for the other names.
    pub fn from_file_name(file_name: &str) -> Self {
        let mut stem: String = file_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if stem.starts_with(|c: char| c.is_ascii_digit()) {
            stem.insert(0, '_');
        }
        Self {
            label: file_name.to_string(),
            guard: format!("{}_H", stem.to_ascii_uppercase()),
            array: format!("{}_data", stem),
            len: format!("{}_len", stem),
            stem,
        }
    }

    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.stem)
    }
}

/// Formats `bytes` as the body of a C array initializer.
pub fn format_hex_listing(bytes: &[u8]) -> String {
    let mut listing = String::with_capacity(bytes.len() * 6 + bytes.len() / BYTES_PER_LINE * 8);
    let total_lines = bytes.len().div_ceil(BYTES_PER_LINE);
    for (index, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        if index > 0 {
            listing.push('\n');
        }
        listing.push_str(INDENT);
        for (pos, byte) in chunk.iter().enumerate() {
            if pos > 0 {
                listing.push_str(", ");
            }
            // Writing into a String cannot fail.
            let _ = write!(listing, "0x{:02X}", byte);
        }
        if index + 1 < total_lines {
            listing.push(',');
        }
    }
    listing
}

/// Renders the complete header text for `bytes`.
pub fn render_header(bytes: &[u8], symbols: &HeaderSymbols) -> String {
    format!(
        "#ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <pgmspace.h>\n\
         \n\
         // Binary data of {label}\n\
         const unsigned char {array}[] PROGMEM = {{\n\
         {listing}\n\
         }};\n\
         \n\
         // Length of the gzip-compressed data\n\
         const size_t {len} = sizeof({array});\n\
         \n\
         #endif\n",
        guard = symbols.guard,
        label = symbols.label,
        array = symbols.array,
        len = symbols.len,
        listing = format_hex_listing(bytes),
    )
}
