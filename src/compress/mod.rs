//! Payload compression and literal encoding
//!
//! Payloads are zlib-compressed at the default level. Compilers cap the size
//! of a single literal, so the compressed bytes are emitted as a list of
//! segments, each within the configured chunk limit. Segments are byte-array
//! literals by default; escaped byte-string literals are kept as a fallback.

use std::fmt::Write as _;
use std::io::Write as _;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use serde::{Deserialize, Serialize};

/// Default segment size for byte-array literals
pub const DEFAULT_BYTE_CHUNK_LIMIT: usize = 16 * 1024;

/// Default segment length for escaped text literals (MSVC caps string literals near 16 KiB)
pub const DEFAULT_TEXT_CHUNK_LIMIT: usize = 16380;

/// Characters per escaped byte (`\xNN`)
pub const ESCAPE_WIDTH: usize = 4;

/// How compressed bytes are written into generated source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralEncoding {
    /// `&[0x78, 0x9c, ...]` segments
    #[default]
    ByteArray,
    /// `b"\x78\x9c..."` segments
    EscapedText,
}

impl LiteralEncoding {
    pub fn default_chunk_limit(self) -> usize {
        match self {
            LiteralEncoding::ByteArray => DEFAULT_BYTE_CHUNK_LIMIT,
            LiteralEncoding::EscapedText => DEFAULT_TEXT_CHUNK_LIMIT,
        }
    }
}

/// Compressed payload plus what is needed to restore it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    pub bytes: Vec<u8>,
    pub raw_len: usize,
}

/// zlib-compress `raw` at the default level
pub fn compress(raw: &[u8]) -> std::io::Result<Compressed> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::default());
    encoder.write_all(raw)?;
    let bytes = encoder.finish()?;

    Ok(Compressed {
        bytes,
        raw_len: raw.len(),
    })
}

/// Split `text` into consecutive pieces of at most `limit` bytes
///
/// Splits only on char boundaries; a `limit` of zero is treated as one.
pub fn split_literal(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut segments = Vec::with_capacity(text.len().div_ceil(limit));
    let mut rest = text;

    while !rest.is_empty() {
        let mut end = limit.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(end);
        segments.push(head);
        rest = tail;
    }

    segments
}

/// Escape every byte as `\xNN`
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * ESCAPE_WIDTH);
    for byte in bytes {
        let _ = write!(out, "\\x{byte:02x}");
    }
    out
}

/// Rust expressions for each literal segment of `bytes`
///
/// For [`LiteralEncoding::EscapedText`] the limit counts characters and is
/// rounded down to whole escapes so no escape is split across segments.
pub fn encode_segments(bytes: &[u8], encoding: LiteralEncoding, chunk_limit: usize) -> Vec<String> {
    match encoding {
        LiteralEncoding::ByteArray => bytes
            .chunks(chunk_limit.max(1))
            .map(byte_array_literal)
            .collect(),
        LiteralEncoding::EscapedText => {
            let escaped = escape_bytes(bytes);
            let limit = (chunk_limit / ESCAPE_WIDTH).max(1) * ESCAPE_WIDTH;
            split_literal(&escaped, limit)
                .into_iter()
                .map(|segment| format!("b\"{segment}\""))
                .collect()
        }
    }
}

/// `&[0x.., ...]`, wrapped every 16 bytes
fn byte_array_literal(chunk: &[u8]) -> String {
    let mut out = String::with_capacity(chunk.len() * 6 + 8);
    out.push_str("&[");
    for (i, byte) in chunk.iter().enumerate() {
        if i % 16 == 0 {
            out.push_str("\n        ");
        } else {
            out.push(' ');
        }
        let _ = write!(out, "0x{byte:02x},");
    }
    out.push_str("\n    ]");
    out
}
