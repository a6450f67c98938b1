//! Exact-length zlib decompression over segmented literals

use std::io::{self, Read};

use flate2::read::ZlibDecoder;

use super::IntegrityError;

/// Reads a list of byte segments as one contiguous stream
struct Segments<'a, 'b> {
    rest: &'a [&'b [u8]],
    current: &'b [u8],
}

impl<'a, 'b> Segments<'a, 'b> {
    fn new(segments: &'a [&'b [u8]]) -> Self {
        Self {
            rest: segments,
            current: &[],
        }
    }
}

impl Read for Segments<'_, '_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.current.is_empty() {
            match self.rest.split_first() {
                Some((first, rest)) => {
                    self.current = first;
                    self.rest = rest;
                }
                None => return Ok(0),
            }
        }
        self.current.read(buf)
    }
}

/// Decompress `segments` into a buffer of exactly `raw_len` bytes
///
/// The stream is read at most one byte past `raw_len` so an oversized
/// payload is reported without being fully inflated.
pub fn inflate_exact(segments: &[&[u8]], raw_len: usize) -> Result<Vec<u8>, IntegrityError> {
    let limit = u64::try_from(raw_len).map_or(u64::MAX, |len| len.saturating_add(1));
    let mut decoder = ZlibDecoder::new(Segments::new(segments)).take(limit);

    let mut out = Vec::with_capacity(raw_len);
    decoder
        .read_to_end(&mut out)
        .map_err(|err| IntegrityError::Corrupt {
            reason: err.to_string(),
        })?;

    if out.len() != raw_len {
        return Err(IntegrityError::LengthMismatch {
            expected: raw_len,
            actual: out.len(),
        });
    }

    Ok(out)
}
