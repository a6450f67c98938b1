//! Lazily decompressed, process-wide cached payloads

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{CHECKSUM_LEN, IntegrityError, inflate_exact};

/// One embedded transaction binary
///
/// Holds the compressed literal segments, the original length and digest.
/// The decompressed bytes are produced on the first call to [`get`] and kept
/// for the remaining lifetime of the process. Concurrent first callers block
/// on the same initialization and observe the same slice.
///
/// [`get`]: LazyPayload::get
pub struct LazyPayload {
    segments: &'static [&'static [u8]],
    raw_len: usize,
    checksum: [u8; CHECKSUM_LEN],
    cache: OnceLock<Box<[u8]>>,
    decodes: AtomicUsize,
}

impl LazyPayload {
    /// Declare a payload; usable in `static` items
    pub const fn new(
        segments: &'static [&'static [u8]],
        raw_len: usize,
        checksum: [u8; CHECKSUM_LEN],
    ) -> Self {
        Self {
            segments,
            raw_len,
            checksum,
            cache: OnceLock::new(),
            decodes: AtomicUsize::new(0),
        }
    }

    /// Decompressed payload, decoded once and then served from the cache
    ///
    /// If the embedded bytes do not reproduce the original payload the
    /// process is aborted after printing the failure to stderr. A partially
    /// reconstructed instruction stream must never reach the device, and an
    /// abort cannot be caught or outlived by another thread.
    pub fn get(&self) -> &[u8] {
        self.cache.get_or_init(|| match self.decode() {
            Ok(bytes) => bytes.into_boxed_slice(),
            Err(err) => integrity_failure(&err),
        })
    }

    /// Decompress and verify without touching the cache
    pub fn decode(&self) -> Result<Vec<u8>, IntegrityError> {
        self.decodes.fetch_add(1, Ordering::Relaxed);

        let bytes = inflate_exact(self.segments, self.raw_len)?;
        let actual = blake3::hash(&bytes);
        if actual.as_bytes() != &self.checksum {
            return Err(IntegrityError::ChecksumMismatch {
                expected: blake3::Hash::from(self.checksum).to_hex().to_string(),
                actual: actual.to_hex().to_string(),
            });
        }

        Ok(bytes)
    }

    /// Length of the original payload in bytes
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Total length of the embedded compressed segments
    pub fn compressed_len(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    /// Number of literal segments the compressed bytes are split into
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the payload has already been decompressed into the cache
    pub fn is_initialized(&self) -> bool {
        self.cache.get().is_some()
    }

    /// How many times the payload has been decompressed
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::Relaxed)
    }
}

/// Report an unrecoverable payload and end the process
fn integrity_failure(err: &IntegrityError) -> ! {
    eprintln!("fatal: embedded transaction failed integrity check: {err}");
    std::process::abort()
}

impl std::fmt::Debug for LazyPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyPayload")
            .field("raw_len", &self.raw_len)
            .field("compressed_len", &self.compressed_len())
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
