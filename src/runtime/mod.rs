//! Runtime support linked into generated transaction packages
//!
//! Generated `all_txn_pkg.rs` files declare one [`LazyPayload`] per embedded
//! binary and generated `transaction.rs` files declare a [`Registry`] over
//! them. Nothing here knows the format of the payloads.
//!
//! Payloads are decompressed on first access and cached for the rest of the
//! process. A payload whose decompressed length or BLAKE3 digest does not
//! match what was recorded at generation time is never handed out.

mod inflate;
mod payload;
mod registry;
pub mod words;

pub use inflate::inflate_exact;
pub use payload::LazyPayload;
pub use registry::Registry;

use thiserror::Error;

/// Length of the BLAKE3 digest stored next to every payload
pub const CHECKSUM_LEN: usize = blake3::OUT_LEN;

/// Lookup of a transaction name that the registry does not contain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid transaction binary string: {name}")]
pub struct NotFound {
    pub name: String,
}

/// An embedded payload did not decompress to the bytes it was built from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("decompressed {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("corrupt compressed stream: {reason}")]
    Corrupt { reason: String },
}
