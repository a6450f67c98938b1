//! Compression and output errors

use super::TxnpackError;

/// Creates a compression failed error
pub fn compression_failed(path: impl Into<String>, reason: impl Into<String>) -> TxnpackError {
    TxnpackError::CompressionFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an emit failed error
pub fn emit_failed(path: impl Into<String>, reason: impl Into<String>) -> TxnpackError {
    TxnpackError::EmitFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
