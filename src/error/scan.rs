//! Scan errors

use super::TxnpackError;

/// Creates a root not found error
pub fn root_not_found(path: impl Into<String>) -> TxnpackError {
    TxnpackError::RootNotFound { path: path.into() }
}

/// Creates a scan failed error
pub fn scan_failed(path: impl Into<String>, reason: impl Into<String>) -> TxnpackError {
    TxnpackError::ScanFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
