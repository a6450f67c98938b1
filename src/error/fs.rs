//! File system errors

use super::TxnpackError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> TxnpackError {
    TxnpackError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
