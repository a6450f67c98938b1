//! Naming errors

use super::TxnpackError;

/// Creates an invalid name error
pub fn invalid(path: impl Into<String>) -> TxnpackError {
    TxnpackError::InvalidName { path: path.into() }
}

/// Creates a reserved name error
pub fn reserved(
    name: impl Into<String>,
    path: impl Into<String>,
    symbol: impl Into<String>,
) -> TxnpackError {
    TxnpackError::ReservedName {
        name: name.into(),
        path: path.into(),
        symbol: symbol.into(),
    }
}

/// Creates a name collision error
pub fn collision(
    name: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> TxnpackError {
    TxnpackError::NameCollision {
        name: name.into(),
        first: first.into(),
        second: second.into(),
    }
}
