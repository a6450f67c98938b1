//! Transaction binaries embedded at build time
//!
//! Every file under `dd/transaction/stx` (except `bigop/`) is reachable by
//! its accessor, e.g. [`get_opa_weights`], or by name through [`get_txn`].

include!(concat!(env!("OUT_DIR"), "/transaction.rs"));
include!(concat!(env!("OUT_DIR"), "/all_txn_pkg.rs"));

pub use txnpack::runtime::NotFound;

/// Payload of `name` as little-endian 32-bit words
pub fn txn_words(name: &str) -> Result<Vec<u32>, NotFound> {
    get_txn(name).map(txnpack::runtime::words::to_words)
}

/// Append the payload of `name` to `out`, zero-padding a trailing partial word
pub fn append_txn_words(name: &str, out: &mut Vec<u32>) -> Result<(), NotFound> {
    let bytes = get_txn(name)?;
    txnpack::runtime::words::extend_words(bytes, out, true);
    Ok(())
}
