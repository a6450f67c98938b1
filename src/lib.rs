//! txnpack - transaction resource compiler
//!
//! Build-time half: [`Generator`] scans a transaction root, derives a stable
//! name for every `.bin`/`.json` file, zlib-compresses it and writes two Rust
//! files meant to be `include!`d into the same module:
//!
//! - `transaction.rs`: `get_<name>()` accessors, `get_txn`, `get_txn_bytes`
//!   and `match_prefix`;
//! - `all_txn_pkg.rs`: the compressed literal segments.
//!
//! Runtime half: [`runtime`] holds the types the generated code links
//! against. A payload is decompressed on first access, exactly once, and
//! cached for the life of the process.
//!
//! ```no_run
//! // build.rs
//! let out_dir = std::env::var("OUT_DIR").unwrap();
//! let report = txnpack::Generator::new(txnpack::GeneratorConfig::new("dd", out_dir))
//!     .run()
//!     .unwrap();
//! report.emit_cargo_rerun_hints();
//! ```

pub mod cli;
pub mod commands;
pub mod compress;
pub mod config;
pub mod domain;
pub mod emit;
pub mod error;
pub mod generator;
pub mod hash;
pub mod naming;
pub mod runtime;
pub mod scan;
pub mod ui;

pub use compress::LiteralEncoding;
pub use config::GeneratorConfig;
pub use error::{Result, TxnpackError};
pub use generator::{GenerationReport, Generator};
