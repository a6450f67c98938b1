//! Generator configuration
//!
//! [`GeneratorConfig`] is the single input of a generation run. Build
//! scripts construct it with the builder methods; the CLI layers command-line
//! flags over an optional YAML file ([`FileConfig`]) over the defaults.

pub mod file;

pub use file::FileConfig;

use std::path::{Path, PathBuf};

use crate::compress::{ESCAPE_WIDTH, LiteralEncoding};
use crate::emit::DEFAULT_RUNTIME_PATH;
use crate::emit::registry::DEFAULT_INDEX_EXCLUSIONS;
use crate::error::{Result, config_invalid};

/// Environment variable naming the transaction root when none is given
pub const ROOT_ENV_VAR: &str = "DD_ROOT";

/// Directory under the root that holds transaction binaries
pub const DEFAULT_TXN_DIR: &str = "transaction/stx";

/// Path substrings of transaction categories too large for every build
pub const LARGE_TXN_OPS: &[&str] = &["/mladfmatmulbias/", "/elwmul/"];

/// Generated declarations file (accessors + registry)
pub const DECLARATIONS_FILE: &str = "transaction.rs";

/// Generated definitions file (compressed payloads)
pub const DEFINITIONS_FILE: &str = "all_txn_pkg.rs";

/// Everything a generation run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root directory (e.g., `$DD_ROOT`)
    pub root: PathBuf,

    /// Directory under `root` that is scanned
    pub txn_dir: PathBuf,

    /// Where the two generated files are written
    pub out_dir: PathBuf,

    /// Path substrings dropped while scanning
    pub path_exclusions: Vec<String>,

    /// Add [`LARGE_TXN_OPS`] to the path exclusions
    pub disable_large_txn_ops: bool,

    /// Name substrings kept out of the prefix index
    pub index_exclusions: Vec<String>,

    pub encoding: LiteralEncoding,

    /// Maximum literal segment size; `None` uses the encoding's default
    pub chunk_limit: Option<usize>,

    /// Module path generated code uses to reach the runtime types
    pub runtime_path: String,
}

impl GeneratorConfig {
    pub fn new(root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            txn_dir: PathBuf::from(DEFAULT_TXN_DIR),
            out_dir: out_dir.into(),
            path_exclusions: Vec::new(),
            disable_large_txn_ops: false,
            index_exclusions: DEFAULT_INDEX_EXCLUSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            encoding: LiteralEncoding::default(),
            chunk_limit: None,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }

    /// Directory under the root to scan; empty scans the root itself
    #[must_use]
    pub fn txn_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.txn_dir = dir.into();
        self
    }

    #[must_use]
    pub fn exclude_path(mut self, substring: impl Into<String>) -> Self {
        self.path_exclusions.push(substring.into());
        self
    }

    #[must_use]
    pub fn disable_large_txn_ops(mut self, disable: bool) -> Self {
        self.disable_large_txn_ops = disable;
        self
    }

    /// Replace the index exclusions
    #[must_use]
    pub fn index_exclusions<I, S>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_exclusions = exclusions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: LiteralEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn chunk_limit(mut self, limit: usize) -> Self {
        self.chunk_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Directory that is actually scanned
    pub fn scan_root(&self) -> PathBuf {
        if self.txn_dir.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(&self.txn_dir)
        }
    }

    /// Explicit path exclusions plus the large-op category when enabled
    pub fn effective_path_exclusions(&self) -> Vec<String> {
        let mut exclusions = self.path_exclusions.clone();
        if self.disable_large_txn_ops {
            exclusions.extend(LARGE_TXN_OPS.iter().map(ToString::to_string));
        }
        exclusions
    }

    pub fn effective_chunk_limit(&self) -> usize {
        self.chunk_limit
            .unwrap_or_else(|| self.encoding.default_chunk_limit())
    }

    pub fn declarations_path(&self) -> PathBuf {
        self.out_dir.join(DECLARATIONS_FILE)
    }

    pub fn definitions_path(&self) -> PathBuf {
        self.out_dir.join(DEFINITIONS_FILE)
    }

    /// Names of the generated files, declarations first
    pub fn output_files() -> [&'static str; 2] {
        [DECLARATIONS_FILE, DEFINITIONS_FILE]
    }

    /// Overlay values from a config file; fields absent from the file are kept
    #[must_use]
    pub fn with_file(mut self, file: &FileConfig) -> Self {
        if let Some(ref dir) = file.txn_dir {
            self.txn_dir = dir.clone();
        }
        if let Some(ref exclusions) = file.path_exclusions {
            self.path_exclusions.extend(exclusions.iter().cloned());
        }
        if let Some(disable) = file.disable_large_txn_ops {
            self.disable_large_txn_ops = disable;
        }
        if let Some(ref exclusions) = file.index_exclusions {
            self.index_exclusions = exclusions.clone();
        }
        if let Some(encoding) = file.encoding {
            self.encoding = encoding;
        }
        if let Some(limit) = file.chunk_limit {
            self.chunk_limit = Some(limit);
        }
        if let Some(ref path) = file.runtime_path {
            self.runtime_path = path.clone();
        }
        self
    }

    /// Reject settings that cannot produce valid output
    pub fn validate(&self) -> Result<()> {
        if self.chunk_limit == Some(0) {
            return Err(config_invalid("chunk_limit must be greater than zero"));
        }
        if self.encoding == LiteralEncoding::EscapedText
            && self.chunk_limit.is_some_and(|limit| limit < ESCAPE_WIDTH)
        {
            return Err(config_invalid(format!(
                "chunk_limit must be at least {ESCAPE_WIDTH} with escaped-text encoding"
            )));
        }
        if self.runtime_path.trim().is_empty() {
            return Err(config_invalid("runtime_path cannot be empty"));
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(config_invalid("output directory cannot be empty"));
        }
        Ok(())
    }
}

/// Root from the CLI or, failing that, the `DD_ROOT` environment variable
pub fn resolve_root(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(ROOT_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TxnpackError;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("/dd", "/out");
        assert_eq!(config.scan_root(), PathBuf::from("/dd/transaction/stx"));
        assert_eq!(config.index_exclusions, vec!["param", "ddr_buffer_info"]);
        assert!(config.effective_path_exclusions().is_empty());
        assert_eq!(config.effective_chunk_limit(), 16384);
        assert_eq!(config.runtime_path, "::txnpack::runtime");
        assert_eq!(config.declarations_path(), PathBuf::from("/out/transaction.rs"));
        assert_eq!(config.definitions_path(), PathBuf::from("/out/all_txn_pkg.rs"));
    }

    #[test]
    fn test_large_txn_ops() {
        let config = GeneratorConfig::new("/dd", "/out")
            .exclude_path("/bigop/")
            .disable_large_txn_ops(true);
        assert_eq!(
            config.effective_path_exclusions(),
            vec!["/bigop/", "/mladfmatmulbias/", "/elwmul/"]
        );
    }

    #[test]
    fn test_empty_txn_dir_scans_root() {
        let config = GeneratorConfig::new("/dd", "/out").txn_dir("");
        assert_eq!(config.scan_root(), PathBuf::from("/dd"));
    }

    #[test]
    fn test_text_encoding_default_limit() {
        let config = GeneratorConfig::new("/dd", "/out").encoding(LiteralEncoding::EscapedText);
        assert_eq!(config.effective_chunk_limit(), 16380);
        assert_eq!(config.clone().chunk_limit(10).effective_chunk_limit(), 10);
    }

    #[test]
    fn test_validate_zero_chunk_limit() {
        let err = GeneratorConfig::new("/dd", "/out")
            .chunk_limit(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TxnpackError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_validate_escaped_text_limit_below_one_escape() {
        for limit in 1..ESCAPE_WIDTH {
            let err = GeneratorConfig::new("/dd", "/out")
                .encoding(LiteralEncoding::EscapedText)
                .chunk_limit(limit)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("at least 4"));
        }

        let ok = GeneratorConfig::new("/dd", "/out")
            .encoding(LiteralEncoding::EscapedText)
            .chunk_limit(ESCAPE_WIDTH);
        assert!(ok.validate().is_ok());
        assert!(GeneratorConfig::new("/dd", "/out").chunk_limit(1).validate().is_ok());
    }

    #[test]
    fn test_with_file_overlays_only_present_fields() {
        let file = FileConfig::from_yaml("index_exclusions: [meta]\nchunk_limit: 4096\n").unwrap();
        let config = GeneratorConfig::new("/dd", "/out").with_file(&file);
        assert_eq!(config.index_exclusions, vec!["meta"]);
        assert_eq!(config.chunk_limit, Some(4096));
        assert_eq!(config.txn_dir, PathBuf::from(DEFAULT_TXN_DIR));
        assert!(!config.disable_large_txn_ops);
    }

    #[test]
    #[serial]
    fn test_resolve_root_prefers_explicit() {
        // SAFETY: serialized with other tests touching DD_ROOT
        unsafe { std::env::set_var(ROOT_ENV_VAR, "/from/env") };
        assert_eq!(
            resolve_root(Some(Path::new("/explicit"))),
            Some(PathBuf::from("/explicit"))
        );
        assert_eq!(resolve_root(None), Some(PathBuf::from("/from/env")));
        unsafe { std::env::remove_var(ROOT_ENV_VAR) };
        assert_eq!(resolve_root(None), None);
    }
}
