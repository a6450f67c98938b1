//! YAML configuration file (e.g. `txnpack.yaml`)
//!
//! ```yaml
//! txn_dir: transaction/stx
//! disable_large_txn_ops: true
//! path_exclusions: ["/experimental/"]
//! index_exclusions: [param, ddr_buffer_info]
//! encoding: byte-array
//! chunk_limit: 16384
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compress::LiteralEncoding;
use crate::error::{Result, TxnpackError, config};

/// Optional overrides read from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub txn_dir: Option<PathBuf>,

    /// Added to the path exclusions given on the command line
    #[serde(default)]
    pub path_exclusions: Option<Vec<String>>,

    #[serde(default)]
    pub disable_large_txn_ops: Option<bool>,

    /// Replaces the default index exclusions
    #[serde(default)]
    pub index_exclusions: Option<Vec<String>>,

    #[serde(default)]
    pub encoding: Option<LiteralEncoding>,

    #[serde(default)]
    pub chunk_limit: Option<usize>,

    #[serde(default)]
    pub runtime_path: Option<String>,
}

impl FileConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            TxnpackError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}
