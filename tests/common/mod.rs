//! Common test utilities for txnpack integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch transaction root plus an output directory
#[allow(dead_code)]
pub struct TestRoot {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the transaction root (what `--root` points at)
    pub root: PathBuf,
    /// Path to the output directory (not created up front)
    pub out: PathBuf,
}

impl TestRoot {
    /// Create a new root with an empty `transaction/stx` tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("dd");
        let out = temp.path().join("gen");
        std::fs::create_dir_all(root.join("transaction/stx"))
            .expect("Failed to create transaction directory");
        Self { temp, root, out }
    }

    /// Write a transaction file relative to `transaction/stx`
    pub fn write_txn(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.root.join("transaction/stx").join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a file relative to the temporary directory
    #[allow(dead_code)]
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Read a generated file from the output directory
    pub fn read_output(&self, name: &str) -> String {
        std::fs::read_to_string(self.out.join(name)).expect("Failed to read generated file")
    }

    /// Check if a generated file exists
    pub fn output_exists(&self, name: &str) -> bool {
        self.out.join(name).exists()
    }

    /// `txnpack --root <root> --out-dir <out>`
    pub fn cmd(&self) -> Command {
        let mut cmd = txnpack_cmd();
        cmd.arg("--root")
            .arg(&self.root)
            .arg("--out-dir")
            .arg(&self.out);
        cmd
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

/// The real txnpack binary, isolated from the caller's `DD_ROOT`
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn txnpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("txnpack").expect("txnpack binary not built");
    cmd.env_remove("DD_ROOT").env("NO_COLOR", "1");
    cmd
}

/// Deterministic, poorly compressible bytes
#[allow(dead_code)]
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// Modification time of a file
#[allow(dead_code)]
pub fn modified(path: &Path) -> std::time::SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("Failed to read metadata")
}
