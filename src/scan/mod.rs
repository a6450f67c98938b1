//! Resource discovery under a transaction root
//!
//! Walks the root depth-first with entries sorted by file name, so the same
//! tree always yields the same sequence. Only `.bin` payloads and `.json`
//! sidecars are picked up. Paths containing an excluded substring are
//! dropped here, before anything reads them.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, root_not_found, scan_failed};

/// File extensions treated as resources
pub const RESOURCE_EXTENSIONS: &[&str] = &["bin", "json"];

/// Path with `\` separators replaced by `/`
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Whether `path` contains any of `exclusions` as a substring
pub fn is_path_excluded(path: &Path, exclusions: &[String]) -> bool {
    let normalized = normalize_path(path);
    exclusions
        .iter()
        .any(|excluded| normalized.contains(excluded.as_str()))
}

fn has_resource_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RESOURCE_EXTENSIONS.contains(&ext))
}

/// Enumerates resource files under a root
#[derive(Debug, Clone)]
pub struct PathScanner {
    root: PathBuf,
    exclusions: Vec<String>,
}

impl PathScanner {
    /// Create a scanner, failing if `root` is not an existing directory
    pub fn new(root: impl Into<PathBuf>, exclusions: Vec<String>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(root_not_found(root.display().to_string()));
        }
        std::fs::read_dir(&root)
            .map_err(|e| scan_failed(root.display().to_string(), e.to_string()))?;

        Ok(Self { root, exclusions })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the root
    ///
    /// Each call starts a fresh walk. Unreadable entries surface as
    /// `ScanFailed` items.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let keep = entry.file_type().is_file()
                        && has_resource_extension(path)
                        && !is_path_excluded(path, &self.exclusions);
                    keep.then(|| Ok(entry.into_path()))
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.display().to_string(), |p| {
                            p.display().to_string()
                        });
                    Some(Err(scan_failed(path, e.to_string())))
                }
            })
    }

    /// Collect the whole walk, stopping at the first error
    pub fn collect_paths(&self) -> Result<Vec<PathBuf>> {
        self.iter().collect()
    }
}
