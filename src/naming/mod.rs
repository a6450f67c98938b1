//! Resource naming
//!
//! A resource is named `<parent directory>_<stem>`, where the stem is the
//! file name up to its first `.`: `stx/opA/weights.bin` becomes
//! `opA_weights`. Downstream operators look transactions up by these names,
//! so the scheme cannot change. It is collision-prone, so every name is
//! claimed through a [`NameDeriver`] that rejects duplicates instead of
//! letting a later file shadow an earlier one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ResourceName;
use crate::emit::registry::REGISTRY_SYMBOLS;
use crate::error::{Result, invalid_name, name_collision, reserved_name};

/// Derive the registry name for a resource path
pub fn derive_name(path: &Path) -> Result<String> {
    let invalid = || invalid_name(path.display().to_string());

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(invalid)?;
    let stem = file_name.split('.').next().unwrap_or_default();
    let dir_name = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .ok_or_else(invalid)?;

    if stem.is_empty() || dir_name.is_empty() {
        return Err(invalid());
    }

    Ok(format!("{dir_name}_{stem}"))
}

/// Lowercase, identifier-safe form of a name
///
/// Every character outside `[A-Za-z0-9]` becomes `_`. Generated symbols are
/// always prefixed (`get_`, `RES_`), so a leading digit is fine.
pub fn to_ident(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Hands out names and refuses duplicates
#[derive(Debug, Default)]
pub struct NameDeriver {
    /// name -> path that claimed it
    names: HashMap<String, PathBuf>,
    /// ident -> name that claimed it
    idents: HashMap<String, String>,
}

impl NameDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and reserve the name for `path`
    ///
    /// Fails when another path already produced the same name, or a
    /// different name that normalizes to the same identifier, or when a
    /// generated symbol would shadow one of the registry's.
    pub fn claim(&mut self, path: &Path) -> Result<ResourceName> {
        let name = derive_name(path)?;
        let ident = to_ident(&name);

        if let Some(first) = self.names.get(&name) {
            return Err(name_collision(
                name,
                first.display().to_string(),
                path.display().to_string(),
            ));
        }

        if let Some(other) = self.idents.get(&ident) {
            let first = self
                .names
                .get(other)
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            return Err(name_collision(
                format!("{name} (identifier '{ident}' already used by '{other}')"),
                first,
                path.display().to_string(),
            ));
        }

        let claimed = ResourceName { name, ident };
        for symbol in [
            claimed.accessor(),
            claimed.static_name(),
            claimed.segments_name(),
        ] {
            if REGISTRY_SYMBOLS.contains(&symbol.as_str()) {
                return Err(reserved_name(
                    claimed.name,
                    path.display().to_string(),
                    symbol,
                ));
            }
        }

        self.names.insert(claimed.name.clone(), path.to_path_buf());
        self.idents.insert(claimed.ident.clone(), claimed.name.clone());

        Ok(claimed)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
