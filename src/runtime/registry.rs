//! Name-keyed dispatch and prefix search over embedded payloads

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{LazyPayload, NotFound};

/// Every embedded payload of a generated package, keyed by name
///
/// `entries` covers the whole package and backs exact-name dispatch.
/// `index` lists the names eligible for prefix search, in discovery order;
/// names filtered out of the index are still dispatchable.
pub struct Registry {
    entries: &'static [(&'static str, &'static LazyPayload)],
    index: &'static [&'static str],
    lookup: OnceLock<HashMap<&'static str, &'static LazyPayload>>,
}

impl Registry {
    pub const fn new(
        entries: &'static [(&'static str, &'static LazyPayload)],
        index: &'static [&'static str],
    ) -> Self {
        Self {
            entries,
            index,
            lookup: OnceLock::new(),
        }
    }

    fn lookup(&self) -> &HashMap<&'static str, &'static LazyPayload> {
        self.lookup
            .get_or_init(|| self.entries.iter().copied().collect())
    }

    /// Payload handle for an exact name
    pub fn payload(&self, name: &str) -> Result<&'static LazyPayload, NotFound> {
        self.lookup()
            .get(name)
            .copied()
            .ok_or_else(|| NotFound {
                name: name.to_string(),
            })
    }

    /// Decompressed payload for an exact name
    pub fn get(&self, name: &str) -> Result<&'static [u8], NotFound> {
        self.payload(name).map(LazyPayload::get)
    }

    /// Owned copy of the decompressed payload for an exact name
    pub fn get_bytes(&self, name: &str) -> Result<Vec<u8>, NotFound> {
        self.get(name).map(<[u8]>::to_vec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup().contains_key(name)
    }

    /// Index-eligible names starting with `prefix`, in discovery order
    ///
    /// Matching is case-sensitive. An empty prefix returns the whole index.
    pub fn match_prefix(&self, prefix: &str) -> Vec<&'static str> {
        self.index
            .iter()
            .copied()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    /// All dispatchable names in discovery order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .field("index", &self.index.len())
            .finish_non_exhaustive()
    }
}
