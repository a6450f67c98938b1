//! Resource domain types
//!
//! Contains the embedded-file model and the ordered set produced by a scan.

use std::path::PathBuf;

/// Derived name of a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName {
    /// Registry key, `<parent dir>_<stem>` (e.g., "opA_weights")
    pub name: String,

    /// Lowercase identifier-safe form used in generated symbols (e.g., "opa_weights")
    pub ident: String,
}

impl ResourceName {
    /// Generated accessor function name
    pub fn accessor(&self) -> String {
        format!("get_{}", self.ident)
    }

    /// Generated static holding the lazy payload
    pub fn static_name(&self) -> String {
        format!("RES_{}", self.ident.to_ascii_uppercase())
    }

    /// Generated static holding the compressed literal segments
    pub fn segments_name(&self) -> String {
        format!("SEG_{}", self.ident.to_ascii_uppercase())
    }
}

/// One embedded file, compressed and ready to emit
#[derive(Debug, Clone)]
pub struct Resource {
    pub name: ResourceName,

    /// Absolute path to the source file
    pub source_path: PathBuf,

    /// Path relative to the scan root with `/` separators (e.g., "opA/weights.bin")
    pub relative_path: String,

    /// Length of the original file content
    pub raw_size: usize,

    /// zlib-compressed file content
    pub compressed: Vec<u8>,

    /// BLAKE3 digest of the original file content
    pub checksum: [u8; blake3::OUT_LEN],
}

impl Resource {
    pub fn compressed_size(&self) -> usize {
        self.compressed.len()
    }
}

/// Resources in discovery order
#[derive(Debug, Clone, Default)]
pub struct ResourceSet {
    resources: Vec<Resource>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.name.name.as_str())
    }

    /// Resources whose name contains none of `exclusions`
    pub fn index_eligible<'a>(
        &'a self,
        exclusions: &'a [String],
    ) -> impl Iterator<Item = &'a Resource> + 'a {
        self.resources.iter().filter(move |r| {
            !exclusions
                .iter()
                .any(|excluded| r.name.name.contains(excluded.as_str()))
        })
    }

    pub fn total_raw_size(&self) -> usize {
        self.resources.iter().map(|r| r.raw_size).sum()
    }

    pub fn total_compressed_size(&self) -> usize {
        self.resources.iter().map(Resource::compressed_size).sum()
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::resource;
    use super::*;

    #[test]
    fn test_generated_symbol_names() {
        let name = ResourceName {
            name: "opA_weights".to_string(),
            ident: "opa_weights".to_string(),
        };
        assert_eq!(name.accessor(), "get_opa_weights");
        assert_eq!(name.static_name(), "RES_OPA_WEIGHTS");
        assert_eq!(name.segments_name(), "SEG_OPA_WEIGHTS");
    }

    #[test]
    fn test_index_eligible_filters_by_name_substring() {
        let mut set = ResourceSet::new();
        set.push(resource("opA_weights", "opa_weights"));
        set.push(resource("opA_params", "opa_params"));
        set.push(resource("opA_ddr_buffer_info", "opa_ddr_buffer_info"));

        let exclusions = vec!["param".to_string(), "ddr_buffer_info".to_string()];
        let eligible: Vec<_> = set
            .index_eligible(&exclusions)
            .map(|r| r.name.name.as_str())
            .collect();
        assert_eq!(eligible, vec!["opA_weights"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_totals() {
        let mut set = ResourceSet::new();
        set.push(resource("a_x", "a_x"));
        set.push(resource("b_y", "b_y"));
        assert_eq!(set.total_raw_size(), 8);
        assert_eq!(set.total_compressed_size(), 6);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a_x", "b_y"]);
    }
}
