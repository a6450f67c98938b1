//! Registry generation
//!
//! Every resource is dispatchable by exact name. Only resources whose name
//! contains none of the index exclusions are listed for prefix search; the
//! default exclusions keep parameter sidecars and buffer descriptors, which
//! exist once per transaction, out of prefix results.

use std::io::{self, Write};

use crate::domain::ResourceSet;

/// Name substrings kept out of the prefix index by default
pub const DEFAULT_INDEX_EXCLUSIONS: &[&str] = &["param", "ddr_buffer_info"];

/// Symbols the registry emits into the declarations file
pub const REGISTRY_SYMBOLS: &[&str] = &[
    "REGISTRY_ENTRIES",
    "REGISTRY_INDEX",
    "REGISTRY",
    "get_txn",
    "get_txn_bytes",
    "match_prefix",
];

/// Builds the dispatch table and prefix index
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    runtime_path: String,
    index_exclusions: Vec<String>,
}

impl RegistryBuilder {
    pub fn new(runtime_path: impl Into<String>, index_exclusions: Vec<String>) -> Self {
        Self {
            runtime_path: runtime_path.into(),
            index_exclusions,
        }
    }

    /// Names eligible for prefix search, in discovery order
    pub fn index<'a>(&'a self, set: &'a ResourceSet) -> Vec<&'a str> {
        set.index_eligible(&self.index_exclusions)
            .map(|r| r.name.name.as_str())
            .collect()
    }

    /// Emit the dispatch table, the index and the lookup functions
    pub fn emit<W: Write>(&self, out: &mut W, set: &ResourceSet) -> io::Result<()> {
        let rt = &self.runtime_path;
        let index = self.index(set);

        writeln!(out)?;
        writeln!(
            out,
            "static REGISTRY_ENTRIES: [(&str, &{rt}::LazyPayload); {}] = [",
            set.len()
        )?;
        for resource in set {
            writeln!(
                out,
                "    ({:?}, &{}),",
                resource.name.name,
                resource.name.static_name()
            )?;
        }
        writeln!(out, "];")?;

        writeln!(out)?;
        writeln!(out, "static REGISTRY_INDEX: [&str; {}] = [", index.len())?;
        for name in &index {
            writeln!(out, "    {name:?},")?;
        }
        writeln!(out, "];")?;

        writeln!(out)?;
        writeln!(out, "/// Every embedded transaction, keyed by name")?;
        writeln!(
            out,
            "pub static REGISTRY: {rt}::Registry = {rt}::Registry::new(&REGISTRY_ENTRIES, &REGISTRY_INDEX);"
        )?;

        writeln!(out)?;
        writeln!(out, "/// Decompressed transaction with exactly this name")?;
        writeln!(
            out,
            "pub fn get_txn(name: &str) -> ::core::result::Result<&'static [u8], {rt}::NotFound> {{"
        )?;
        writeln!(out, "    REGISTRY.get(name)")?;
        writeln!(out, "}}")?;

        writeln!(out)?;
        writeln!(out, "/// Owned copy of the transaction with exactly this name")?;
        writeln!(
            out,
            "pub fn get_txn_bytes(name: &str) -> ::core::result::Result<::std::vec::Vec<u8>, {rt}::NotFound> {{"
        )?;
        writeln!(out, "    REGISTRY.get_bytes(name)")?;
        writeln!(out, "}}")?;

        writeln!(out)?;
        writeln!(out, "/// Indexed transaction names starting with `prefix`")?;
        writeln!(
            out,
            "pub fn match_prefix(prefix: &str) -> ::std::vec::Vec<&'static str> {{"
        )?;
        writeln!(out, "    REGISTRY.match_prefix(prefix)")?;
        writeln!(out, "}}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::fixtures::resource;
    use crate::emit::DEFAULT_RUNTIME_PATH;

    fn defaults() -> Vec<String> {
        DEFAULT_INDEX_EXCLUSIONS
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn sample_set() -> ResourceSet {
        let mut set = ResourceSet::new();
        set.push(resource("opA_params", "opa_params"));
        set.push(resource("opA_weights", "opa_weights"));
        set.push(resource("opA_ddr_buffer_info", "opa_ddr_buffer_info"));
        set.push(resource("opB_weights", "opb_weights"));
        set
    }

    #[test]
    fn test_index_applies_name_exclusions() {
        let builder = RegistryBuilder::new(DEFAULT_RUNTIME_PATH, defaults());
        let set = sample_set();
        assert_eq!(builder.index(&set), vec!["opA_weights", "opB_weights"]);
    }

    #[test]
    fn test_index_without_exclusions() {
        let builder = RegistryBuilder::new(DEFAULT_RUNTIME_PATH, vec![]);
        let set = sample_set();
        assert_eq!(builder.index(&set).len(), 4);
    }

    #[test]
    fn test_emit_lists_every_resource_for_dispatch() {
        let builder = RegistryBuilder::new(DEFAULT_RUNTIME_PATH, defaults());
        let mut out = Vec::new();
        builder.emit(&mut out, &sample_set()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(
            "static REGISTRY_ENTRIES: [(&str, &::txnpack::runtime::LazyPayload); 4] = ["
        ));
        assert!(text.contains("    (\"opA_params\", &RES_OPA_PARAMS),"));
        assert!(text.contains("    (\"opA_ddr_buffer_info\", &RES_OPA_DDR_BUFFER_INFO),"));
        assert!(text.contains("static REGISTRY_INDEX: [&str; 2] = [\n    \"opA_weights\",\n    \"opB_weights\",\n];"));
        assert!(text.contains("pub fn get_txn(name: &str)"));
        assert!(text.contains("pub fn match_prefix(prefix: &str)"));
    }

    #[test]
    fn test_emit_empty_set() {
        let builder = RegistryBuilder::new(DEFAULT_RUNTIME_PATH, defaults());
        let mut out = Vec::new();
        builder.emit(&mut out, &ResourceSet::new()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("; 0] = [\n];"));
    }
}
