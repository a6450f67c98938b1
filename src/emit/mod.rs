//! Rust source generation
//!
//! Two files are produced and meant to be `include!`d into the same module:
//! - the declarations file (`transaction.rs`): one public accessor per
//!   resource plus the registry, see [`registry`];
//! - the definitions file (`all_txn_pkg.rs`): the compressed literal segments
//!   and a `LazyPayload` static per resource.
//!
//! Output depends only on the resource set and the emitter settings, so
//! regenerating an unchanged tree reproduces the files byte for byte.

pub mod registry;
pub mod writer;

pub use registry::RegistryBuilder;
pub use writer::{OutputTransaction, WriteOutcome};

use std::io::{self, Write};

use crate::compress::{LiteralEncoding, encode_segments};
use crate::domain::{Resource, ResourceSet};

/// Module path of the runtime support types, as seen from generated code
pub const DEFAULT_RUNTIME_PATH: &str = "::txnpack::runtime";

/// Banner written at the top of both generated files
pub fn banner(role: &str) -> String {
    format!(
        "// @generated by txnpack {}. Do not edit.\n//\n// {role}\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Writes per-resource declarations and definitions
#[derive(Debug, Clone)]
pub struct CodeEmitter {
    runtime_path: String,
    encoding: LiteralEncoding,
    chunk_limit: usize,
}

impl CodeEmitter {
    pub fn new(runtime_path: impl Into<String>, encoding: LiteralEncoding, chunk_limit: usize) -> Self {
        Self {
            runtime_path: runtime_path.into(),
            encoding,
            chunk_limit,
        }
    }

    pub fn runtime_path(&self) -> &str {
        &self.runtime_path
    }

    /// File banners for both streams
    pub fn write_headers<D: Write, F: Write>(
        &self,
        decls: &mut D,
        defs: &mut F,
        set: &ResourceSet,
    ) -> io::Result<()> {
        write!(
            decls,
            "{}",
            banner(&format!(
                "Accessors and registry for {} embedded transaction(s).",
                set.len()
            ))
        )?;
        write!(
            defs,
            "{}",
            banner(&format!(
                "Compressed payloads: {} bytes raw, {} bytes compressed.",
                set.total_raw_size(),
                set.total_compressed_size()
            ))
        )?;
        Ok(())
    }

    /// Emit the accessor declaration and the payload definition of one resource
    pub fn emit_resource<D: Write, F: Write>(
        &self,
        decls: &mut D,
        defs: &mut F,
        resource: &Resource,
    ) -> io::Result<()> {
        self.emit_declaration(decls, resource)?;
        self.emit_definition(defs, resource)
    }

    fn emit_declaration<W: Write>(&self, out: &mut W, resource: &Resource) -> io::Result<()> {
        let name = &resource.name;
        writeln!(out)?;
        writeln!(
            out,
            "/// `{}` ({} bytes)",
            comment_text(&resource.relative_path),
            resource.raw_size
        )?;
        writeln!(out, "pub fn {}() -> &'static [u8] {{", name.accessor())?;
        writeln!(out, "    {}.get()", name.static_name())?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn emit_definition<W: Write>(&self, out: &mut W, resource: &Resource) -> io::Result<()> {
        let name = &resource.name;
        let segments = encode_segments(&resource.compressed, self.encoding, self.chunk_limit);
        let rt = &self.runtime_path;

        writeln!(out)?;
        writeln!(
            out,
            "// {}: {} bytes, {} compressed, {} segment(s)",
            comment_text(&resource.relative_path),
            resource.raw_size,
            resource.compressed_size(),
            segments.len()
        )?;
        writeln!(
            out,
            "static {}: [&[u8]; {}] = [",
            name.segments_name(),
            segments.len()
        )?;
        for segment in &segments {
            writeln!(out, "    {segment},")?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;
        writeln!(
            out,
            "static {}: {rt}::LazyPayload = {rt}::LazyPayload::new(",
            name.static_name()
        )?;
        writeln!(out, "    &{},", name.segments_name())?;
        writeln!(out, "    {},", resource.raw_size)?;
        writeln!(out, "    {},", checksum_literal(&resource.checksum))?;
        writeln!(out, ");")?;
        Ok(())
    }
}

/// Path as it may appear inside a line comment
///
/// Control characters (newlines included) are written as escapes so a file
/// name can never end the comment.
fn comment_text(path: &str) -> String {
    path.escape_debug().to_string()
}

fn checksum_literal(checksum: &[u8]) -> String {
    let bytes: Vec<String> = checksum.iter().map(|b| format!("0x{b:02x}")).collect();
    format!("[{}]", bytes.join(", "))
}
