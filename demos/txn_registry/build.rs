//! Embed `dd/transaction/stx` into this crate

use std::env;
use std::path::PathBuf;

use txnpack::{Generator, GeneratorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let config = GeneratorConfig::new(manifest_dir.join("dd"), out_dir).exclude_path("/bigop/");
    let report = Generator::new(config).run()?;
    report.emit_cargo_rerun_hints();

    Ok(())
}
