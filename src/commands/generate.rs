//! Generate command implementation
//!
//! Layers CLI flags over the optional config file over the defaults, then
//! runs the generator with status output unless `--quiet` is given.

use crate::cli::Cli;
use crate::config::{FileConfig, GeneratorConfig, ROOT_ENV_VAR, resolve_root};
use crate::error::{Result, config_invalid};
use crate::generator::Generator;
use crate::ui::InteractiveReporter;
use crate::ui::display::{display_output_files, display_summary};

/// Run the CLI
pub fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        display_output_files();
        return Ok(());
    }

    let generator = Generator::new(build_config(cli)?);

    if cli.quiet {
        generator.run()?;
        return Ok(());
    }

    let mut reporter = InteractiveReporter::new(cli.verbose);
    let report = generator.run_with(&mut reporter)?;
    display_summary(&report);

    Ok(())
}

/// Resolve the effective configuration for `cli`
pub fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let root = resolve_root(cli.root.as_deref()).ok_or_else(|| {
        config_invalid(format!(
            "No transaction root given: pass --root or set {ROOT_ENV_VAR}"
        ))
    })?;

    let mut config = GeneratorConfig::new(root, &cli.out_dir);

    if let Some(ref path) = cli.config {
        config = config.with_file(&FileConfig::load(path)?);
    }

    if let Some(ref dir) = cli.txn_dir {
        config = config.txn_dir(dir);
    }
    for substring in &cli.exclude_paths {
        config = config.exclude_path(substring);
    }
    if cli.disable_large_txn_ops {
        config = config.disable_large_txn_ops(true);
    }
    if !cli.index_excludes.is_empty() {
        config = config.index_exclusions(cli.index_excludes.iter().cloned());
    }
    if let Some(encoding) = cli.encoding {
        config = config.encoding(encoding);
    }
    if let Some(limit) = cli.chunk_limit {
        config = config.chunk_limit(limit);
    }

    config.validate()?;
    Ok(config)
}
