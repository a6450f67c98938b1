//! The generation pipeline
//!
//! One linear pass: scan, name, compress, emit, write. The first error ends
//! the run and nothing is left behind in the output directory.

use std::fs;
use std::path::PathBuf;

use crate::compress::compress;
use crate::config::{DECLARATIONS_FILE, DEFINITIONS_FILE, GeneratorConfig};
use crate::domain::{Resource, ResourceSet};
use crate::emit::{CodeEmitter, OutputTransaction, RegistryBuilder, WriteOutcome};
use crate::error::{Result, compression_failed, emit_failed, file_read_failed};
use crate::hash::digest;
use crate::naming::NameDeriver;
use crate::scan::{PathScanner, normalize_path};

/// Hooks for reporting progress while a run is underway
pub trait Observer {
    /// Called once the scan has found `total` resources
    fn on_scanned(&mut self, _total: usize) {}

    /// Called after each resource has been compressed
    fn on_resource(&mut self, _resource: &Resource) {}

    /// Called once both files are written
    fn on_finished(&mut self, _report: &GenerationReport) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {}

/// Both generated files, in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub declarations: Vec<u8>,
    pub definitions: Vec<u8>,
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Directory that was scanned
    pub scan_root: PathBuf,

    /// Embedded source files in discovery order
    pub sources: Vec<PathBuf>,

    /// Embedded names in discovery order
    pub names: Vec<String>,

    /// Names listed in the prefix index
    pub indexed: Vec<String>,

    pub raw_bytes: usize,
    pub compressed_bytes: usize,

    pub declarations: PathBuf,
    pub declarations_outcome: WriteOutcome,
    pub definitions: PathBuf,
    pub definitions_outcome: WriteOutcome,
}

impl GenerationReport {
    /// Print `cargo:rerun-if-changed` lines for a build script
    pub fn emit_cargo_rerun_hints(&self) {
        println!("cargo:rerun-if-changed={}", self.scan_root.display());
        for source in &self.sources {
            println!("cargo:rerun-if-changed={}", source.display());
        }
    }
}

/// Runs generation for one configuration
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn emitter(&self) -> CodeEmitter {
        CodeEmitter::new(
            self.config.runtime_path.clone(),
            self.config.encoding,
            self.config.effective_chunk_limit(),
        )
    }

    fn registry_builder(&self) -> RegistryBuilder {
        RegistryBuilder::new(
            self.config.runtime_path.clone(),
            self.config.index_exclusions.clone(),
        )
    }

    /// Scan, name and compress every resource under the scan root
    pub fn collect(&self, observer: &mut dyn Observer) -> Result<ResourceSet> {
        let scan_root = self.config.scan_root();
        let scanner = PathScanner::new(&scan_root, self.config.effective_path_exclusions())?;
        let paths = scanner.collect_paths()?;
        observer.on_scanned(paths.len());

        let mut names = NameDeriver::new();
        let mut set = ResourceSet::new();

        for path in paths {
            let name = names.claim(&path)?;
            let raw = fs::read(&path)
                .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
            let compressed = compress(&raw)
                .map_err(|e| compression_failed(path.display().to_string(), e.to_string()))?;
            let relative_path = normalize_path(path.strip_prefix(&scan_root).unwrap_or(&path));

            let resource = Resource {
                name,
                relative_path,
                raw_size: compressed.raw_len,
                compressed: compressed.bytes,
                checksum: digest(&raw),
                source_path: path,
            };
            observer.on_resource(&resource);
            set.push(resource);
        }

        Ok(set)
    }

    /// Render both files for `set`
    pub fn render(&self, set: &ResourceSet) -> Result<RenderedOutput> {
        let emitter = self.emitter();
        let registry = self.registry_builder();
        let mut declarations = Vec::new();
        let mut definitions = Vec::new();

        let failed = |file: &str, e: std::io::Error| {
            emit_failed(self.config.out_dir.join(file).display().to_string(), e.to_string())
        };

        emitter
            .write_headers(&mut declarations, &mut definitions, set)
            .map_err(|e| failed(DECLARATIONS_FILE, e))?;
        for resource in set {
            emitter
                .emit_resource(&mut declarations, &mut definitions, resource)
                .map_err(|e| failed(DEFINITIONS_FILE, e))?;
        }
        registry
            .emit(&mut declarations, set)
            .map_err(|e| failed(DECLARATIONS_FILE, e))?;

        Ok(RenderedOutput {
            declarations,
            definitions,
        })
    }

    /// Run the whole pipeline without reporting progress
    pub fn run(&self) -> Result<GenerationReport> {
        self.run_with(&mut Silent)
    }

    /// Run the whole pipeline, reporting to `observer`
    pub fn run_with(&self, observer: &mut dyn Observer) -> Result<GenerationReport> {
        self.config.validate()?;

        let set = self.collect(observer)?;
        let rendered = self.render(&set)?;

        let mut output = OutputTransaction::begin(&self.config.out_dir)?;
        let definitions_outcome = output.write_file(DEFINITIONS_FILE, &rendered.definitions)?;
        let declarations_outcome = output.write_file(DECLARATIONS_FILE, &rendered.declarations)?;
        output.commit();

        let report = GenerationReport {
            scan_root: self.config.scan_root(),
            sources: set.iter().map(|r| r.source_path.clone()).collect(),
            names: set.names().map(ToString::to_string).collect(),
            indexed: self
                .registry_builder()
                .index(&set)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            raw_bytes: set.total_raw_size(),
            compressed_bytes: set.total_compressed_size(),
            declarations: self.config.declarations_path(),
            declarations_outcome,
            definitions: self.config.definitions_path(),
            definitions_outcome,
        };
        observer.on_finished(&report);

        Ok(report)
    }
}
