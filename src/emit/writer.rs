//! Atomic output for generated files
//!
//! Both generated files are written through one [`OutputTransaction`]. Each
//! file goes to a temporary file in the output directory and is renamed into
//! place. If the run fails before [`OutputTransaction::commit`], files created
//! by the transaction are removed and overwritten files are restored, so a
//! failed generation never leaves a declarations file that disagrees with
//! its definitions file.
//!
//! A file whose content is already identical is left untouched, keeping its
//! modification time so build systems can reuse cached objects.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, emit_failed};

/// Original content of a file replaced during the transaction
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    content: Vec<u8>,
}

/// What happened to one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// A set of output writes that land together or not at all
#[derive(Debug)]
pub struct OutputTransaction {
    out_dir: PathBuf,
    created_dir: bool,
    created_files: Vec<PathBuf>,
    backups: Vec<FileBackup>,
    committed: bool,
}

impl OutputTransaction {
    /// Start a transaction, creating `out_dir` if needed
    pub fn begin(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        let created_dir = !out_dir.exists();
        if created_dir {
            fs::create_dir_all(&out_dir)
                .map_err(|e| emit_failed(out_dir.display().to_string(), e.to_string()))?;
        } else if !out_dir.is_dir() {
            return Err(emit_failed(
                out_dir.display().to_string(),
                "output path exists and is not a directory",
            ));
        }

        Ok(Self {
            out_dir,
            created_dir,
            created_files: Vec::new(),
            backups: Vec::new(),
            committed: false,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write `content` to `file_name` inside the output directory
    pub fn write_file(&mut self, file_name: &str, content: &[u8]) -> Result<WriteOutcome> {
        let path = self.out_dir.join(file_name);
        let fail = |e: std::io::Error| emit_failed(path.display().to_string(), e.to_string());

        let previous = match fs::read(&path) {
            Ok(existing) => Some(existing),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(fail(e)),
        };

        if previous.as_deref() == Some(content) {
            return Ok(WriteOutcome::Unchanged);
        }

        let mut temp = NamedTempFile::new_in(&self.out_dir).map_err(fail)?;
        temp.write_all(content).map_err(fail)?;
        temp.flush().map_err(fail)?;
        temp.persist(&path).map_err(|e| fail(e.error))?;

        Ok(match previous {
            Some(content) => {
                self.backups.push(FileBackup {
                    path: path.clone(),
                    content,
                });
                WriteOutcome::Updated
            }
            None => {
                self.created_files.push(path.clone());
                WriteOutcome::Created
            }
        })
    }

    /// Keep everything written so far
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo every write made by this transaction
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        for path in &self.created_files {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }

        for backup in &self.backups {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                eprintln!(
                    "Warning: Failed to restore {}: {}",
                    backup.path.display(),
                    e
                );
            }
        }

        // Only remove the output directory if we made it and it is empty
        if self.created_dir
            && fs::read_dir(&self.out_dir)
                .map(|mut d| d.next().is_none())
                .unwrap_or(false)
        {
            let _ = fs::remove_dir(&self.out_dir);
        }

        self.created_files.clear();
        self.backups.clear();
    }
}

impl Drop for OutputTransaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}
