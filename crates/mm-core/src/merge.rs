//! Merge engine: concatenates ordered migrations into a single script

use crate::config::MergeConfig;
use crate::error::{CoreError, CoreResult};
use crate::format;
use crate::migration::MigrationFile;
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Callbacks fired while merging, in file order.
///
/// All methods default to no-ops so implementors only handle what they print.
pub trait MergeObserver {
    /// About to read file `index` (1-based) of `total`
    fn file_started(&mut self, _index: usize, _total: usize, _file: &MigrationFile) {}

    /// File content was written; `lines` is its newline count
    fn file_merged(&mut self, _file: &MigrationFile, _lines: usize) {}

    /// File could not be read; a placeholder was written instead
    fn file_failed(&mut self, _file: &MigrationFile, _error: &std::io::Error) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}

/// A migration whose content was replaced by a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub name: String,
    pub error: String,
}

/// Outcome of a completed merge
#[derive(Debug, Clone)]
pub struct MergeSummary {
    /// Path of the written script
    pub output: PathBuf,

    /// Number of migrations attempted, including failed reads
    pub files_merged: usize,

    /// Migrations that could not be read
    pub failed: Vec<FailedFile>,

    /// Size of the written script in bytes
    pub output_size: u64,
}

impl MergeSummary {
    /// Output size in kibibytes
    pub fn output_size_kib(&self) -> f64 {
        self.output_size as f64 / 1024.0
    }
}

/// Merge `files`, in the given order, into `output`.
///
/// Parent directories of `output` are created and an existing file is
/// truncated. A source file that cannot be read does not abort the merge: a
/// placeholder comment takes its place and it is still counted in the footer.
/// Errors creating or writing the output are returned.
pub fn merge_migrations(
    files: &[MigrationFile],
    output: &Path,
    config: &MergeConfig,
    generated_at: NaiveDateTime,
    observer: &mut dyn MergeObserver,
) -> CoreResult<MergeSummary> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CoreError::CreateOutputDir {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let write_err = |e: std::io::Error| CoreError::WriteOutput {
        path: output.display().to_string(),
        source: e,
    };

    let output_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut writer = BufWriter::new(File::create(output).map_err(write_err)?);
    writer
        .write_all(format::header(config, &output_name, generated_at).as_bytes())
        .map_err(write_err)?;

    let total = files.len();
    let mut failed = Vec::new();

    for (i, file) in files.iter().enumerate() {
        observer.file_started(i + 1, total, file);
        writer
            .write_all(format::section_start(&file.name).as_bytes())
            .map_err(write_err)?;

        match fs::read_to_string(&file.path) {
            Ok(content) => {
                writer.write_all(content.as_bytes()).map_err(write_err)?;
                let lines = content.matches('\n').count();
                observer.file_merged(file, lines);
            }
            Err(e) => {
                writer
                    .write_all(format::read_failure(&file.name, &e.to_string()).as_bytes())
                    .map_err(write_err)?;
                observer.file_failed(file, &e);
                failed.push(FailedFile {
                    name: file.name.clone(),
                    error: e.to_string(),
                });
            }
        }

        writer
            .write_all(format::section_end(&file.name).as_bytes())
            .map_err(write_err)?;
    }

    writer
        .write_all(format::footer(total).as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    drop(writer);

    let output_size = fs::metadata(output)
        .map_err(|e| CoreError::IoWithPath {
            path: output.display().to_string(),
            source: e,
        })?
        .len();

    Ok(MergeSummary {
        output: output.to_path_buf(),
        files_merged: total,
        failed,
        output_size,
    })
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
