//! Migration file discovery and ordering
//!
//! Migrations are the `*.sql` files directly inside the migrations directory.
//! They are ordered by the number their file name starts with; names without
//! a leading number get [`UNORDERED_SORT_KEY`] and therefore run last.

use crate::error::{CoreError, CoreResult};
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Sort key for file names without a usable leading number
pub const UNORDERED_SORT_KEY: u64 = 9999;

/// Glob matched against each directory entry name
pub const SQL_FILE_PATTERN: &str = "*.sql";

/// A discovered migration script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Full path to the script
    pub path: PathBuf,

    /// File name including the extension
    pub name: String,

    /// Size in bytes at discovery time
    pub size: u64,

    /// Ordering key derived from the leading digits of `name`
    pub sort_key: u64,
}

impl MigrationFile {
    /// Build a migration entry, deriving its name and sort key from `path`
    pub fn new(path: PathBuf, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sort_key = sort_key(&name);
        Self {
            path,
            name,
            size,
            sort_key,
        }
    }
}

/// Derive the ordering key for a file name.
///
/// Returns the value of the leading run of ASCII digits. A name without one,
/// or whose digits do not fit in a `u64`, yields [`UNORDERED_SORT_KEY`].
pub fn sort_key(name: &str) -> u64 {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return UNORDERED_SORT_KEY;
    }
    name[..digits].parse().unwrap_or(UNORDERED_SORT_KEY)
}

/// Stable-sort migrations by key; equal keys keep their incoming order.
pub fn sort_migrations(files: &mut [MigrationFile]) {
    files.sort_by_key(|f| f.sort_key);
}

/// Discover all migrations in `dir`, ordered for merging.
///
/// A missing directory is reported and yields an empty list; the caller
/// decides whether that is fatal.
pub fn discover_migrations(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    if !dir.exists() {
        log::warn!("Migrations directory not found: {}", dir.display());
        return Ok(Vec::new());
    }

    // Fixed pattern; only fails if SQL_FILE_PATTERN is edited into an invalid glob
    let pattern = Pattern::new(SQL_FILE_PATTERN).map_err(|e| CoreError::InvalidPattern {
        pattern: SQL_FILE_PATTERN.to_string(),
        message: e.to_string(),
    })?;
    let list_err = |e: std::io::Error| CoreError::ListDirectory {
        path: dir.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_name = entry.file_name();
        if !pattern.matches(&file_name.to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let file = MigrationFile::new(path, size);
        log::debug!("Discovered {} (key {})", file.name, file.sort_key);
        files.push(file);
    }

    sort_migrations(&mut files);
    Ok(files)
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
