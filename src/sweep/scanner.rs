use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::size::format_size;
use crate::error::{Result, SweepError};

/// One immediate subdirectory of the var root, as seen by a single scan.
///
/// Entries are produced fresh per scan and never persisted. `size_bytes` and
/// `size_human` are populated only when the scan was asked to compute sizes.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Absolute path of the subdirectory
    pub path: PathBuf,
    /// Base name of the subdirectory
    pub name: String,
    /// Recursive size in bytes, when computed
    pub size_bytes: Option<u64>,
    /// Human-readable rendering of `size_bytes`
    pub size_human: Option<String>,
}

/// List the immediate subdirectories of `root`.
///
/// A nonexistent root is a normal "nothing to clean" situation and yields an
/// empty list, never an error. Only directory entries are returned; regular
/// files and symlinks at the top level are skipped (symlinked directories
/// are not followed, consistent with [`directory_size`]).
///
/// Computing sizes walks every file under every subdirectory, which can be
/// expensive on large trees, so it is opt-in via `compute_sizes`.
pub fn list_directories(root: &Path, compute_sizes: bool) -> Result<Vec<DirectoryEntry>> {
    let mut directories = Vec::new();

    if !root.exists() {
        return Ok(directories);
    }

    let entries = fs::read_dir(root).map_err(|err| SweepError::Io {
        path: root.to_path_buf(),
        source: err,
    })?;

    for entry in entries {
        let entry = entry.map_err(|err| SweepError::Io {
            path: root.to_path_buf(),
            source: err,
        })?;

        let file_type = entry.file_type().map_err(|err| SweepError::Io {
            path: entry.path(),
            source: err,
        })?;
        if !file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let size_bytes = compute_sizes.then(|| directory_size(&path));
        let size_human = size_bytes.map(format_size);

        directories.push(DirectoryEntry {
            path,
            name,
            size_bytes,
            size_human,
        });
    }

    // Stable ordering keeps log output and the `list` command deterministic
    directories.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(directories)
}

/// Compute the recursive size of a directory: the sum of the sizes of every
/// regular file under it, at any depth.
///
/// Symlinks are not followed. Entries that cannot be read (races, permission
/// problems) are skipped rather than failing the whole sum, so one bad entry
/// cannot make an otherwise measurable directory look unmeasurable. An empty
/// or inaccessible directory reports 0.
pub fn directory_size(path: &Path) -> u64 {
    let mut total = 0;

    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            total += metadata.len();
        }
    }

    total
}
