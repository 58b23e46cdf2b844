use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::archive::Archiver;
use crate::error::{Result, SweepError};

/// Recursively deletes a directory's contents, optionally archiving them
/// first.
///
/// Deletion is post-order: every descendant of a directory is removed before
/// the directory itself, so `remove_dir` never sees a non-empty directory.
/// The target directory itself is kept, only emptied.
#[derive(Debug, Clone, Default)]
pub struct Purger {
    archiver: Option<Archiver>,
}

impl Purger {
    /// A purger that deletes without backing up.
    pub fn new() -> Self {
        Self::default()
    }

    /// A purger that archives a directory via `archiver` before deleting
    /// its contents.
    pub fn with_backup(archiver: Archiver) -> Self {
        Self {
            archiver: Some(archiver),
        }
    }

    /// Empty `path` of all contents.
    ///
    /// Fails with [`SweepError::DirectoryNotFound`] /
    /// [`SweepError::NotADirectory`] before touching anything. When a backup
    /// archiver is configured, the archive must be written successfully
    /// before the first deletion; an archive failure aborts the purge with
    /// the directory untouched.
    ///
    /// Deletion failures are wrapped in [`SweepError::Cleanup`] naming the
    /// directory and the underlying cause. Deletion is fail-fast and not
    /// transactional: entries removed before the failure stay removed.
    pub fn empty_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SweepError::DirectoryNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(SweepError::NotADirectory(path.to_path_buf()));
        }

        // Backup must succeed before anything is deleted
        if let Some(archiver) = &self.archiver {
            archiver.backup_directory(path, None)?;
        }

        delete_contents(path).map_err(|err| SweepError::Cleanup {
            path: path.to_path_buf(),
            source: Box::new(err),
        })
    }
}

/// Remove everything under `root`, children before parents. `root` itself
/// is left in place.
fn delete_contents(root: &Path) -> Result<()> {
    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            SweepError::Io { path, source }
        })?;

        if entry.path() == root {
            continue;
        }

        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path()).map_err(|err| SweepError::Io {
                path: entry.path().to_path_buf(),
                source: err,
            })?;
        } else {
            fs::remove_file(entry.path()).map_err(|err| SweepError::Io {
                path: entry.path().to_path_buf(),
                source: err,
            })?;
        }
    }

    Ok(())
}
