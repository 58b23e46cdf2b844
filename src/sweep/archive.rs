use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use walkdir::WalkDir;

use crate::error::{Result, SweepError};

/// Extension of the archives the [`Archiver`] produces.
pub const ARCHIVE_EXTENSION: &str = "tar.gz";

/// Writes a directory's contents into a timestamped `.tar.gz` before the
/// purger deletes anything.
///
/// Archives contain only regular files, stored under their paths relative to
/// the backed-up directory. Directory entries are not stored; empty
/// directories leave no trace in the archive. Symlinks are skipped,
/// consistent with how the scanner measures sizes.
#[derive(Debug, Clone)]
pub struct Archiver {
    backup_dir: PathBuf,
}

impl Archiver {
    /// Create an archiver that derives default destinations under
    /// `backup_dir` (conventionally `<var_root>/backups`).
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    /// The directory default archive destinations are derived under.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Archive every regular file under `source` into a gzip-compressed tar.
    ///
    /// When `destination` is `None` the archive lands at
    /// `<backup_dir>/<name>_<YYYYMMDD_HHMMSS>.tar.gz`, creating the backup
    /// directory first if needed. An existing file at the destination is
    /// overwritten.
    ///
    /// Returns the path of the created archive so callers can log it.
    pub fn backup_directory(&self, source: &Path, destination: Option<PathBuf>) -> Result<PathBuf> {
        if !source.exists() {
            return Err(SweepError::DirectoryNotFound(source.to_path_buf()));
        }

        let archive_path = match destination {
            Some(dest) => dest,
            None => self.default_destination(source)?,
        };

        let file = File::create(&archive_path).map_err(|err| SweepError::Archive {
            path: archive_path.clone(),
            source: err,
        })?;
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for entry in WalkDir::new(source)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(source) else {
                continue;
            };
            builder
                .append_path_with_name(entry.path(), relative)
                .map_err(|err| SweepError::Archive {
                    path: archive_path.clone(),
                    source: err,
                })?;
        }

        // Finish the tar stream, then the gzip stream, then flush the file
        let encoder = builder.into_inner().map_err(|err| SweepError::Archive {
            path: archive_path.clone(),
            source: err,
        })?;
        let mut writer = encoder.finish().map_err(|err| SweepError::Archive {
            path: archive_path.clone(),
            source: err,
        })?;
        writer.flush().map_err(|err| SweepError::Archive {
            path: archive_path.clone(),
            source: err,
        })?;

        Ok(archive_path)
    }

    fn default_destination(&self, source: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|err| SweepError::Archive {
            path: self.backup_dir.clone(),
            source: err,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.backup_dir, fs::Permissions::from_mode(0o755)).map_err(
                |err| SweepError::Archive {
                    path: self.backup_dir.clone(),
                    source: err,
                },
            )?;
        }

        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "backup".to_string());
        let stamp = Local::now().format("%Y%m%d_%H%M%S");

        Ok(self
            .backup_dir
            .join(format!("{name}_{stamp}.{ARCHIVE_EXTENSION}")))
    }
}
