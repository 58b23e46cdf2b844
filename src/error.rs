//! Error types for varsweep.
//!
//! This module defines all error types used throughout varsweep, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - All errors derive from [`SweepError`]
//! - Each variant includes helpful error messages and diagnostic codes
//! - Context is preserved through the error chain
//! - Errors are automatically converted to `miette::Result` for CLI output
//!
//! Two boundaries catch errors instead of propagating them: each directory
//! processed during a sweep, and the sweep run as a whole. See
//! [`crate::sweep::Sweep::execute`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use varsweep::error::{Result, SweepError};
//!
//! fn check_candidate(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(SweepError::DirectoryNotFound(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in varsweep operations
#[derive(Error, Debug, Diagnostic)]
pub enum SweepError {
    /// A directory that an operation requires does not exist.
    ///
    /// Raised when the purger or archiver is pointed at a path that is
    /// absent. Note that the scanner treats a missing var root as "nothing
    /// to clean" and returns an empty listing instead of this error.
    #[error("Directory not found: '{0}'")]
    #[diagnostic(
        code(varsweep::fs::not_found),
        help("Check the configured var root and folder names.")
    )]
    DirectoryNotFound(
        /// The path that does not exist
        PathBuf,
    ),

    /// A path expected to be a directory is something else.
    ///
    /// Raised by the purger before any deletion happens, so a stray regular
    /// file named like a cleanup candidate is never touched.
    #[error("Path is not a directory: '{0}'")]
    #[diagnostic(code(varsweep::fs::not_a_directory))]
    NotADirectory(
        /// The offending path
        PathBuf,
    ),

    /// File system I/O error during varsweep operations.
    ///
    /// Common causes: permission denied, file not found, disk full.
    /// Used throughout for directory enumeration and file removal.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(varsweep::io_error))]
    Io {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backup archive could not be created or written.
    ///
    /// Raised by the archiver when the archive file cannot be opened, a
    /// file cannot be appended, or the compressed stream cannot be
    /// finalized. When backups are enabled this aborts the purge of the
    /// affected directory before anything is deleted.
    #[error("Failed to write archive '{path}'")]
    #[diagnostic(
        code(varsweep::archive::write_error),
        help("Check free space and permissions on the backup directory.")
    )]
    Archive {
        /// The archive (or backup directory) path being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Emptying a directory failed part-way through.
    ///
    /// Wraps the first deletion error together with the directory being
    /// emptied. Deletion is not transactional: contents removed before the
    /// failure stay removed.
    #[error("Directory cleanup failed for '{path}'")]
    #[diagnostic(
        code(varsweep::purge::failed),
        help("The directory may be partially emptied. Check the underlying cause and re-run.")
    )]
    Cleanup {
        /// The directory that was being emptied
        path: PathBuf,
        /// The underlying failure, usually an I/O error on one entry
        #[source]
        source: Box<SweepError>,
    },

    /// Invalid programmatic configuration.
    ///
    /// Raised by builders when a required component is missing. Malformed
    /// settings *files* never raise this: they decay to safe defaults so a
    /// scheduled run cannot crash on a bad edit.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(varsweep::config::error))]
    Config {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SweepError>;
