//! Scheduled cleanup of var subdirectories.
//!
//! This module implements the whole sweep pipeline:
//!
//! - `scanner`: enumerate the immediate subdirectories of the var root,
//!   optionally computing each one's recursive size
//! - `size`: parse configured capacity strings ("2GB") and format byte
//!   counts back into human-readable form
//! - `archive`: write a directory's contents to a timestamped `.tar.gz`
//!   before destructive operations
//! - `purge`: recursively delete a directory's contents, children before
//!   parents, archiving first when backups are enabled
//! - `policy` / `runner`: load the configured policy, filter candidates,
//!   and drive the per-directory purge loop with failure isolation
//!
//! # Example
//!
//! ```no_run
//! use varsweep::settings::StaticSettings;
//! use varsweep::sweep::Sweep;
//!
//! let settings = StaticSettings {
//!     enabled: true,
//!     size_check_enabled: false,
//!     folder_list_json: Some(r#"[{"folders":"log"},{"folders":"cache"}]"#.to_string()),
//!     ..StaticSettings::default()
//! };
//!
//! let stats = Sweep::builder()
//!     .var_root("var")
//!     .settings(settings)
//!     .build()?
//!     .execute();
//! println!("reclaimed {} bytes", stats.bytes_reclaimed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod archive;
mod policy;
mod purge;
mod runner;
mod scanner;
mod size;


pub use archive::{ARCHIVE_EXTENSION, Archiver};
pub use policy::CleanupPolicy;
pub use purge::Purger;
pub use runner::{BACKUP_DIR_NAME, Sweep, SweepBuilder, SweepStats};
pub use scanner::{DirectoryEntry, directory_size, list_directories};
pub use size::{format_size, parse_capacity};
