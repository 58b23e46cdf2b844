//! # varsweep
//!
//! A scheduled cleanup tool that keeps a "var" directory of log and cache
//! folders from eating the disk: it measures subdirectory sizes, compares
//! them against a configured capacity, and empties the folders an
//! administrator has allow-listed, optionally archiving their contents
//! first.
//!
//! ## Overview
//!
//! varsweep is built to be triggered by an external scheduler (cron, a
//! systemd timer, a CI job). Each run is self-contained: it loads the
//! settings file, rescans the var root from scratch, and processes each
//! selected directory independently, so one unreadable or half-deleted
//! folder never aborts the rest of the run — and the scheduler never sees
//! the task crash.
//!
//! ## Key Features
//!
//! - **Unit-aware capacity**: thresholds configured as "2GB"-style strings,
//!   powers of 1024
//! - **Opt-in size scanning**: recursive size computation only happens when
//!   the size check is enabled, full traversal is not free
//! - **Backup before delete**: when enabled, a directory is written to a
//!   timestamped `.tar.gz` before the first deletion; if archiving fails,
//!   nothing is deleted
//! - **Post-order purging**: contents are removed children-first, so
//!   directory removal never races its own children
//! - **Failure isolation**: per-directory errors are logged and skipped;
//!   run-level errors are caught at the entry point
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Implementation of the varsweep subcommands
//! - [`error`]: Error types and handling with thiserror + miette
//! - [`settings`]: The settings provider trait and its TOML-file backend
//! - [`sweep`]: The sweep pipeline — scanner, size conversion, archiver,
//!   purger, and the run orchestration
//!
//! Internal modules (not part of the public API):
//! - `logging`: Verbosity-aware logger shared by all commands
//!
//! ## Usage
//!
//! Point the tool at the var directory and schedule `run`:
//!
//! ```bash
//! varsweep --var-root /srv/app/var run
//! varsweep --var-root /srv/app/var list --sizes
//! ```
//!
//! ## Library Usage
//!
//! While varsweep is primarily a CLI tool, the sweep is usable as a
//! library:
//!
//! ```no_run
//! use varsweep::settings::StaticSettings;
//! use varsweep::sweep::Sweep;
//!
//! let settings = StaticSettings {
//!     enabled: true,
//!     capacity: "500MB".to_string(),
//!     size_check_enabled: true,
//!     folder_list_json: Some(r#"[{"folders":"log"}]"#.to_string()),
//!     ..StaticSettings::default()
//! };
//!
//! let stats = Sweep::builder()
//!     .var_root("/srv/app/var")
//!     .settings(settings)
//!     .build()?
//!     .execute();
//! println!("emptied {} directories", stats.directories_purged);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in CLI
//!
//! The scheduled entry point ([`sweep::Sweep::execute`]) additionally
//! swallows everything after logging it: outcomes of a scheduled run are
//! observable only through the log stream.

// Re-export public modules for library usage
pub mod cli;
pub mod commands;
pub mod error;
pub mod settings;
pub mod sweep;

// Internal modules
mod logging;
