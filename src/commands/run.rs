//! Run command implementation.

use std::path::Path;

use crate::error::Result;
use crate::logging::Logger;
use crate::settings::FileSettings;
use crate::sweep::{Sweep, format_size};

/// Executes the run command: one full sweep over the var root.
///
/// The sweep itself never fails; all outcomes are reported through the log
/// stream and summarized here. The only error this can return is a
/// programmer mistake in assembling the sweep, not a runtime condition.
pub fn run(
    var_root: &Path,
    config_path: &Path,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
) -> Result<()> {
    let log = Logger::new(verbose, quiet);

    if !config_path.exists() {
        log.verbose(
            1,
            format!(
                "Settings file {} not found; using defaults (disabled)",
                config_path.display()
            ),
        );
    }
    let settings = FileSettings::load(config_path);

    let sweep = Sweep::builder()
        .var_root(var_root)
        .settings(settings)
        .dry_run(dry_run)
        .verbose(verbose)
        .quiet(quiet)
        .build()?;

    let stats = sweep.execute();

    if !quiet {
        eprintln!("Sweep complete:");
        eprintln!("  Directories scanned: {}", stats.directories_scanned);
        eprintln!("  Directories emptied: {}", stats.directories_purged);
        eprintln!("  Failures: {}", stats.purge_failures);
        if stats.bytes_reclaimed > 0 {
            eprintln!("  Space reclaimed: {}", format_size(stats.bytes_reclaimed));
        }
        if dry_run {
            eprintln!("  (DRY RUN - no files were actually deleted)");
        }
    }

    Ok(())
}
