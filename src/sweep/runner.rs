use std::path::{Path, PathBuf};

use super::archive::Archiver;
use super::policy::CleanupPolicy;
use super::purge::Purger;
use super::scanner::{DirectoryEntry, list_directories};
use super::size::{format_size, parse_capacity};
use crate::error::{Result, SweepError};
use crate::logging::Logger;
use crate::settings::SettingsProvider;

/// Name of the directory under the var root that receives backup archives.
pub const BACKUP_DIR_NAME: &str = "backups";

/// One scheduled sweep over the var root.
///
/// `Sweep` ties the pieces together: it loads the [`CleanupPolicy`] from the
/// settings provider, scans the var root, filters candidates by the
/// configured folder list and capacity threshold, and empties whatever
/// qualifies, archiving first when backups are enabled.
///
/// # Example
///
/// ```no_run
/// use varsweep::settings::StaticSettings;
/// use varsweep::sweep::Sweep;
///
/// let settings = StaticSettings {
///     enabled: true,
///     capacity: "2GB".to_string(),
///     size_check_enabled: true,
///     folder_list_json: Some(r#"[{"folders":"log"}]"#.to_string()),
///     ..StaticSettings::default()
/// };
///
/// let sweep = Sweep::builder()
///     .var_root("var")
///     .settings(settings)
///     .build()?;
/// let stats = sweep.execute();
/// println!("emptied {} directories", stats.directories_purged);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Sweep<S> {
    /// Root directory whose immediate subdirectories are cleanup candidates
    var_root: PathBuf,
    /// Settings provider the policy is loaded from at the start of each run
    settings: S,
    /// Report would-be deletions without deleting
    dry_run: bool,
    /// Verbosity level for output
    verbose: u8,
    /// Suppress informational logging when true
    quiet: bool,
}

impl<S: SettingsProvider> Sweep<S> {
    /// Creates a new builder for [`Sweep`]
    pub fn builder() -> SweepBuilder<S> {
        SweepBuilder::default()
    }

    /// Get the var root
    pub fn var_root(&self) -> &Path {
        &self.var_root
    }

    /// Check if dry run mode is enabled
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Scheduled entry point: run one sweep to completion.
    ///
    /// This never propagates an error. Per-directory failures are logged
    /// and the loop moves on to the next candidate; anything escaping the
    /// run as a whole is caught here and logged with its diagnostic code
    /// and cause chain. The external scheduler that triggers this must
    /// never see the task as crashed.
    pub fn execute(&self) -> SweepStats {
        let log = Logger::new(self.verbose, self.quiet);

        match self.run(&log) {
            Ok(stats) => stats,
            Err(err) => {
                log.error("Sweep run failed", &err);
                SweepStats::default()
            }
        }
    }

    fn run(&self, log: &Logger) -> Result<SweepStats> {
        let mut stats = SweepStats::default();

        let policy = CleanupPolicy::load(&self.settings);
        if !policy.enabled {
            log.info("Sweep is disabled.");
            return Ok(stats);
        }

        log.info("Sweep started.");
        log.info(format!("Configured capacity: \"{}\"", policy.capacity));

        let threshold = parse_capacity(&policy.capacity);
        log.info(format!("Capacity threshold: {threshold} bytes"));
        log.info(format!(
            "Directory size check enabled: {}",
            policy.size_check_enabled
        ));

        // Sizes are only worth computing when they feed the threshold check
        let directories = list_directories(&self.var_root, policy.size_check_enabled)?;
        stats.directories_scanned = directories.len();
        log.info(format!(
            "Found {} candidate directories under {}",
            directories.len(),
            self.var_root.display()
        ));
        for directory in &directories {
            match &directory.size_human {
                Some(size) => log.verbose(1, format!("  {} ({size})", directory.name)),
                None => log.verbose(1, format!("  {}", directory.name)),
            }
        }

        if policy.folders.is_empty() {
            // An empty configured folder list selects nothing. A run with no
            // folder configuration is a no-op, it does not mean "clean
            // everything".
            log.info("No folders configured; nothing to clean.");
            return Ok(stats);
        }

        let selected: Vec<&DirectoryEntry> = directories
            .iter()
            .filter(|directory| policy.folders.iter().any(|name| *name == directory.name))
            .collect();
        log.info(format!(
            "{} of {} directories match the configured folder list",
            selected.len(),
            stats.directories_scanned
        ));

        let purger = if policy.backup_enabled {
            Purger::with_backup(Archiver::new(self.var_root.join(BACKUP_DIR_NAME)))
        } else {
            Purger::new()
        };

        for directory in selected {
            let size = directory.size_bytes.unwrap_or(0);
            let eligible = if policy.size_check_enabled {
                size >= threshold
            } else {
                true
            };

            if !eligible {
                log.verbose(
                    1,
                    format!(
                        "Skipping [ {} ]: {} below threshold",
                        directory.name,
                        format_size(size)
                    ),
                );
                continue;
            }

            if self.dry_run {
                log.info(format!("Would empty directory [ {} ]", directory.name));
                stats.directories_purged += 1;
                stats.bytes_reclaimed += size;
                continue;
            }

            log.info(format!("Emptying directory [ {} ]", directory.name));
            match purger.empty_directory(&directory.path) {
                Ok(()) => {
                    log.info(format!("Directory emptied [ {} ]", directory.name));
                    stats.directories_purged += 1;
                    stats.bytes_reclaimed += size;
                }
                Err(err) => {
                    // One bad directory must not abort the rest of the run
                    log.error(
                        format!("Could not empty directory [ {} ]", directory.name),
                        &err,
                    );
                    stats.purge_failures += 1;
                }
            }
        }

        log.info("Sweep finished.");

        Ok(stats)
    }
}

/// Builder for [`Sweep`]
#[derive(Debug)]
pub struct SweepBuilder<S> {
    var_root: Option<PathBuf>,
    settings: Option<S>,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

impl<S> Default for SweepBuilder<S> {
    fn default() -> Self {
        Self {
            var_root: None,
            settings: None,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}

impl<S: SettingsProvider> SweepBuilder<S> {
    /// Set the var root directory
    pub fn var_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.var_root = Some(dir.into());
        self
    }

    /// Set the settings provider (required)
    pub fn settings(mut self, settings: S) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Enable dry run mode
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Set the verbosity level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the [`Sweep`]
    pub fn build(self) -> Result<Sweep<S>> {
        let settings = self.settings.ok_or(SweepError::Config {
            message: "a settings provider is required".to_string(),
        })?;

        Ok(Sweep {
            var_root: self.var_root.unwrap_or_else(|| PathBuf::from("var")),
            settings,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

/// Statistics about one sweep run
#[derive(Debug, Default)]
pub struct SweepStats {
    /// Number of subdirectories found under the var root
    pub directories_scanned: usize,
    /// Number of directories emptied (or, in dry-run mode, that would be)
    pub directories_purged: usize,
    /// Number of directories whose purge failed
    pub purge_failures: usize,
    /// Bytes reclaimed, as measured by the scan. Only meaningful when the
    /// size check was enabled; otherwise sizes were never computed and this
    /// stays 0.
    pub bytes_reclaimed: u64,
}
