//! Command-line interface definitions for varsweep.
//!
//! This module defines the CLI structure using clap, including all
//! subcommands and their arguments. The main entry point is the [`Cli`]
//! struct.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use varsweep::cli::{Cli, Commands};
//!
//! // Parse command-line arguments
//! let cli = Cli::parse();
//!
//! // Access the parsed command
//! match &cli.command() {
//!     Commands::Run { dry_run } => println!("Running sweep (dry run: {dry_run})"),
//!     Commands::List { sizes } => println!("Listing directories (sizes: {sizes})"),
//! }
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{Result, SweepError};

/// Main command-line interface for varsweep.
///
/// This struct represents the top-level CLI configuration, containing both
/// global options that apply to all commands and the specific subcommand
/// to execute.
#[derive(Parser)]
#[command(
    name = "varsweep",
    bin_name = "varsweep",
    author,
    version,
    about = "A scheduled cleanup tool for oversized log and cache directories",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all varsweep commands.
///
/// These options control where the cleanup candidates live, where the
/// settings file is found, and output verbosity levels.
#[derive(Parser)]
pub struct GlobalOpts {
    /// Path to the var directory holding cleanup candidates (defaults to
    /// ./var)
    #[arg(long, global = true, default_value = "var", env = "VARSWEEP_VAR_ROOT")]
    var_root: PathBuf,

    /// Path to the settings file (defaults to `<var-root>/varsweep.toml`)
    #[arg(long, global = true, env = "VARSWEEP_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "VARSWEEP_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "VARSWEEP_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Get the effective settings file path
    pub fn get_config_path(&self) -> PathBuf {
        let path = self
            .config()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.var_root().join("varsweep.toml"));

        normalize_path(path)
    }

    /// Get the absolute var root path
    pub fn get_var_root(&self) -> PathBuf {
        normalize_path(self.var_root())
    }

    /// Get the var root
    pub fn var_root(&self) -> &Path {
        &self.var_root
    }

    /// Get the settings file path option
    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Builder for constructing `GlobalOpts` programmatically.
///
/// This builder provides a fluent API for creating `GlobalOpts` instances
/// without going through command-line parsing. Useful for testing and
/// programmatic usage.
#[derive(Default)]
pub struct GlobalOptsBuilder {
    var_root: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: u8,
    quiet: bool,
}

impl GlobalOptsBuilder {
    /// Set the var root path.
    pub fn var_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.var_root = Some(dir.into());
        self
    }

    /// Set the settings file path.
    pub fn config(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.config = path.map(|p| p.into());
        self
    }

    /// Set the verbosity level (0 = normal, 1+ = verbose).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            var_root: self.var_root.unwrap_or_else(|| PathBuf::from("var")),
            config: self.config,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    var_root: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: u8,
    quiet: bool,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the var root
    pub fn var_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.var_root = Some(dir.into());
        self
    }

    /// Set the settings file path
    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self.command.ok_or(SweepError::Config {
            message: "Command is required".to_string(),
        })?;

        Ok(Cli {
            global_opts: GlobalOpts::builder()
                .var_root(self.var_root.unwrap_or_else(|| PathBuf::from("var")))
                .config(self.config)
                .verbose(self.verbose)
                .quiet(self.quiet)
                .build(),
            command,
        })
    }
}

/// Normalize a path to be absolute and clean, without requiring it to exist.
///
/// This function:
/// - Converts relative paths to absolute using the current directory
/// - Removes `.` and `..` components where possible
/// - Does NOT resolve symlinks (preserves user intent)
/// - Does NOT require the path to exist
fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    let absolute = if path.is_relative() {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    } else {
        path.to_path_buf()
    };

    let mut components = Vec::new();
    for component in absolute.components() {
        use std::path::Component;
        match component {
            Component::ParentDir => {
                if let Some(last) = components.last()
                    && !matches!(last, Component::ParentDir)
                {
                    components.pop();
                    continue;
                }
                components.push(component);
            }
            Component::CurDir => {
                continue;
            }
            _ => components.push(component),
        }
    }

    let mut result = PathBuf::new();
    for component in components {
        result.push(component);
    }

    result
}

/// Available varsweep subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one cleanup sweep (the scheduled entry point)
    ///
    /// Loads the settings file, lists the subdirectories of the var root,
    /// and empties every directory selected by the configured folder list
    /// and capacity threshold, archiving first when backups are enabled.
    ///
    /// This command always exits successfully: failures are reported on the
    /// log stream and never surface as a process error, so a cron or timer
    /// unit invoking it never sees the task as crashed. Invoke it from
    /// whatever scheduler matches the configured frequency, e.g.:
    ///
    /// ```text
    /// 0 3 * * * varsweep --var-root /srv/app/var run
    /// ```
    Run {
        /// Show what would be deleted without actually deleting
        #[arg(long, env = "VARSWEEP_DRY_RUN")]
        dry_run: bool,
    },

    /// List the cleanup candidates under the var root
    ///
    /// Prints the immediate subdirectories of the var root, one per line.
    /// With `--sizes`, each directory's recursive size is computed and
    /// printed next to it. Read-only: nothing is modified.
    List {
        /// Compute and display recursive directory sizes
        #[arg(long)]
        sizes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["varsweep", "run"]);
        assert!(matches!(cli.command(), Commands::Run { dry_run: false }));
        assert_eq!(cli.global_opts().var_root(), Path::new("var"));
        assert!(cli.global_opts().config().is_none());
        // get_config_path now returns absolute paths
        assert!(
            cli.global_opts()
                .get_config_path()
                .ends_with("var/varsweep.toml")
        );
        assert_eq!(cli.global_opts().verbose(), 0);
        assert!(!cli.global_opts().quiet());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::parse_from(["varsweep", "-vv", "list"]);
        assert_eq!(cli.global_opts().verbose(), 2);
        assert!(matches!(cli.command(), Commands::List { sizes: false }));
    }

    #[test]
    fn test_dry_run_flag() {
        let cli = Cli::parse_from(["varsweep", "run", "--dry-run"]);
        assert!(matches!(cli.command(), Commands::Run { dry_run: true }));
    }

    #[test]
    fn test_list_sizes_flag() {
        let cli = Cli::parse_from(["varsweep", "list", "--sizes"]);
        assert!(matches!(cli.command(), Commands::List { sizes: true }));
    }

    #[test]
    fn test_custom_config_path() {
        let cli = Cli::parse_from(["varsweep", "--config", "custom.toml", "run"]);
        assert_eq!(cli.global_opts().config(), Some(Path::new("custom.toml")));
        assert!(cli.global_opts().get_config_path().ends_with("custom.toml"));
    }

    #[test]
    fn test_custom_var_root() {
        let cli = Cli::parse_from(["varsweep", "--var-root", "data", "list"]);
        assert_eq!(cli.global_opts().var_root(), Path::new("data"));
        assert!(
            cli.global_opts()
                .get_config_path()
                .ends_with("data/varsweep.toml")
        );
    }

    #[test]
    fn test_global_flag_positioning() {
        // Global flags can be placed anywhere
        let cli = Cli::parse_from(["varsweep", "run", "--verbose"]);
        assert_eq!(cli.global_opts().verbose(), 1);
        assert!(matches!(cli.command(), Commands::Run { .. }));
    }

    #[test]
    fn test_cli_builder() {
        let cli = Cli::builder()
            .var_root("custom/var")
            .verbose(2)
            .quiet(false)
            .command(Commands::Run { dry_run: false })
            .build()
            .expect("Failed to build CLI");

        assert_eq!(cli.global_opts().var_root(), Path::new("custom/var"));
        assert_eq!(cli.global_opts().verbose(), 2);
        assert!(!cli.global_opts().quiet());
        assert!(matches!(cli.command(), Commands::Run { .. }));

        let cli = Cli::builder()
            .config("custom.toml")
            .command(Commands::List { sizes: true })
            .build()
            .expect("Failed to build CLI");

        assert_eq!(cli.global_opts().config(), Some(Path::new("custom.toml")));
        assert!(matches!(cli.command(), Commands::List { sizes: true }));
    }

    #[test]
    fn test_cli_builder_requires_command() {
        assert!(Cli::builder().build().is_err());
    }

    #[test]
    fn test_normalize_path() {
        let normalized = normalize_path("./var/./log");
        assert!(normalized.is_absolute());
        assert!(!normalized.to_string_lossy().contains("/./"));

        let normalized = normalize_path("var/../other/var");
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("other/var"));
        assert!(!normalized.to_string_lossy().contains(".."));

        let abs_path = if cfg!(windows) {
            PathBuf::from("C:\\Users\\test")
        } else {
            PathBuf::from("/srv/test")
        };
        let normalized = normalize_path(&abs_path);
        assert_eq!(normalized, abs_path);
    }
}
