//! Implementation of varsweep subcommands.
//!
//! `mod.rs` is a thin dispatcher; command logic lives in dedicated modules
//! (`run`, `list`).

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub(crate) mod list;
pub(crate) mod run;

pub use list::list;
pub use run::run;

#[cfg(test)]
mod tests;

/// Execute commands based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet {
        0
    } else {
        cli.global_opts().verbose()
    };

    let var_root = cli.global_opts().get_var_root();
    let config_path = cli.global_opts().get_config_path();

    match cli.command() {
        Commands::Run { dry_run } => run(&var_root, &config_path, *dry_run, verbose, quiet),
        Commands::List { sizes } => list(&var_root, *sizes, verbose, quiet),
    }
}
