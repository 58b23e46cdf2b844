//! # varsweep CLI
//!
//! The command-line interface for varsweep, a scheduled cleanup tool that
//! archives and sweeps oversized log and cache directories.
//!
//! ## Commands
//!
//! - **run**: Execute one sweep over the var root (the scheduled entry
//!   point; never exits with an error)
//! - **list**: Show the cleanup candidates, optionally with sizes
//!
//! ## Quick Start
//!
//! ```bash
//! # See what would be cleaned
//! varsweep --var-root /srv/app/var run --dry-run
//!
//! # Schedule the real thing (crontab)
//! 0 3 * * * varsweep --var-root /srv/app/var run
//! ```
//!
//! ## Environment Variables
//!
//! - `VARSWEEP_VAR_ROOT`: Override the var root (default: ./var)
//! - `VARSWEEP_CONFIG`: Custom settings file location
//! - `VARSWEEP_VERBOSE`: Enable verbose output
//! - `VARSWEEP_QUIET`: Silence all output except errors

use std::io::IsTerminal;

use clap::Parser;
use varsweep::cli::Cli;

fn main() -> miette::Result<()> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    // Configure miette handler based on terminal capabilities
    // This provides better error formatting for both TTY and non-TTY environments
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Use a simpler handler for non-TTY environments (cron, logs, etc.)
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let result = varsweep::commands::execute(&cli);

    // Convert our error type to miette's Result
    result.map_err(Into::into)
}
