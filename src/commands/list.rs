//! List command implementation.

use std::path::Path;

use crate::error::Result;
use crate::logging::Logger;
use crate::sweep::{format_size, list_directories};

/// Executes the list command.
///
/// Prints the immediate subdirectories of the var root to stdout, with
/// recursive sizes when requested. Unlike `run`, this command is allowed to
/// fail normally: it is driven interactively, not by a scheduler.
pub fn list(var_root: &Path, sizes: bool, verbose: u8, quiet: bool) -> Result<()> {
    let log = Logger::new(verbose, quiet);
    log.verbose(
        1,
        format!("Listing directories under {}", var_root.display()),
    );

    let directories = list_directories(var_root, sizes)?;

    if directories.is_empty() {
        log.info("No subdirectories found.");
        return Ok(());
    }

    for directory in &directories {
        match &directory.size_human {
            Some(size) => println!("{}  {}", directory.name, size),
            None => println!("{}", directory.name),
        }
    }

    if sizes && !quiet {
        let total: u64 = directories.iter().filter_map(|d| d.size_bytes).sum();
        eprintln!("Total: {}", format_size(total));
    }

    Ok(())
}
