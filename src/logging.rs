use std::error::Error;
use std::fmt::Display;

use miette::Diagnostic;

use crate::error::SweepError;

#[derive(Clone, Copy, Debug)]
pub struct Logger {
    verbose: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    pub fn verbose(&self, level: u8, message: impl Display) {
        if !self.quiet && self.verbose >= level {
            eprintln!("{message}");
        }
    }

    /// Errors always print, even in quiet mode. The diagnostic code and the
    /// full source chain go with the message so a scheduled run leaves a
    /// usable trace in whatever log the scheduler captures.
    pub fn error(&self, context: impl Display, err: &SweepError) {
        match err.code() {
            Some(code) => eprintln!("{context}: {err} [{code}]"),
            None => eprintln!("{context}: {err}"),
        }
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
    }
}
