//! Console output abstraction
//!
//! The collector writes to two streams: a diagnostic stream that receives one
//! status line per outcome in real time, and a primary stream that receives
//! the final report exactly once. This module provides the trait over both.

use crate::error::Result;
use std::io::{self, Write};

#[cfg(test)]
pub mod test_console;

/// Abstract console for collector output
pub trait Console {
    /// Emit a real-time status line to the diagnostic stream
    fn status(&mut self, line: &str) -> Result<()>;

    /// Emit a line of the final report to the primary stream
    fn report(&mut self, line: &str) -> Result<()>;
}

/// Console implementation backed by the process's stdout and stderr
pub struct StdConsole {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl StdConsole {
    /// Creates a console writing status lines to stderr and the report to stdout.
    pub fn new() -> Self {
        StdConsole {
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn status(&mut self, line: &str) -> Result<()> {
        writeln!(self.stderr, "{}", line)?;
        Ok(())
    }

    fn report(&mut self, line: &str) -> Result<()> {
        writeln!(self.stdout, "{}", line)?;
        Ok(())
    }
}
