//! Test utilities for console output testing

use crate::console::Console;
use crate::error::Result;

/// A console implementation for testing that captures output in vectors
pub struct TestConsole {
    pub status_lines: Vec<String>,
    pub report_lines: Vec<String>,
}

impl TestConsole {
    pub fn new() -> Self {
        TestConsole {
            status_lines: Vec::new(),
            report_lines: Vec::new(),
        }
    }
}

impl Default for TestConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TestConsole {
    fn status(&mut self, line: &str) -> Result<()> {
        self.status_lines.push(line.to_string());
        Ok(())
    }

    fn report(&mut self, line: &str) -> Result<()> {
        self.report_lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_status() {
        let mut console = TestConsole::new();
        console.status("line").unwrap();
        assert_eq!(console.status_lines.len(), 1);
        assert_eq!(console.status_lines[0], "line");
    }

    #[test]
    fn test_capture_report() {
        let mut console = TestConsole::new();
        console.report("report line").unwrap();
        assert_eq!(console.report_lines.len(), 1);
        assert_eq!(console.report_lines[0], "report line");
    }
}
