//! Configuration file (.linen.conf) parsing and handling
//!
//! The .linen.conf file uses INI format with a [DEFAULT] section containing
//! the reporting options recognized by the collector.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default maximum retained characters of an error message before truncation.
pub const DEFAULT_TRUNCATION_THRESHOLD: usize = 255;

/// Collector configuration, loadable from .linen.conf
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Maximum retained characters of an error message before an ellipsis
    /// marker is appended. Only applies when debug mode is off.
    pub truncation_threshold: usize,

    /// Include stack traces in recorded errors and switch the finalization
    /// output from the JSON report to a raw error dump.
    pub debug: bool,

    /// Signal the host to stop the run after the first failure or error.
    pub fail_fast: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            truncation_threshold: DEFAULT_TRUNCATION_THRESHOLD,
            debug: false,
            fail_fast: false,
        }
    }
}

impl CollectorConfig {
    /// Load configuration from a .linen.conf file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read .linen.conf: {}", e)))?;

        Self::parse(&contents)
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        // Parse as INI format
        let ini: HashMap<String, HashMap<String, String>> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse .linen.conf: {}", e)))?;

        // Extract DEFAULT section
        let default = ini
            .get("DEFAULT")
            .ok_or_else(|| Error::Config("No [DEFAULT] section in .linen.conf".to_string()))?;

        let mut config = CollectorConfig::default();

        if let Some(raw) = default.get("truncation_threshold") {
            config.truncation_threshold = raw.trim().parse().map_err(|_| {
                Error::Config(format!("Invalid truncation_threshold: {}", raw))
            })?;
        }
        if let Some(raw) = default.get("debug") {
            config.debug = parse_bool("debug", raw)?;
        }
        if let Some(raw) = default.get("fail_fast") {
            config.fail_fast = parse_bool("fail_fast", raw)?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate option values
    pub fn validate(&self) -> Result<()> {
        if self.truncation_threshold == 0 {
            return Err(Error::Config(
                "truncation_threshold cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("Invalid {} value: {}", key, raw))),
    }
}
