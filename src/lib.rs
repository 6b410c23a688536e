//! linen-result - Structured console reporting for unit-test outcomes
//!
//! This crate formats test-execution outcomes (failures, errors, successes,
//! sub-test results) into structured console output: one human-readable
//! status line per outcome on a diagnostic stream, and a JSON-wrapped YAML
//! failure/error report on the primary stream at session end.
//!
//! It plugs into a generic test-runner's result-callback protocol: the host
//! engine invokes the [`collector::ResultSink`] hooks as tests execute and
//! calls `finalize_report` once after the session completes.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`collector`]: The [`collector::ResultCollector`] sink implementing the
//!   result-callback contract
//! - [`report`]: Final report shapes, deduplication, truncation, and
//!   YAML/JSON encoding
//! - [`outcome`]: Test handles and structured error payloads
//! - [`console`]: Output abstraction over the diagnostic and primary streams
//! - [`config`]: .linen.conf configuration file parsing
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```
//! use linen_result::collector::{ResultCollector, ResultSink};
//! use linen_result::config::CollectorConfig;
//! use linen_result::console::StdConsole;
//! use linen_result::outcome::TestError;
//!
//! # fn main() -> linen_result::error::Result<()> {
//! let mut collector = ResultCollector::new(CollectorConfig::default());
//! let mut console = StdConsole::new();
//!
//! collector.on_success(&"test_login", &mut console)?;
//!
//! let err = TestError::assertion("AssertionError", "'admin' != 'guest'");
//! let flow = collector.on_failure(&"test_roles", &err, &mut console)?;
//! assert!(!flow.is_halt());
//!
//! collector.finalize_report(&mut console)?;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod console;
pub mod error;
pub mod outcome;
pub mod report;

pub use collector::{Flow, ResultCollector, ResultSink};
pub use config::CollectorConfig;
pub use error::{Error, Result};
pub use outcome::{ErrorKind, TestError, TestHandle};
pub use report::{Report, TitledBlock};
