//! Result collection and reporting
//!
//! The host test-execution engine drives a [`ResultSink`] as tests run:
//! one callback per outcome, then [`ResultSink::finalize_report`] exactly
//! once after the session completes. [`ResultCollector`] is the concrete
//! sink that accumulates failures and errors and emits the final report.

use crate::config::CollectorConfig;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::outcome::{TestError, TestHandle};
use crate::report::{truncate_message, unique_messages, OutcomeRecord, Report, TitledBlock};

/// Signal returned to the host after recording a failure or error.
///
/// Under fail-fast configuration the collector asks the host to stop the run;
/// acting on the signal is the host's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep executing tests.
    Continue,
    /// Stop the run after this outcome (fail-fast).
    Halt,
}

impl Flow {
    /// Returns true if the host should stop the run.
    pub fn is_halt(&self) -> bool {
        matches!(self, Flow::Halt)
    }
}

/// The result-callback contract the host engine drives.
///
/// Callbacks are invoked sequentially as tests execute; no callback runs
/// concurrently with another. `finalize_report` is called once, after all
/// outcomes are collected.
pub trait ResultSink {
    /// Called when a test passes
    fn on_success(&mut self, test: &dyn TestHandle, console: &mut dyn Console) -> Result<()>;

    /// Called when a test fails an assertion
    fn on_failure(
        &mut self,
        test: &dyn TestHandle,
        err: &TestError,
        console: &mut dyn Console,
    ) -> Result<Flow>;

    /// Called when a test raises an unexpected error
    fn on_error(
        &mut self,
        test: &dyn TestHandle,
        err: &TestError,
        console: &mut dyn Console,
    ) -> Result<Flow>;

    /// Called at the end of a subtest; `err` is None when it passed
    fn on_subtest_result(
        &mut self,
        test: &dyn TestHandle,
        subtest: &dyn TestHandle,
        err: Option<&TestError>,
        console: &mut dyn Console,
    ) -> Result<()>;

    /// Called once after the session completes to emit the final report
    fn finalize_report(&mut self, console: &mut dyn Console) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Collecting,
    Finalized,
}

/// Accumulates failure and error outcomes for one test session and formats
/// them into the final report.
pub struct ResultCollector {
    config: CollectorConfig,
    state: SessionState,
    failures: Vec<OutcomeRecord>,
    errors: Vec<OutcomeRecord>,
}

impl ResultCollector {
    /// Create a collector with the given configuration
    pub fn new(config: CollectorConfig) -> Self {
        ResultCollector {
            config,
            state: SessionState::Collecting,
            failures: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Number of recorded failures so far
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of recorded errors so far
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn ensure_collecting(&self, op: &str) -> Result<()> {
        if self.state == SessionState::Finalized {
            return Err(Error::ProtocolViolation(format!(
                "{} called after finalize_report",
                op
            )));
        }
        Ok(())
    }

    fn flow(&self) -> Flow {
        if self.config.fail_fast {
            Flow::Halt
        } else {
            Flow::Continue
        }
    }

    fn append_failure(&mut self, test: &dyn TestHandle, err: &TestError, subtest: Option<String>) {
        self.failures
            .push(OutcomeRecord::new(test, err.value.clone(), subtest));
    }

    fn append_error(&mut self, test: &dyn TestHandle, err: &TestError, subtest: Option<String>) {
        // Debug mode keeps the full message and appends the traceback;
        // otherwise only the truncated prefix is retained.
        let message = if self.config.debug {
            let traceback = err.traceback.as_deref().unwrap_or("");
            format!("{}\n{}", err.value, traceback)
        } else {
            format!(
                "{}\n",
                truncate_message(&err.value, self.config.truncation_threshold)
            )
        };
        self.errors.push(OutcomeRecord::new(test, message, subtest));
    }
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

impl ResultSink for ResultCollector {
    fn on_success(&mut self, test: &dyn TestHandle, console: &mut dyn Console) -> Result<()> {
        self.ensure_collecting("on_success")?;
        console.status(&ok_line(test))
    }

    fn on_failure(
        &mut self,
        test: &dyn TestHandle,
        err: &TestError,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        self.ensure_collecting("on_failure")?;
        self.append_failure(test, err, None);
        console.status(&err_line("FAILED", test, err))?;
        Ok(self.flow())
    }

    fn on_error(
        &mut self,
        test: &dyn TestHandle,
        err: &TestError,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        self.ensure_collecting("on_error")?;
        self.append_error(test, err, None);
        console.status(&err_line("ERROR", test, err))?;
        Ok(self.flow())
    }

    fn on_subtest_result(
        &mut self,
        test: &dyn TestHandle,
        subtest: &dyn TestHandle,
        err: Option<&TestError>,
        console: &mut dyn Console,
    ) -> Result<()> {
        self.ensure_collecting("on_subtest_result")?;

        let line = match err {
            None => ok_line(subtest),
            Some(err) => {
                // The discriminant is the category of the payload, not its
                // content: assertion failures and everything else.
                let status = if err.is_assertion() {
                    self.append_failure(test, err, Some(subtest.to_string()));
                    "FAILURE"
                } else {
                    self.append_error(test, err, Some(subtest.to_string()));
                    "ERROR"
                };
                err_line(status, subtest, err)
            }
        };

        console.status(&line)
    }

    fn finalize_report(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.state == SessionState::Finalized {
            return Err(Error::ProtocolViolation(
                "finalize_report called twice".to_string(),
            ));
        }
        self.state = SessionState::Finalized;

        // Title comes from the first recorded outcome, failures checked first.
        let title = match self.failures.first().or_else(|| self.errors.first()) {
            Some(record) => record.title.clone(),
            None => return Ok(()),
        };

        let failures = unique_messages(&self.failures);
        let errors = unique_messages(&self.errors);

        if self.config.debug && !errors.is_empty() {
            // Failures are omitted here: they were already streamed live and
            // carry no separate trace value.
            for error in &errors {
                console.report(error)?;
            }
        } else {
            let report = Report {
                failures: TitledBlock::from_messages(&title, &failures)?,
                errors: TitledBlock::from_messages(&title, &errors)?,
            };
            console.report(&report.to_json()?)?;
        }

        Ok(())
    }
}

fn ok_line(test: &dyn TestHandle) -> String {
    format!("{}... ok", test)
}

fn err_line(status: &str, test: &dyn TestHandle, err: &TestError) -> String {
    format!("{}... {}: {}\n    {}", test, status, err.label, err.value)
}
