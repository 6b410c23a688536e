//! Test outcome data structures
//!
//! The host engine hands the collector opaque test handles and structured
//! error payloads. This module defines the Rust shapes for both: the
//! [`TestHandle`] capability trait and the [`TestError`] payload.

use std::fmt;

/// Category of an error payload raised during test execution.
///
/// This is the only classification the reporting layer performs: an
/// assertion-style failure (expected vs. actual) versus any other exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected-vs-actual assertion failure.
    Assertion,
    /// Any other exception raised during test or subtest execution.
    Unexpected,
}

/// A structured error payload, mirroring the host's
/// `(error_type, error_value, traceback)` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError {
    /// Whether the payload is an assertion failure or an unexpected error.
    pub kind: ErrorKind,
    /// Display name of the error type (e.g. "AssertionError").
    pub label: String,
    /// Stringified error value.
    pub value: String,
    /// Formatted stack trace, if the host captured one.
    pub traceback: Option<String>,
}

impl TestError {
    /// Create an assertion-failure payload
    pub fn assertion(label: impl Into<String>, value: impl Into<String>) -> Self {
        TestError {
            kind: ErrorKind::Assertion,
            label: label.into(),
            value: value.into(),
            traceback: None,
        }
    }

    /// Create an unexpected-error payload
    pub fn unexpected(label: impl Into<String>, value: impl Into<String>) -> Self {
        TestError {
            kind: ErrorKind::Unexpected,
            label: label.into(),
            value: value.into(),
            traceback: None,
        }
    }

    /// Attach a formatted stack trace
    pub fn with_traceback(mut self, traceback: impl Into<String>) -> Self {
        self.traceback = Some(traceback.into());
        self
    }

    /// Returns true if this payload is an assertion failure.
    pub fn is_assertion(&self) -> bool {
        self.kind == ErrorKind::Assertion
    }
}

/// An opaque, string-convertible handle to a test or subtest.
///
/// Handles are polymorphic over an optional describable capability: a handle
/// may expose a display URL and a session label. Absence falls back to the
/// `Display` form and a fixed placeholder when deriving the report title.
pub trait TestHandle: fmt::Display {
    /// A human-oriented display name for the test, if the host provides one.
    fn printable_url(&self) -> Option<&str> {
        None
    }

    /// An identifier for the session the test ran under, if any.
    fn session_id(&self) -> Option<&str> {
        None
    }
}

impl TestHandle for String {}

impl TestHandle for &str {}
