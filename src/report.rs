//! Final report construction
//!
//! At the end of a session the collector turns its recorded outcomes into a
//! JSON report of the shape `{"failures": block|null, "errors": block|null}`,
//! where each block carries a title and a YAML-encoded list of deduplicated
//! messages.

use crate::error::Result;
use crate::outcome::TestHandle;
use serde::Serialize;
use std::collections::HashSet;

/// Placeholder session label used when a test handle carries no session.
pub const NO_SESSION: &str = "No session created";

/// Ellipsis marker appended to truncated messages so consumers can detect
/// lossy entries.
pub const TRUNCATION_MARKER: &str = "...";

/// A single recorded outcome.
///
/// The title is captured at append time so finalization never needs to touch
/// the host's test objects again.
#[derive(Debug, Clone)]
pub struct OutcomeRecord {
    /// Report title derived from the test handle.
    pub title: String,
    /// Stringified (and possibly truncated) error payload.
    pub message: String,
    /// Display form of the subtest, when the outcome came from one.
    pub subtest: Option<String>,
}

impl OutcomeRecord {
    /// Create a record for the given test handle
    pub fn new(test: &dyn TestHandle, message: impl Into<String>, subtest: Option<String>) -> Self {
        OutcomeRecord {
            title: title_for(test),
            message: message.into(),
            subtest,
        }
    }
}

/// A named, YAML-serialized list of deduplicated messages.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TitledBlock {
    /// Title derived from the first recorded outcome.
    pub title: String,
    /// YAML block-sequence of the messages.
    pub value: String,
}

impl TitledBlock {
    /// Build a block from deduplicated messages, or None when there are none.
    ///
    /// The YAML value is a block sequence with list items flush with the
    /// parent mapping indentation.
    pub fn from_messages(title: &str, messages: &[String]) -> Result<Option<TitledBlock>> {
        if messages.is_empty() {
            return Ok(None);
        }
        Ok(Some(TitledBlock {
            title: title.to_string(),
            value: serde_yaml::to_string(messages)?,
        }))
    }
}

/// The final report emitted once per session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    /// Assertion-style failures, or null when none were recorded.
    pub failures: Option<TitledBlock>,
    /// Unexpected errors, or null when none were recorded.
    pub errors: Option<TitledBlock>,
}

impl Report {
    /// Encode the report as a single JSON line
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Derive the report title from a test handle.
///
/// Uses the handle's display URL when present, else its `Display` form, and
/// its session identifier when present, else a fixed placeholder.
pub fn title_for(test: &dyn TestHandle) -> String {
    let name = match test.printable_url() {
        Some(url) => url.to_string(),
        None => test.to_string(),
    };
    format!("{}: {}", name, test.session_id().unwrap_or(NO_SESSION))
}

/// Truncate a message to `threshold` characters, appending the ellipsis
/// marker when anything was cut. Messages at or under the threshold are
/// returned verbatim.
pub fn truncate_message(msg: &str, threshold: usize) -> String {
    match msg.char_indices().nth(threshold) {
        Some((idx, _)) => format!("{}{}", &msg[..idx], TRUNCATION_MARKER),
        None => msg.to_string(),
    }
}

/// Reduce records to their messages and collapse duplicates.
///
/// Records from subtests are prefixed with the subtest's display form.
/// Ordering among survivors is first-occurrence insertion order.
pub fn unique_messages(records: &[OutcomeRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut messages = Vec::new();

    for record in records {
        let msg = match &record.subtest {
            Some(subtest) => format!("{}:\n{}", subtest, record.message.trim()),
            None => record.message.trim().to_string(),
        };
        if seen.insert(msg.clone()) {
            messages.push(msg);
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SessionCase {
        url: String,
        session: Option<String>,
    }

    impl std::fmt::Display for SessionCase {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "case")
        }
    }

    impl TestHandle for SessionCase {
        fn printable_url(&self) -> Option<&str> {
            Some(&self.url)
        }

        fn session_id(&self) -> Option<&str> {
            self.session.as_deref()
        }
    }

    #[test]
    fn test_title_from_plain_handle() {
        let title = title_for(&"test_a");
        assert_eq!(title, "test_a: No session created");
    }

    #[test]
    fn test_title_from_describable_handle() {
        let case = SessionCase {
            url: "https://example.com/login".to_string(),
            session: Some("abc123".to_string()),
        };
        assert_eq!(title_for(&case), "https://example.com/login: abc123");
    }

    #[test]
    fn test_title_session_placeholder() {
        let case = SessionCase {
            url: "https://example.com/login".to_string(),
            session: None,
        };
        assert_eq!(
            title_for(&case),
            "https://example.com/login: No session created"
        );
    }

    #[test]
    fn test_truncate_short_message() {
        assert_eq!(truncate_message("short", 255), "short");
    }

    #[test]
    fn test_truncate_at_threshold() {
        let msg = "x".repeat(255);
        assert_eq!(truncate_message(&msg, 255), msg);
    }

    #[test]
    fn test_truncate_long_message() {
        let msg = "a".repeat(300);
        let truncated = truncate_message(&msg, 255);
        assert_eq!(truncated.len(), 258);
        assert_eq!(&truncated[..255], &msg[..255]);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let msg = "é".repeat(10);
        let truncated = truncate_message(&msg, 4);
        assert_eq!(truncated, format!("{}...", "é".repeat(4)));
    }

    #[test]
    fn test_unique_messages_dedup() {
        let records = vec![
            OutcomeRecord::new(&"test_a", "x != y", None),
            OutcomeRecord::new(&"test_b", "x != y", None),
            OutcomeRecord::new(&"test_c", "other", None),
        ];

        let messages = unique_messages(&records);
        assert_eq!(messages, vec!["x != y".to_string(), "other".to_string()]);
    }

    #[test]
    fn test_unique_messages_trims_whitespace() {
        let records = vec![OutcomeRecord::new(&"test_a", "boom\n\n", None)];
        assert_eq!(unique_messages(&records), vec!["boom".to_string()]);
    }

    #[test]
    fn test_unique_messages_subtest_prefix() {
        let records = vec![OutcomeRecord::new(
            &"test_a",
            "boom",
            Some("subtest (i=1)".to_string()),
        )];
        assert_eq!(
            unique_messages(&records),
            vec!["subtest (i=1):\nboom".to_string()]
        );
    }

    #[test]
    fn test_titled_block_empty() {
        let block = TitledBlock::from_messages("title", &[]).unwrap();
        assert!(block.is_none());
    }

    #[test]
    fn test_titled_block_yaml_value() {
        let messages = vec!["x != y".to_string(), "boom".to_string()];
        let block = TitledBlock::from_messages("test_a: No session created", &messages)
            .unwrap()
            .unwrap();

        assert_eq!(block.title, "test_a: No session created");
        let decoded: Vec<String> = serde_yaml::from_str(&block.value).unwrap();
        assert_eq!(decoded, messages);
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report {
            failures: Some(TitledBlock {
                title: "t".to_string(),
                value: "- x\n".to_string(),
            }),
            errors: None,
        };

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["failures"]["title"], "t");
        assert_eq!(value["failures"]["value"], "- x\n");
        assert!(value["errors"].is_null());
    }
}
