//! Serializable validation outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of validating one target: the failure messages, in rule order.
///
/// An empty report means the target satisfied every rule. Reports are
/// plain data and serialize cleanly, so they can cross process boundaries
/// in API responses or structured logs without dragging rules along.
///
/// # Example
///
/// ```rust
/// use verdict::Validator;
///
/// let validator = Validator::builder()
///     .rule("must not be empty", |s: &String| !s.is_empty())
///     .build();
///
/// let report = validator.report(&String::new());
///
/// assert!(!report.is_valid());
/// assert_eq!(report.messages()[0], "must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    messages: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Whether the target satisfied every rule.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Failure messages, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the report, yielding the failure messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
