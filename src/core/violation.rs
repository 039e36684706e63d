//! Violation errors surfaced through strategy-aware checks.

use thiserror::Error;

/// A single broken rule, carrying that rule's failure message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RuleViolation {
    message: String,
}

impl RuleViolation {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The failure message of the broken rule.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_displays_its_message() {
        let violation = RuleViolation::new("must be positive".to_string());

        assert_eq!(violation.to_string(), "must be positive");
        assert_eq!(violation.message(), "must be positive");
    }
}
