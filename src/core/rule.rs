//! Named validation rules.
//!
//! A rule pairs a human-readable failure message with a pure predicate
//! over the target type. Rules are immutable values; validators evaluate
//! them without ever mutating them.

use std::sync::Arc;

/// A named check: a failure message paired with a pure predicate.
///
/// The predicate returns `true` when the target satisfies the rule. When
/// it returns `false`, the message describes what is wrong in terms a
/// human can act on.
///
/// # Example
///
/// ```rust
/// use verdict::Rule;
///
/// let positive = Rule::new("must be positive", |n: &i64| *n > 0);
///
/// assert!(positive.check(&7));
/// assert!(!positive.check(&-3));
/// assert_eq!(positive.message(), "must be positive");
/// ```
pub struct Rule<T> {
    message: String,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Rule<T> {
    /// Create a rule from a failure message and a pure predicate.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync). The message is non-empty by convention;
    /// this is not enforced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Rule;
    ///
    /// let short = Rule::new("must be at most 8 characters", |s: &String| s.len() <= 8);
    ///
    /// assert!(short.check(&"hello".to_string()));
    /// assert!(!short.check(&"much too long".to_string()));
    /// ```
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule {
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The failure message reported when the predicate rejects a target.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether the target satisfies this rule.
    ///
    /// This is a pure function that evaluates the predicate without any
    /// side effects. A predicate that panics is a caller bug; the panic
    /// propagates unchanged.
    pub fn check(&self, target: &T) -> bool {
        (self.predicate)(target)
    }
}

// Manual impl: cloning shares the predicate and must not require T: Clone.
impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Rule {
            message: self.message.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}
