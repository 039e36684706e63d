//! Builder API for assembling validators.
//!
//! The builder is the only mutable piece of the library: rules accumulate
//! in insertion order, a strategy is selected (collect-all by default),
//! and `build()` freezes both into an immutable [`Validator`].

use crate::core::{EvaluationStrategy, Rule, Validator};

/// Mutable accumulator that produces immutable [`Validator`]s.
///
/// Rules are evaluated in the order they were added. `build()` snapshots
/// the rules accumulated so far, so one builder may produce several
/// validators sharing a common prefix; rules added after a `build()`
/// never reach the validators built before it.
///
/// The builder is meant for single-owner, sequential configuration.
///
/// # Example
///
/// ```rust
/// use verdict::Validator;
///
/// let builder = Validator::builder()
///     .rule("must not be empty", |s: &String| !s.is_empty());
///
/// let lenient = builder.build();
/// let strict = builder
///     .rule("must be lowercase", |s: &String| !s.chars().any(char::is_uppercase))
///     .build();
///
/// let name = "Verdict".to_string();
/// assert!(lenient.validate(&name).is_empty());
/// assert_eq!(strict.validate(&name), vec!["must be lowercase"]);
/// ```
pub struct ValidatorBuilder<T> {
    rules: Vec<Rule<T>>,
    strategy: EvaluationStrategy,
}

impl<T> ValidatorBuilder<T> {
    /// Create an empty builder with the collect-all strategy.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            strategy: EvaluationStrategy::CollectAll,
        }
    }

    /// Append a rule from a failure message and a predicate.
    ///
    /// The order of `rule` calls determines evaluation order.
    pub fn rule<F>(mut self, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(message, predicate));
        self
    }

    /// Append an already-constructed rule.
    pub fn with_rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Report only the first broken rule.
    pub fn fail_fast(mut self) -> Self {
        self.strategy = EvaluationStrategy::FailFast;
        self
    }

    /// Report every broken rule (the default).
    pub fn collect_all(mut self) -> Self {
        self.strategy = EvaluationStrategy::CollectAll;
        self
    }

    /// Freeze the accumulated rules and strategy into a [`Validator`].
    ///
    /// The rule list is copied, not aliased: the builder stays usable and
    /// later additions cannot reach the validator built here. Building
    /// with zero rules is legal and yields a validator that accepts
    /// every target.
    pub fn build(&self) -> Validator<T> {
        Validator {
            rules: self.rules.clone(),
            strategy: self.strategy,
        }
    }
}

impl<T> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
