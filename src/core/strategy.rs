//! Evaluation strategies governing how rule failures are aggregated.
//!
//! A validator is bound to exactly one strategy at build time. Both
//! strategies walk the rule sequence in insertion order; they differ only
//! in how far they walk and how much they report.

use super::rule::Rule;

/// Policy for aggregating rule failures during validation.
///
/// `FailFast` suits cheap gating where the first problem is enough to
/// reject. `CollectAll` suits user-facing validation where reporting
/// every problem in one pass beats making the caller fix them one at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationStrategy {
    /// Stop at the first broken rule and report only its message.
    FailFast,

    /// Evaluate every rule and report all broken ones, in rule order.
    #[default]
    CollectAll,
}

impl EvaluationStrategy {
    /// Evaluate `rules` against `target` in order, returning the failure
    /// messages this policy reports.
    ///
    /// `FailFast` short-circuits: predicates after the first broken rule
    /// are never invoked. `CollectAll` invokes every predicate exactly
    /// once. Under either policy an empty result means the target
    /// satisfied every rule.
    pub fn evaluate<T>(&self, rules: &[Rule<T>], target: &T) -> Vec<String> {
        match self {
            Self::FailFast => rules
                .iter()
                .find(|rule| !rule.check(target))
                .map(|rule| vec![rule.message().to_string()])
                .unwrap_or_default(),
            Self::CollectAll => rules
                .iter()
                .filter(|rule| !rule.check(target))
                .map(|rule| rule.message().to_string())
                .collect(),
        }
    }
}
