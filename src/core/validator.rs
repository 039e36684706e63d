//! The immutable validator binding a rule set to an evaluation strategy.

use super::rule::Rule;
use super::strategy::EvaluationStrategy;
use super::violation::RuleViolation;
use crate::builder::ValidatorBuilder;
use crate::report::ValidationReport;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An ordered rule set bound to one evaluation strategy.
///
/// Validators are built once by [`ValidatorBuilder`] and never mutated
/// afterwards, so a single instance may be shared across threads and
/// invoked concurrently with different targets. Predicates captured in
/// rules are `Send + Sync` by bound; any shared state inside them is the
/// caller's obligation to keep thread-safe.
///
/// # Example
///
/// ```rust
/// use verdict::Validator;
///
/// let validator = Validator::builder()
///     .rule("must be positive", |n: &i64| *n > 0)
///     .rule("must be even", |n: &i64| n % 2 == 0)
///     .build();
///
/// assert_eq!(validator.validate(&-3), vec!["must be positive", "must be even"]);
/// assert!(validator.validate(&4).is_empty());
/// ```
pub struct Validator<T> {
    pub(crate) rules: Vec<Rule<T>>,
    pub(crate) strategy: EvaluationStrategy,
}

impl<T> Validator<T> {
    /// Start building a validator.
    ///
    /// The builder defaults to [`EvaluationStrategy::CollectAll`].
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }

    /// Evaluate `target` against the rule set.
    ///
    /// Returns the failure messages the bound strategy reports, in rule
    /// order; an empty result means the target satisfied every rule. A
    /// non-empty result is the normal "target is invalid" outcome, not an
    /// error. If a predicate panics, the panic propagates to the caller
    /// unchanged.
    pub fn validate(&self, target: &T) -> Vec<String> {
        self.strategy.evaluate(&self.rules, target)
    }

    /// Whether `target` satisfies every rule.
    pub fn is_valid(&self, target: &T) -> bool {
        self.validate(target).is_empty()
    }

    /// Evaluate `target`, accumulating broken rules into a `Validation`.
    ///
    /// Respects the bound strategy: under
    /// [`EvaluationStrategy::FailFast`] a failure carries exactly one
    /// violation, under [`EvaluationStrategy::CollectAll`] it carries one
    /// violation per broken rule, in rule order.
    pub fn check(&self, target: &T) -> Validation<(), NonEmptyVec<RuleViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = self
            .validate(target)
            .into_iter()
            .map(|message| Validation::fail(RuleViolation::new(message)))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Evaluate `target` into a serializable [`ValidationReport`].
    pub fn report(&self, target: &T) -> ValidationReport {
        ValidationReport::new(self.validate(target))
    }

    /// Number of rules in the set.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The evaluation strategy bound at build time.
    pub fn strategy(&self) -> EvaluationStrategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_and_parity() -> ValidatorBuilder<i64> {
        Validator::builder()
            .rule("must be positive", |n: &i64| *n > 0)
            .rule("must be even", |n: &i64| n % 2 == 0)
    }

    #[test]
    fn collects_every_failure_for_an_invalid_target() {
        let validator = sign_and_parity().collect_all().build();

        assert_eq!(
            validator.validate(&-3),
            vec!["must be positive", "must be even"]
        );
    }

    #[test]
    fn reports_only_the_first_failure_under_fail_fast() {
        let validator = sign_and_parity().fail_fast().build();

        assert_eq!(validator.validate(&-3), vec!["must be positive"]);
    }

    #[test]
    fn passing_target_yields_empty_output() {
        let validator = sign_and_parity().build();

        assert!(validator.validate(&4).is_empty());
        assert!(validator.is_valid(&4));
    }

    #[test]
    fn validator_without_rules_accepts_anything() {
        let validator: Validator<i64> = Validator::builder().build();

        assert!(validator.validate(&0).is_empty());
        assert_eq!(validator.rule_count(), 0);
    }

    #[test]
    fn builder_defaults_to_collect_all() {
        let validator = sign_and_parity().build();

        assert_eq!(validator.strategy(), EvaluationStrategy::CollectAll);
        assert_eq!(
            validator.validate(&-3),
            sign_and_parity().collect_all().build().validate(&-3)
        );
    }

    #[test]
    fn check_succeeds_for_a_valid_target() {
        let validator = sign_and_parity().build();

        assert!(validator.check(&4).is_success());
    }

    #[test]
    fn check_accumulates_violations_in_rule_order() {
        let validator = sign_and_parity().build();

        match validator.check(&-3) {
            Validation::Failure(violations) => {
                let messages: Vec<&str> = violations.iter().map(|v| v.message()).collect();
                assert_eq!(messages, vec!["must be positive", "must be even"]);
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn check_under_fail_fast_carries_a_single_violation() {
        let validator = sign_and_parity().fail_fast().build();

        match validator.check(&-3) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations.iter().next().unwrap().message(), "must be positive");
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn report_carries_the_same_messages_as_validate() {
        let validator = sign_and_parity().build();

        let report = validator.report(&-3);

        assert!(!report.is_valid());
        assert_eq!(report.into_messages(), validator.validate(&-3));
    }
}
