//! Verdict: a rule-based validation library
//!
//! Verdict checks a target value against an ordered set of named rules and
//! reports the failure messages of the rules the target breaks. The core is
//! pure: rules pair a message with a side-effect-free predicate, validators
//! are immutable once built, and how failures are aggregated is a pluggable
//! evaluation strategy.
//!
//! # Core Concepts
//!
//! - **Rule**: a human-readable failure message paired with a pure predicate
//! - **Evaluation strategy**: fail-fast (stop at the first broken rule) or
//!   collect-all (report every broken rule in one pass)
//! - **Validator**: an ordered rule set bound to one strategy, frozen at
//!   build time
//! - **Builder**: mutable accumulation of rules, snapshotted by `build()`
//!
//! # Example
//!
//! ```rust
//! use verdict::Validator;
//!
//! let validator = Validator::builder()
//!     .rule("must be positive", |n: &i64| *n > 0)
//!     .rule("must be even", |n: &i64| n % 2 == 0)
//!     .build();
//!
//! // Collect-all is the default: every broken rule is reported.
//! assert_eq!(validator.validate(&-3), vec!["must be positive", "must be even"]);
//! assert!(validator.validate(&4).is_empty());
//!
//! // Fail-fast stops at the first broken rule.
//! let gate = Validator::builder()
//!     .rule("must be positive", |n: &i64| *n > 0)
//!     .rule("must be even", |n: &i64| n % 2 == 0)
//!     .fail_fast()
//!     .build();
//!
//! assert_eq!(gate.validate(&-3), vec!["must be positive"]);
//! ```

pub mod builder;
pub mod core;
pub mod report;

// Re-export commonly used types
pub use builder::ValidatorBuilder;
pub use core::{EvaluationStrategy, Rule, RuleViolation, Validator};
pub use report::ValidationReport;
