//! Password rule validation library
//!
//! This library checks a candidate password against a fixed set of rules
//! (nullability, length, uppercase, lowercase, digits) and combines the
//! individual outcomes into one verdict under a configurable policy.
//!
//! # Features
//!
//! - `async` (default): Enables concurrent rule evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY`: Combination policy in text form, e.g. `all` or `at-least:3:lowercase`
//! - `PWD_POLICY_PATH`: Path to a file holding the policy in text form
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{evaluate, CombinationPolicy, Verdict};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("dsfdDFF454sfsdsd".to_string().into());
//!
//! let verdict = evaluate(Some(&password), &CombinationPolicy::all());
//! assert_eq!(verdict, Verdict::Valid);
//!
//! let verdict = evaluate(None, &CombinationPolicy::all());
//! assert_eq!(verdict.reason(), Some("Password should not be null."));
//! ```

// Internal modules
mod combiner;
mod evaluator;
mod policy;
mod rules;
mod types;

pub mod console;

// Public API
pub use combiner::combine;
pub use evaluator::{evaluate, is_password_valid};
pub use policy::{
    get_policy_path, load_policy, load_policy_from_path, CombinationPolicy, ParsePolicyError,
    PolicyError, PolicyMode, INSUFFICIENT_CRITERIA_MESSAGE, POLICY_ENV, POLICY_PATH_ENV,
};
pub use rules::{
    digits_rule, evaluate_all, length_rule, lowercase_rule, nullability_rule, uppercase_rule,
    RuleFn, MIN_LENGTH,
};
pub use types::{RuleName, RuleOutcome, RuleViolation, UnknownRule, Verdict};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_concurrently, evaluate_tx};
