//! Password rules
//!
//! Each rule is a pure, total predicate over an optional candidate.

mod digits;
mod length;
mod lowercase;
mod nullability;
mod uppercase;

pub use digits::digits_rule;
pub use length::{MIN_LENGTH, length_rule};
pub use lowercase::lowercase_rule;
pub use nullability::nullability_rule;
pub use uppercase::uppercase_rule;

use secrecy::SecretString;

use crate::types::{RuleName, RuleOutcome};

/// Signature shared by every rule function.
/// - `true` - Rule passed
/// - `false` - Rule failed (including an absent candidate)
pub type RuleFn = fn(Option<&SecretString>) -> bool;

impl RuleName {
    /// The predicate implementing this rule.
    pub fn rule_fn(self) -> RuleFn {
        match self {
            RuleName::Nullability => nullability_rule,
            RuleName::Length => length_rule,
            RuleName::Uppercase => uppercase_rule,
            RuleName::Lowercase => lowercase_rule,
            RuleName::Digits => digits_rule,
        }
    }

    /// Evaluates this rule against `password`.
    pub fn check(self, password: Option<&SecretString>) -> RuleOutcome {
        RuleOutcome::new(self, (self.rule_fn())(password))
    }
}

/// Evaluates every rule against `password`.
///
/// No rule short-circuits another: an absent candidate still yields five
/// outcomes. Outcomes are returned in priority order.
pub fn evaluate_all(password: Option<&SecretString>) -> Vec<RuleOutcome> {
    RuleName::ALL
        .into_iter()
        .map(|rule| {
            let outcome = rule.check(password);

            #[cfg(feature = "tracing")]
            {
                if !outcome.success {
                    tracing::debug!("Password rule failed: {}", rule);
                }
            }

            outcome
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(outcomes: &[RuleOutcome]) -> Vec<RuleName> {
        outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.rule)
            .collect()
    }

    #[test]
    fn test_evaluate_all_covers_every_rule() {
        let pwd = SecretString::new("dsfdDFF454sfsdsd".to_string().into());
        let outcomes = evaluate_all(Some(&pwd));

        let rules: Vec<_> = outcomes.iter().map(|o| o.rule).collect();
        assert_eq!(rules, RuleName::ALL.to_vec());
        assert!(outcomes.iter().all(|o| o.success));
    }

    #[test]
    fn test_evaluate_all_absent_does_not_short_circuit() {
        let outcomes = evaluate_all(None);
        assert_eq!(outcomes.len(), RuleName::ALL.len());
        assert_eq!(failed(&outcomes), RuleName::ALL.to_vec());
    }

    #[test]
    fn test_evaluate_all_empty_password() {
        let pwd = SecretString::new("".to_string().into());
        let outcomes = evaluate_all(Some(&pwd));
        assert_eq!(
            failed(&outcomes),
            vec![
                RuleName::Length,
                RuleName::Uppercase,
                RuleName::Lowercase,
                RuleName::Digits
            ]
        );
    }

    #[test]
    fn test_evaluate_all_short_mixed_case() {
        let pwd = SecretString::new("dffF5D".to_string().into());
        let outcomes = evaluate_all(Some(&pwd));
        assert_eq!(failed(&outcomes), vec![RuleName::Length]);
    }

    #[test]
    fn test_check_matches_rule_fn() {
        let pwd = SecretString::new("4535675624".to_string().into());
        for rule in RuleName::ALL {
            let outcome = rule.check(Some(&pwd));
            assert_eq!(outcome.rule, rule);
            assert_eq!(outcome.success, (rule.rule_fn())(Some(&pwd)));
        }
    }
}
