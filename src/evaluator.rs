//! Password evaluator - runs every rule and combines the outcomes.

use secrecy::SecretString;

#[cfg(feature = "async")]
use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio::task::JoinSet;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::combiner::combine;
use crate::policy::CombinationPolicy;
use crate::rules::evaluate_all;
use crate::types::Verdict;

#[cfg(feature = "async")]
use crate::types::{RuleName, RuleOutcome};

/// Evaluates a password against every rule and combines the outcomes.
///
/// # Arguments
/// * `password` - The candidate, `None` when absent
/// * `policy` - How rule outcomes become a verdict
///
/// # Returns
/// A [`Verdict`]. This never fails: rule failures are reported inside
/// [`Verdict::Invalid`].
pub fn evaluate(password: Option<&SecretString>, policy: &CombinationPolicy) -> Verdict {
    let outcomes = evaluate_all(password);
    let verdict = combine(&outcomes, policy);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password evaluated under policy {}: {}", policy, verdict);

    verdict
}

/// Shorthand for [`evaluate`] under [`CombinationPolicy::default`].
pub fn is_password_valid(password: Option<&SecretString>) -> bool {
    evaluate(password, &CombinationPolicy::default()).is_valid()
}

/// Evaluates a password with each rule on its own task.
///
/// All rule tasks are joined before combining. A rule task that panics
/// leaves no outcome and is therefore counted as failed.
///
/// Must be called from within a Tokio runtime.
///
/// # Returns
/// `None` if `token` is cancelled before every rule has finished.
#[cfg(feature = "async")]
pub async fn evaluate_concurrently(
    password: Option<&SecretString>,
    policy: &CombinationPolicy,
    token: CancellationToken,
) -> Option<Verdict> {
    if token.is_cancelled() {
        return None;
    }

    let password: Option<Arc<SecretString>> =
        password.map(|pwd| Arc::new(SecretString::new(pwd.expose_secret().into())));

    let mut tasks = JoinSet::new();
    for rule in RuleName::ALL {
        let password = password.clone();
        tasks.spawn(async move { rule.check(password.as_deref()) });
    }

    let join_all = async {
        let mut outcomes: Vec<RuleOutcome> = Vec::with_capacity(RuleName::ALL.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Password rule task failed: {}", _e);
                }
            }
        }
        outcomes
    };

    let Some(outcomes) = token.run_until_cancelled(join_all).await else {
        #[cfg(feature = "tracing")]
        tracing::info!("Password evaluation cancelled");
        return None;
    };

    Some(combine(&outcomes, policy))
}

/// Async version that sends the verdict via channel.
///
/// Nothing is sent if the evaluation is cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: Option<&SecretString>,
    policy: &CombinationPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let Some(verdict) = evaluate_concurrently(password, policy, token).await else {
        return;
    };

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::INSUFFICIENT_CRITERIA_MESSAGE;
    use crate::types::RuleName;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_all_rules_pass() {
        let pwd = secret("dsfdDFF454sfsdsd");
        assert_eq!(evaluate(Some(&pwd), &CombinationPolicy::default()), Verdict::Valid);
        assert_eq!(evaluate(Some(&pwd), &CombinationPolicy::all()), Verdict::Valid);
    }

    #[test]
    fn test_evaluate_short_password_default_policy() {
        let pwd = secret("dffF5D");
        assert!(evaluate(Some(&pwd), &CombinationPolicy::default()).is_valid());
    }

    #[test]
    fn test_evaluate_short_password_strict_policy() {
        let pwd = secret("dffF5D");
        let verdict = evaluate(Some(&pwd), &CombinationPolicy::all());
        assert_eq!(verdict.reason(), Some("Password should be larger than 8 chars."));
    }

    #[test]
    fn test_evaluate_absent_password() {
        let verdict = evaluate(None, &CombinationPolicy::all());
        assert_eq!(verdict.reason(), Some("Password should not be null."));
        assert_eq!(verdict.violations()[0].rule, RuleName::Nullability);
        assert!(!is_password_valid(None));
    }

    #[test]
    fn test_evaluate_missing_lowercase_default_policy() {
        let pwd = secret("DSDS343SDS");
        let verdict = evaluate(Some(&pwd), &CombinationPolicy::default());
        assert_eq!(verdict.reason(), Some(INSUFFICIENT_CRITERIA_MESSAGE));
        assert_eq!(verdict.violations().len(), 1);
        assert_eq!(verdict.violations()[0].rule, RuleName::Lowercase);
    }

    #[test]
    fn test_evaluate_digits_only_default_policy() {
        let pwd = secret("4535675624");
        assert!(!evaluate(Some(&pwd), &CombinationPolicy::default()).is_valid());
        assert!(evaluate(Some(&pwd), &CombinationPolicy::at_least(3, [])).is_valid());
    }

    #[test]
    fn test_evaluate_strict_policy_each_missing_class() {
        let cases = [
            ("dffsf23fd", RuleName::Uppercase),
            ("DSDS343SDS", RuleName::Lowercase),
            ("sdfDfdFDF", RuleName::Digits),
        ];
        for (pwd, rule) in cases {
            let verdict = evaluate(Some(&secret(pwd)), &CombinationPolicy::all());
            assert_eq!(verdict.reason(), Some(rule.description()), "password {pwd:?}");
        }
    }

    #[test]
    fn test_evaluate_three_of_five_without_mandatory() {
        let policy = CombinationPolicy::at_least(3, []);
        for pwd in ["dsfdDF", "dsf36df", "DG7N", "DDFDFTTTSSR", "fgdfgfdgdggdfg", "4535675624"] {
            assert!(
                evaluate(Some(&secret(pwd)), &policy).is_valid(),
                "expected {pwd:?} to be valid"
            );
        }
    }

    #[test]
    fn test_evaluate_strong_password_is_valid_under_default() {
        for pwd in ["Abcdefgh1", "CorrectHorse9Battery", "zZ0zZ0zZ0zZ0"] {
            assert!(is_password_valid(Some(&secret(pwd))), "expected {pwd:?} to be valid");
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let policy = CombinationPolicy::all();
        for pwd in [None, Some(secret("")), Some(secret("dffF5D"))] {
            let first = evaluate(pwd.as_ref(), &policy);
            let second = evaluate(pwd.as_ref(), &policy);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_evaluate_never_panics_on_unusual_input() {
        let long = "aB3".repeat(100_000);
        let inputs = ["", "\0", "パスワード", "🔑🔑🔑🔑🔑🔑🔑🔑🔑", long.as_str()];
        for input in inputs {
            let _ = evaluate(Some(&secret(input)), &CombinationPolicy::all());
            let _ = evaluate(Some(&secret(input)), &CombinationPolicy::default());
        }
        assert!(is_password_valid(Some(&secret(&long))));
    }
}
