//! Result combiner - turns rule outcomes into a single verdict.

use std::collections::BTreeSet;

use crate::policy::{CombinationPolicy, INSUFFICIENT_CRITERIA_MESSAGE, PolicyMode};
use crate::types::{RuleName, RuleOutcome, RuleViolation, Verdict};

/// Combines rule outcomes under `policy`.
///
/// Outcomes are treated as a set: a rule counts as passed if any outcome
/// for it succeeded, and a rule with no outcome at all counts as failed.
/// Violations are always reported in priority order, so the first one is
/// the failure surfaced by [`PolicyMode::All`].
pub fn combine(outcomes: &[RuleOutcome], policy: &CombinationPolicy) -> Verdict {
    let successes: BTreeSet<RuleName> = outcomes
        .iter()
        .filter(|o| o.success)
        .map(|o| o.rule)
        .collect();

    let violations: Vec<RuleViolation> = RuleName::ALL
        .into_iter()
        .filter(|rule| !successes.contains(rule))
        .map(RuleViolation::from)
        .collect();

    match policy.mode {
        PolicyMode::All => match violations.first() {
            None => Verdict::Valid,
            Some(first) => Verdict::Invalid {
                reason: first.description.to_string(),
                violations,
            },
        },
        PolicyMode::AtLeastN => {
            // Mandatory rules gate the verdict on their own; meeting the
            // threshold with other rules does not compensate.
            let mandatory_met = policy.mandatory.is_subset(&successes);
            if mandatory_met && successes.len() >= policy.n {
                Verdict::Valid
            } else {
                Verdict::Invalid {
                    reason: INSUFFICIENT_CRITERIA_MESSAGE.to_string(),
                    violations,
                }
            }
        }
    }
}
