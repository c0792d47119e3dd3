//! Shared value types: rule names, outcomes and verdicts.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the fixed password rules.
///
/// Declaration order is the failure priority order used when a single
/// failing rule has to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleName {
    Nullability,
    Length,
    Uppercase,
    Lowercase,
    Digits,
}

impl RuleName {
    /// Every rule, in priority order.
    pub const ALL: [RuleName; 5] = [
        RuleName::Nullability,
        RuleName::Length,
        RuleName::Uppercase,
        RuleName::Lowercase,
        RuleName::Digits,
    ];

    /// Stable name of the rule.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::Nullability => "nullability",
            RuleName::Length => "length",
            RuleName::Uppercase => "uppercase",
            RuleName::Lowercase => "lowercase",
            RuleName::Digits => "digits",
        }
    }

    /// Human-readable message reported when the rule fails.
    pub fn description(self) -> &'static str {
        match self {
            RuleName::Nullability => "Password should not be null.",
            RuleName::Length => "Password should be larger than 8 chars.",
            RuleName::Uppercase => "Password should have one uppercase letter at least.",
            RuleName::Lowercase => "Password should have one lowercase letter at least.",
            RuleName::Digits => "Password should have one number at least.",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for RuleName {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownRule(name.to_string()))
    }
}

/// Result of evaluating one rule against one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RuleName,
    pub success: bool,
}

impl RuleOutcome {
    pub fn new(rule: RuleName, success: bool) -> Self {
        Self { rule, success }
    }
}

/// A failed rule, carried as data inside an invalid verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub rule: RuleName,
    pub description: &'static str,
}

impl From<RuleName> for RuleViolation {
    fn from(rule: RuleName) -> Self {
        Self {
            rule,
            description: rule.description(),
        }
    }
}

/// Final accept/reject decision for a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid {
        reason: String,
        /// Every failed rule, in priority order.
        violations: Vec<RuleViolation>,
    },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Rejection reason, `None` for a valid verdict.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { reason, .. } => Some(reason),
        }
    }

    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Verdict::Valid => &[],
            Verdict::Invalid { violations, .. } => violations,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => f.write_str("VALID"),
            Verdict::Invalid { .. } => f.write_str("INVALID"),
        }
    }
}
