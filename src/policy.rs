//! Combination policy
//!
//! Describes how a set of rule outcomes becomes one verdict, and how a
//! policy is loaded from the environment.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::types::{RuleName, UnknownRule};

/// Environment variable holding a policy in its text form.
pub const POLICY_ENV: &str = "PWD_POLICY";

/// Environment variable naming a file that holds a policy in its text form.
pub const POLICY_PATH_ENV: &str = "PWD_POLICY_PATH";

/// Reason reported when an `AtLeastN` policy rejects a candidate.
pub const INSUFFICIENT_CRITERIA_MESSAGE: &str = "Insufficient criteria met.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMode {
    /// Every rule must pass.
    All,
    /// At least `n` rules must pass, including every mandatory rule.
    AtLeastN,
}

/// Strategy for turning rule outcomes into a verdict.
///
/// `n` and `mandatory` are only consulted in [`PolicyMode::AtLeastN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationPolicy {
    pub mode: PolicyMode,
    pub n: usize,
    pub mandatory: BTreeSet<RuleName>,
}

impl CombinationPolicy {
    /// Strict policy: every rule must pass.
    pub fn all() -> Self {
        Self {
            mode: PolicyMode::All,
            n: RuleName::ALL.len(),
            mandatory: BTreeSet::new(),
        }
    }

    /// Lenient policy: at least `n` rules must pass, and every rule in
    /// `mandatory` must be among them.
    ///
    /// A threshold above the number of rules can never be met.
    pub fn at_least(n: usize, mandatory: impl IntoIterator<Item = RuleName>) -> Self {
        Self {
            mode: PolicyMode::AtLeastN,
            n,
            mandatory: mandatory.into_iter().collect(),
        }
    }
}

impl Default for CombinationPolicy {
    /// At least three rules, lowercase mandatory.
    fn default() -> Self {
        Self::at_least(3, [RuleName::Lowercase])
    }
}

impl fmt::Display for CombinationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            PolicyMode::All => f.write_str("all"),
            PolicyMode::AtLeastN => {
                write!(f, "at-least:{}", self.n)?;
                if !self.mandatory.is_empty() {
                    let names: Vec<_> = self.mandatory.iter().map(|r| r.as_str()).collect();
                    write!(f, ":{}", names.join(","))?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePolicyError {
    #[error("Unknown policy mode: {0:?} (expected \"all\" or \"at-least\")")]
    UnknownMode(String),
    #[error("Missing threshold after \"at-least\"")]
    MissingThreshold,
    #[error("Invalid threshold: {0:?}")]
    InvalidThreshold(String),
    #[error("Threshold {0} exceeds the number of rules ({max})", max = RuleName::ALL.len())]
    ThresholdOutOfRange(usize),
    #[error(transparent)]
    UnknownRule(#[from] UnknownRule),
    #[error("Unexpected trailing input: {0:?}")]
    TrailingInput(String),
}

impl FromStr for CombinationPolicy {
    type Err = ParsePolicyError;

    /// Parses `all`, `at-least:<n>` or `at-least:<n>:<rule>[,<rule>...]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let mode = parts.next().unwrap_or_default().trim();

        let policy = if mode.eq_ignore_ascii_case("all") {
            Self::all()
        } else if mode.eq_ignore_ascii_case("at-least") {
            let raw = parts.next().ok_or(ParsePolicyError::MissingThreshold)?.trim();
            if raw.is_empty() {
                return Err(ParsePolicyError::MissingThreshold);
            }
            let n: usize = raw
                .parse()
                .map_err(|_| ParsePolicyError::InvalidThreshold(raw.to_string()))?;
            if n > RuleName::ALL.len() {
                return Err(ParsePolicyError::ThresholdOutOfRange(n));
            }

            let mandatory = match parts.next() {
                Some(list) => list
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::parse)
                    .collect::<Result<BTreeSet<RuleName>, _>>()?,
                None => BTreeSet::new(),
            };
            Self::at_least(n, mandatory)
        } else {
            return Err(ParsePolicyError::UnknownMode(mode.to_string()));
        };

        let rest: Vec<_> = parts.collect();
        if !rest.is_empty() {
            return Err(ParsePolicyError::TrailingInput(rest.join(":")));
        }
        Ok(policy)
    }
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Policy file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read policy file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Policy file is empty")]
    EmptyFile,
    #[error("Invalid policy: {0}")]
    Parse(#[from] ParsePolicyError),
}

/// Returns the policy file path from `PWD_POLICY_PATH`, if set.
pub fn get_policy_path() -> Option<PathBuf> {
    std::env::var(POLICY_PATH_ENV).ok().map(PathBuf::from)
}

/// Loads the combination policy from the environment.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY` (text form, e.g. `at-least:3:lowercase`)
/// 2. File named by `PWD_POLICY_PATH`
/// 3. [`CombinationPolicy::default`]
///
/// # Errors
///
/// Returns error if the configured policy text does not parse, or if the
/// policy file is missing, unreadable or empty.
pub fn load_policy() -> Result<CombinationPolicy, PolicyError> {
    if let Ok(text) = std::env::var(POLICY_ENV) {
        let policy: CombinationPolicy = text.parse().inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy from {} is invalid: {}", POLICY_ENV, _e);
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Combination policy loaded from {}: {}", POLICY_ENV, policy);

        return Ok(policy);
    }

    match get_policy_path() {
        Some(path) => load_policy_from_path(path),
        None => {
            #[cfg(feature = "tracing")]
            tracing::info!("Using default combination policy");

            Ok(CombinationPolicy::default())
        }
    }
}

/// Loads the combination policy from a specific file.
///
/// The first line that is neither blank nor a `#` comment holds the policy.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File holds no policy line
/// - The policy line does not parse
pub fn load_policy_from_path<P: AsRef<Path>>(path: P) -> Result<CombinationPolicy, PolicyError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy load FAILED: FileNotFound {:?}", path);
        return Err(PolicyError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy load FAILED: Empty file {:?}", path);
            PolicyError::EmptyFile
        })?;

    let policy: CombinationPolicy = line.parse()?;

    #[cfg(feature = "tracing")]
    tracing::info!("Combination policy loaded from {:?}: {}", path, policy);

    Ok(policy)
}
