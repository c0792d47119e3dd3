//! Nullability rule - the candidate must be present.

use secrecy::SecretString;

/// Passes when a candidate was supplied at all. An empty string counts as present.
pub fn nullability_rule(password: Option<&SecretString>) -> bool {
    password.is_some()
}
