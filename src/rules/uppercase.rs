//! Uppercase rule.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one uppercase letter.
pub fn uppercase_rule(password: Option<&SecretString>) -> bool {
    password.is_some_and(|pwd| pwd.expose_secret().chars().any(|c| c.is_uppercase()))
}
