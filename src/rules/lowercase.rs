//! Lowercase rule.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one lowercase letter.
pub fn lowercase_rule(password: Option<&SecretString>) -> bool {
    password.is_some_and(|pwd| pwd.expose_secret().chars().any(|c| c.is_lowercase()))
}
