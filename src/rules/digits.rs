//! Digits rule.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one digit (`0`-`9`).
pub fn digits_rule(password: Option<&SecretString>) -> bool {
    password.is_some_and(|pwd| pwd.expose_secret().chars().any(|c| c.is_ascii_digit()))
}
