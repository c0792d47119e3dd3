//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// The candidate must be strictly longer than this many characters.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password is longer than [`MIN_LENGTH`] characters.
///
/// Length is counted in `char`s, so multi-byte characters count once.
pub fn length_rule(password: Option<&SecretString>) -> bool {
    password.is_some_and(|pwd| pwd.expose_secret().chars().count() > MIN_LENGTH)
}
