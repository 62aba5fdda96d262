//! Password strength checker - main check logic.

use std::sync::LazyLock;

use regex::RegexSet;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::rules::compile_rules;

static STRONG_PASSWORD_RULES: LazyLock<Result<RegexSet, regex::Error>> = LazyLock::new(|| {
    let rules = compile_rules();

    #[cfg(feature = "tracing")]
    {
        match &rules {
            Ok(set) => tracing::debug!("Password rules compiled: {} patterns", set.len()),
            Err(e) => tracing::error!("Password rules failed to compile: {}", e),
        }
    }

    rules
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error(
        "Password must contain at least 8 characters, an uppercase letter, \
         a lowercase letter, a digit and a special character"
    )]
    Weak,
    #[error("Password rules are invalid: {0}")]
    InvalidRules(String),
}

fn check(password: &str) -> Result<bool, PasswordError> {
    let rules = STRONG_PASSWORD_RULES
        .as_ref()
        .map_err(|e| PasswordError::InvalidRules(e.to_string()))?;
    Ok(rules.matches(password).matched_all())
}

/// Returns `true` if the password satisfies every composition rule.
///
/// A strong password has at least [`MIN_LENGTH`](crate::MIN_LENGTH) characters
/// and contains an ASCII lowercase letter, an ASCII uppercase letter, an ASCII
/// digit and a character outside `[A-Za-z0-9_]`.
///
/// Callers holding an optional password can use
/// `password.is_some_and(is_strong_password)`, which rejects `None`.
pub fn is_strong_password(password: &str) -> bool {
    check(password).unwrap_or(false)
}

/// Same as [`is_strong_password`] for a password kept behind `SecretString`.
pub fn is_strong_secret(password: &SecretString) -> bool {
    is_strong_password(password.expose_secret())
}

/// Validation guard for registration forms.
///
/// # Errors
///
/// Returns [`PasswordError::Weak`] if any rule fails, without saying which.
pub fn ensure_strong_password(password: &str) -> Result<(), PasswordError> {
    if check(password)? {
        Ok(())
    } else {
        Err(PasswordError::Weak)
    }
}
