//! Password composition check
//!
//! Tells whether a password satisfies a fixed set of composition rules:
//!
//! - at least 8 characters
//! - an ASCII lowercase letter
//! - an ASCII uppercase letter
//! - an ASCII digit
//! - a special character, i.e. anything outside `[A-Za-z0-9_]`
//!
//! The check is a pure function; it keeps no state between calls and is safe
//! to call from any number of threads.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use strong_password::{ensure_strong_password, is_strong_password, PasswordError};
//!
//! assert!(is_strong_password("Passw0rd!"));
//! assert!(!is_strong_password("Password_1"));
//!
//! assert_eq!(ensure_strong_password("Pass1!"), Err(PasswordError::Weak));
//! ```

// Internal modules
mod checker;
mod rules;

// Public API
pub use checker::{ensure_strong_password, is_strong_password, is_strong_secret, PasswordError};
pub use rules::MIN_LENGTH;
