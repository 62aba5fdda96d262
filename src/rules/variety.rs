//! Character variety rules - lowercase, uppercase, digit and special characters.
//!
//! Classes are spelled out in ASCII instead of `\w`/`\d`, which are Unicode
//! aware in the `regex` crate.

pub(super) const LOWERCASE_PATTERN: &str = r"[a-z]";
pub(super) const UPPERCASE_PATTERN: &str = r"[A-Z]";
pub(super) const DIGIT_PATTERN: &str = r"[0-9]";
/// Anything outside `[A-Za-z0-9_]`. Underscore is not special.
pub(super) const SPECIAL_PATTERN: &str = r"[^A-Za-z0-9_]";
