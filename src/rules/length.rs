//! Length rule - the password must have at least `MIN_LENGTH` characters.

/// Minimum number of characters (Unicode scalar values) in a strong password.
pub const MIN_LENGTH: usize = 8;

// Keep the repetition count in sync with MIN_LENGTH.
pub(super) const MIN_LENGTH_PATTERN: &str = r"\A.{8,}\z";
