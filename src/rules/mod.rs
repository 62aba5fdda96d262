//! Password composition rules
//!
//! Each rule is a regular expression that must match somewhere in the
//! password. The rules are compiled together into one `RegexSet`, so a single
//! scan tells which of them hold.

mod length;
mod variety;

use regex::{RegexSet, RegexSetBuilder};

pub use length::MIN_LENGTH;

/// A single composition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Rule {
    /// All rules, in the order they are registered in the compiled set.
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::Lowercase,
        Rule::Uppercase,
        Rule::Digit,
        Rule::Special,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            Rule::MinLength => length::MIN_LENGTH_PATTERN,
            Rule::Lowercase => variety::LOWERCASE_PATTERN,
            Rule::Uppercase => variety::UPPERCASE_PATTERN,
            Rule::Digit => variety::DIGIT_PATTERN,
            Rule::Special => variety::SPECIAL_PATTERN,
        }
    }
}

/// Compiles every rule into a single set.
pub fn compile_rules() -> Result<RegexSet, regex::Error> {
    RegexSetBuilder::new(Rule::ALL.iter().map(|rule| rule.pattern()))
        .dot_matches_new_line(true)
        .build()
}
