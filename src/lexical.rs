//! Character-level substrate for the expression grammar.
//!
//! The parser never sees raw input: callers run [`clean`] first, and the
//! grammar alternatives classify characters through the predicates below.
//! Everything here is total and stateless; the grammar itself is ASCII.

/// Removes every whitespace character, keeping the relative order of the
/// rest. Idempotent by construction.
pub fn clean(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_upper_alpha(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_lower_alpha(c: char) -> bool {
    c.is_ascii_lowercase()
}
