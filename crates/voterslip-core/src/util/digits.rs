//! Digit extraction for the phone-number key space.
//!
//! ## Summary
//! The primary store keys voter records by bare digit strings, so every
//! phone-shaped value (search input or stored mobile field) is reduced to
//! its ASCII digits before comparison: "+91 98765-43210" and
//! "919876543210" address the same key.

/// Strips every character that is not an ASCII digit.
///
/// Examples:
/// - "+91-9876543210" -> "919876543210"
/// - "(011) 2345 678" -> "0112345678"
/// - "no digits here" -> ""
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns whether `input` carries at least one ASCII digit.
///
/// The lookup dispatcher uses this to decide whether a raw search term
/// leans phone-number or name.
#[must_use]
pub fn contains_digit(input: &str) -> bool {
    input.chars().any(|ch| ch.is_ascii_digit())
}
