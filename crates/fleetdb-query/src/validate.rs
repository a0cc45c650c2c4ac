//! Validation predicates guarding every caller-supplied command fragment.
//!
//! These are whitelist checks, not escapes: input either stays inside the
//! allowed character set or the enclosing call fails. Nothing is rewritten.

/// Returns `true` if `s` is non-empty and every byte is an ASCII decimal
/// digit.
///
/// Used to validate agent identifiers: `"0"` and `"123"` pass, while `""`,
/// `"-1"` and `"1a"` fail.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if every character of `s` is an ASCII letter, an ASCII
/// digit, or a member of `extra`.
///
/// The empty string passes vacuously; emptiness is a call-site concern.
pub fn is_allowed_text(s: &str, extra: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || extra.contains(c))
}
