//! Individual validation checks.

use std::sync::LazyLock;

use regex::Regex;

/// Email shape check, per the WHATWG HTML living standard.
pub static RGX_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Returns true when the value contains at least one non-whitespace
/// character.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns true when the value is at least `n` characters long, counted in
/// Unicode scalar values rather than bytes.
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// Returns true when the value is at most `n` characters long, counted in
/// Unicode scalar values rather than bytes.
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// Returns true when the value matches the pattern.
pub fn matches(value: &str, rgx: &Regex) -> bool {
    rgx.is_match(value)
}

/// Returns true when the value is absent from the list.
pub fn not_in<T: PartialEq>(value: &T, list: &[T]) -> bool {
    !list.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_requires_visible_characters() {
        assert!(not_blank("hello"));
        assert!(not_blank(" hello "));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
        assert!(!not_blank(" \t\n "));
    }

    #[test]
    fn char_counts_use_scalar_values() {
        assert!(min_chars("caf\u{e9}", 4));
        assert!(!min_chars("caf\u{e9}", 5));
        assert!(max_chars("caf\u{e9}", 4));
        assert!(!max_chars("caf\u{e9}", 3));
        assert!(min_chars("\u{1f680}\u{1f510}", 2));
    }

    #[test]
    fn email_pattern() {
        assert!(matches("alice@example.com", &RGX_EMAIL));
        assert!(matches("a.b+c@sub.example.org", &RGX_EMAIL));
        assert!(!matches("alice", &RGX_EMAIL));
        assert!(!matches("alice@", &RGX_EMAIL));
        assert!(!matches("@example.com", &RGX_EMAIL));
        assert!(!matches("alice@example com", &RGX_EMAIL));
    }

    #[test]
    fn not_in_consults_the_whole_list() {
        assert!(not_in(&"s3cret", &["password", "qwerty123"]));
        assert!(!not_in(&"password", &["password", "qwerty123"]));
    }
}
