use regex::Regex;
use std::sync::LazyLock;

use crate::services::errors::ValidationError;

/// One character outside the JavaScript `\s` set. Unicode `\S` differs from
/// it (U+FEFF is JS whitespace, U+0085 is not), so the set is spelled out.
const NON_SPACE: &str = r"[^\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// `local@domain.tld` shape: non-whitespace runs around `@` and a later `.`.
/// Unanchored, so it matches anywhere in the input.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{0}+@{0}+\.{0}+", NON_SPACE)).expect("email pattern is a valid regex")
});

pub fn matches_email_pattern(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn field_error_class(error: Option<&ValidationError>) -> &'static str {
    match error {
        Some(_) => "signup-input input-invalid",
        None => "signup-input",
    }
}

pub fn field_error_style(error: Option<&ValidationError>) -> &'static str {
    match error {
        Some(_) => "border: 1px solid #ef4444;",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_accepts_simple_addresses() {
        assert!(matches_email_pattern("a@b.com"));
        assert!(matches_email_pattern("first.last@sub.example.org"));
        assert!(matches_email_pattern("a@b.c"));
    }

    #[test]
    fn test_email_pattern_rejects_missing_parts() {
        assert!(!matches_email_pattern("bad"));
        assert!(!matches_email_pattern("a@b"));
        assert!(!matches_email_pattern("@b.com"));
        assert!(!matches_email_pattern("a@.com"));
        assert!(!matches_email_pattern("a@b."));
        assert!(!matches_email_pattern("a @b.com"));
    }

    #[test]
    fn test_email_pattern_is_permissive() {
        // Unanchored: surrounding text and repeated symbols still match
        assert!(matches_email_pattern("  a@b.com  "));
        assert!(matches_email_pattern("junk a@b.com junk"));
        assert!(matches_email_pattern("a@@b..com"));
    }

    #[test]
    fn test_email_pattern_uses_js_whitespace() {
        assert!(!matches_email_pattern("a\u{FEFF}@b.com"));
        assert!(!matches_email_pattern("a@b\u{3000}.com"));
        assert!(!matches_email_pattern("a@b.\u{00A0}"));
        assert!(matches_email_pattern("a\u{0085}@b.com"));
    }

    #[test]
    fn test_field_error_class() {
        assert_eq!(field_error_class(None), "signup-input");
        assert_eq!(
            field_error_class(Some(&ValidationError::MissingEmail)),
            "signup-input input-invalid"
        );
        assert_eq!(field_error_style(None), "");
    }
}
