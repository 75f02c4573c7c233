use super::types::FieldErrors;
use crate::services::errors::ValidationError;
use crate::utils::matches_email_pattern;

/// Synchronous checks for the sign-up form. Input is taken as typed, not trimmed.
pub fn validate_signup(email: &str, password: &str) -> FieldErrors {
    let email = if email.is_empty() {
        Some(ValidationError::MissingEmail)
    } else if !matches_email_pattern(email) {
        Some(ValidationError::InvalidEmailFormat)
    } else {
        None
    };

    let password = if password.is_empty() {
        Some(ValidationError::MissingPassword)
    } else {
        None
    };

    FieldErrors { email, password }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_email() {
        let errors = validate_signup("", "x");
        assert_eq!(errors.email, Some(ValidationError::MissingEmail));
        assert_eq!(errors.password, None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_invalid_email() {
        for email in ["bad", "a@b", "a.b@c", "@@", "a b@c .d"] {
            let errors = validate_signup(email, "x");
            assert_eq!(
                errors.email,
                Some(ValidationError::InvalidEmailFormat),
                "{email}"
            );
        }
    }

    #[test]
    fn test_missing_password() {
        let errors = validate_signup("a@b.com", "");
        assert_eq!(errors.email, None);
        assert_eq!(errors.password, Some(ValidationError::MissingPassword));
    }

    #[test]
    fn test_both_missing() {
        let errors = validate_signup("", "");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_signup("a@b.com", "secret").is_empty());
        // No strength rule on passwords, and whitespace counts as content
        assert!(validate_signup("a@b.com", " ").is_empty());
    }

    #[test]
    fn test_whitespace_email_is_invalid_not_missing() {
        assert_eq!(
            validate_signup("   ", "x").email,
            Some(ValidationError::InvalidEmailFormat)
        );
    }
}
