use thiserror::Error;

/// Local, synchronous input failures shown inline under a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required.")]
    MissingEmail,

    #[error("Email is invalid.")]
    InvalidEmailFormat,

    #[error("Password is required.")]
    MissingPassword,
}

/// Failures reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignupError {
    #[error("Sign up rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Sign up failed: {}", .message.as_deref().unwrap_or("no message"))]
    Failed { message: Option<String> },
}

impl SignupError {
    pub fn failed(message: impl Into<String>) -> Self {
        SignupError::Failed {
            message: Some(message.into()),
        }
    }

    /// Best-effort human readable message. `None` (missing or empty) means
    /// the caller should fall back to a generic text.
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            SignupError::Rejected { message, .. } | SignupError::Failed { message } => {
                message.clone()
            }
            SignupError::Network { .. } | SignupError::InvalidResponse { .. } => {
                Some(self.to_string())
            }
        };
        message.filter(|m| !m.is_empty())
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            SignupError::Network { .. } => true,
            SignupError::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} = {value:?} ({reason})")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub type SignupResult<T> = Result<T, SignupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingEmail.to_string(), "Email is required.");
        assert_eq!(ValidationError::InvalidEmailFormat.to_string(), "Email is invalid.");
        assert_eq!(ValidationError::MissingPassword.to_string(), "Password is required.");
    }

    #[test]
    fn test_user_message_prefers_collaborator_text() {
        let error = SignupError::Rejected {
            status: 409,
            message: Some("Email taken".to_string()),
        };
        assert_eq!(error.user_message().as_deref(), Some("Email taken"));
        assert_eq!(SignupError::failed("Nope").user_message().as_deref(), Some("Nope"));
    }

    #[test]
    fn test_user_message_missing_or_empty() {
        assert_eq!(SignupError::Failed { message: None }.user_message(), None);
        assert_eq!(SignupError::failed("").user_message(), None);
        assert_eq!(
            SignupError::Rejected {
                status: 400,
                message: Some(String::new())
            }
            .user_message(),
            None
        );
    }

    #[test]
    fn test_whitespace_message_is_kept() {
        assert_eq!(SignupError::failed("   ").user_message().as_deref(), Some("   "));
    }

    #[test]
    fn test_transport_errors_use_display() {
        let error = SignupError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.user_message().as_deref(),
            Some("Network error: connection refused")
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(SignupError::Network { message: "x".into() }.is_retryable());
        assert!(SignupError::Rejected { status: 503, message: None }.is_retryable());
        assert!(!SignupError::Rejected { status: 409, message: None }.is_retryable());
        assert!(!SignupError::failed("x").is_retryable());
    }
}
