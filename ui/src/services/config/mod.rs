//! Configuration for the auth service the sign-up screen talks to.

use serde::{Deserialize, Serialize};

use crate::console_warn;
use crate::services::errors::ConfigError;

pub const DEFAULT_SIGNUP_PATH: &str = "/api/auth/signup";
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "auth_session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupServiceConfig {
    /// Scheme and host of the auth service, e.g. `https://example.com`.
    /// Required: the default is empty and does not validate.
    pub base_url: String,

    /// Path of the account creation endpoint
    pub signup_path: String,

    /// Local storage key the created session is written to
    pub session_storage_key: String,
}

impl Default for SignupServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            signup_path: DEFAULT_SIGNUP_PATH.to_string(),
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
        }
    }
}

impl SignupServiceConfig {
    pub fn for_origin(origin: &str) -> Self {
        Self {
            base_url: origin.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Same-origin configuration taken from `window.location`. Off the browser
    /// this is the default, which `validate` refuses.
    pub fn from_window() -> Self {
        match window_origin() {
            Some(origin) => Self::for_origin(&origin),
            None => {
                console_warn!("[Config] No window origin available, using default auth config");
                Self::default()
            }
        }
    }

    pub fn signup_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.signup_path)
    }

    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            errors.push(ConfigError::InvalidField {
                field: "base_url",
                value: self.base_url.clone(),
                reason: "must be an absolute http(s) URL",
            });
        }

        if !self.signup_path.starts_with('/') {
            errors.push(ConfigError::InvalidField {
                field: "signup_path",
                value: self.signup_path.clone(),
                reason: "must start with '/'",
            });
        }

        if self.session_storage_key.trim().is_empty() {
            errors.push(ConfigError::InvalidField {
                field: "session_storage_key",
                value: self.session_storage_key.clone(),
                reason: "must not be empty",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = SignupServiceConfig::for_origin("https://auth.example.com/");
        assert!(config.validate().is_ok());
        assert_eq!(config.signup_url(), "https://auth.example.com/api/auth/signup");
    }

    #[test]
    fn test_invalid_config() {
        let mut config = SignupServiceConfig::default();
        config.signup_path = "signup".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_from_window_off_the_browser() {
        assert_eq!(SignupServiceConfig::from_window(), SignupServiceConfig::default());
    }

    #[test]
    fn test_default_config_needs_base_url() {
        let errors = SignupServiceConfig::default().validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ConfigError::InvalidField { field: "base_url", .. }
        ));
    }

    #[test]
    fn test_config_deserializes() {
        let config: SignupServiceConfig = serde_json::from_str(
            r#"{"base_url":"http://localhost:8080","signup_path":"/signup","session_storage_key":"s"}"#,
        )
        .unwrap();
        assert_eq!(config.signup_url(), "http://localhost:8080/signup");
        assert!(config.validate().is_ok());
    }
}
