use async_trait::async_trait;
use gloo_storage::{LocalStorage, Storage};
use std::rc::Rc;
use tracing::{error, info, instrument};

use crate::console_warn;
use crate::services::client::types::{AuthSession, ErrorBody, SignupRequest};
use crate::services::config::SignupServiceConfig;
use crate::services::errors::{ConfigError, SignupError, SignupResult};

/// Account creation collaborator used by the sign-up screen.
///
/// WASM-first: futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait SignupProvider {
    async fn signup(&self, email: &str, password: &str) -> SignupResult<AuthSession>;
}

/// Handle to a [`SignupProvider`] that can be passed as a component prop.
/// Two handles are equal when they point at the same provider.
#[derive(Clone)]
pub struct SignupService(Rc<dyn SignupProvider>);

impl SignupService {
    pub fn new(provider: impl SignupProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn provider(&self) -> &dyn SignupProvider {
        self.0.as_ref()
    }
}

impl PartialEq for SignupService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// JSON-over-HTTP auth client
pub struct HttpSignupClient {
    http_client: reqwest::Client,
    config: SignupServiceConfig,
}

impl HttpSignupClient {
    /// Refuses configurations that could never reach the service, such as a
    /// missing `base_url`.
    pub fn new(config: SignupServiceConfig) -> Result<Self, Vec<ConfigError>> {
        config.validate().inspect_err(|errors| {
            for error in errors {
                console_warn!("[HttpSignupClient] {}", error);
            }
        })?;
        Ok(Self {
            http_client: reqwest::Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &SignupServiceConfig {
        &self.config
    }

    fn persist_session(&self, session: &AuthSession) {
        if let Err(e) = LocalStorage::set(&self.config.session_storage_key, session) {
            console_warn!("[HttpSignupClient] Failed to store session: {}", e);
        }
    }
}

#[async_trait(?Send)]
impl SignupProvider for HttpSignupClient {
    #[instrument(skip(self, password), err)]
    async fn signup(&self, email: &str, password: &str) -> SignupResult<AuthSession> {
        let signup_url = self.config.signup_url();
        info!("Creating account at {} for {}", signup_url, email);

        let response = self
            .http_client
            .post(&signup_url)
            .header("Content-Type", "application/json")
            .json(&SignupRequest { email, password })
            .send()
            .await
            .map_err(|e| SignupError::Network {
                message: format!("Failed to call signup endpoint: {}", e),
            })?;

        let status = response.status();
        if status.is_success() {
            let session: AuthSession =
                response
                    .json()
                    .await
                    .map_err(|e| SignupError::InvalidResponse {
                        message: format!("Failed to parse session: {}", e),
                    })?;

            info!("Account created for user {}", session.user_id);
            self.persist_session(&session);
            Ok(session)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            error!("Signup rejected with status {}: {:?}", status, message);
            Err(SignupError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Pull a human readable message out of an error response body
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    #[async_trait(?Send)]
    impl SignupProvider for AlwaysFails {
        async fn signup(&self, _email: &str, _password: &str) -> SignupResult<AuthSession> {
            Err(SignupError::Failed { message: None })
        }
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"message":"Email taken"}"#).as_deref(),
            Some("Email taken")
        );
        assert_eq!(error_message_from_body("<html>502</html>"), None);
        assert_eq!(error_message_from_body(""), None);
    }

    #[test]
    fn test_service_equality_is_by_provider() {
        let service = SignupService::new(AlwaysFails);
        let same = service.clone();
        let other = SignupService::new(AlwaysFails);
        assert!(service == same);
        assert!(service != other);
    }

    #[tokio::test]
    async fn test_service_forwards_to_provider() {
        let service = SignupService::new(AlwaysFails);
        let result = service.provider().signup("a@b.com", "secret").await;
        assert_eq!(result, Err(SignupError::Failed { message: None }));
    }

    #[test]
    fn test_http_client_keeps_config() {
        let client =
            HttpSignupClient::new(SignupServiceConfig::for_origin("https://a.example")).unwrap();
        assert_eq!(client.config().signup_url(), "https://a.example/api/auth/signup");
    }

    #[test]
    fn test_http_client_refuses_default_config() {
        let errors = HttpSignupClient::new(SignupServiceConfig::default())
            .err()
            .expect("default config has no base_url");
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::InvalidField { field: "base_url", .. }]
        ));
    }
}
