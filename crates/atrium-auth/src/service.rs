//! The mock authentication service.

use crate::error::AuthError;
use atrium_core::config::AuthConfig;
use atrium_core::{User, UserRole};
use atrium_session::SessionStore;
use base64::Engine;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

const MSG_CREDENTIALS_REQUIRED: &str = "please enter your email address and password";
const MSG_EMAIL_REQUIRED: &str = "please enter your email address";
const MSG_MALFORMED_EMAIL: &str = "please enter a valid email address";
const MSG_PASSWORD_TOO_SHORT: &str = "password must be at least 6 characters";

/// Mock credential validation and session lifecycle.
///
/// Validation is by shape only; any well-formed credentials log in
/// successfully and are granted the administrator role.
pub struct AuthService {
    store: Arc<SessionStore>,
    config: AuthConfig,
}

impl AuthService {
    /// Create a service writing sessions into `store`.
    pub fn new(store: Arc<SessionStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// The session store this service writes to.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Validate credentials and establish a session.
    ///
    /// Validation order is fixed: missing fields, then email shape, then
    /// password length. Failures return before the simulated round trip
    /// starts. On success the synthesized user has the email's local part
    /// as its name and always carries the administrator role.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(MSG_CREDENTIALS_REQUIRED.to_string()));
        }
        if !email.contains('@') {
            return Err(AuthError::Validation(MSG_MALFORMED_EMAIL.to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(MSG_PASSWORD_TOO_SHORT.to_string()));
        }

        // Where a real network round trip would happen.
        self.simulate_round_trip().await;

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: display_name(email),
            role: UserRole::Administrator,
        };

        let token = self.mint_token();
        self.store.establish(&user, &token).await?;

        tracing::info!(name = %user.name, "mock login succeeded");
        Ok(user)
    }

    /// Accept a password-reset request.
    ///
    /// Mock: validates the email shape, waits the simulated round trip, and
    /// pretends a reset mail went out. Nothing is sent and no state changes.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        if email.is_empty() {
            return Err(AuthError::Validation(MSG_EMAIL_REQUIRED.to_string()));
        }
        if !email.contains('@') {
            return Err(AuthError::Validation(MSG_MALFORMED_EMAIL.to_string()));
        }

        self.simulate_round_trip().await;

        tracing::info!(%email, "mock password reset requested");
        Ok(())
    }

    /// End the session.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().await?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Check that a presented token is one this service could have minted.
    pub fn validate_token(&self, token: &str) -> bool {
        if let Ok(decoded) = base64::engine::general_purpose::STANDARD.decode(token)
            && let Ok(raw) = String::from_utf8(decoded)
        {
            return raw.starts_with(&self.config.token_prefix);
        }
        false
    }

    /// Mint an opaque session token: the configured prefix plus a fresh
    /// UUID, base64-encoded. The content carries no meaning beyond the
    /// prefix check above.
    fn mint_token(&self) -> String {
        let raw = format!("{}{}", self.config.token_prefix, Uuid::new_v4());
        base64::engine::general_purpose::STANDARD.encode(raw)
    }

    async fn simulate_round_trip(&self) {
        if self.config.login_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.login_delay_ms)).await;
        }
    }
}

/// Display name: the email's local part, before the first `@`.
fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_delay(delay_ms: u64) -> (AuthService, Arc<SessionStore>) {
        let store = Arc::new(SessionStore::in_memory());
        let config = AuthConfig {
            login_delay_ms: delay_ms,
            ..Default::default()
        };
        (AuthService::new(store.clone(), config), store)
    }

    fn service() -> (AuthService, Arc<SessionStore>) {
        service_with_delay(0)
    }

    #[tokio::test]
    async fn empty_credentials_are_rejected_first() {
        let (service, store) = service();

        for (email, password) in [("", ""), ("alice@example.com", ""), ("", "secret1")] {
            let err = service.login(email, password).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)));
            assert_eq!(err.to_string(), MSG_CREDENTIALS_REQUIRED);
        }
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn email_without_at_sign_is_rejected() {
        let (service, _store) = service();

        let err = service.login("bob", "secret1").await.unwrap_err();
        assert_eq!(err.to_string(), MSG_MALFORMED_EMAIL);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let (service, _store) = service();

        let err = service.login("alice@example.com", "12345").await.unwrap_err();
        assert_eq!(err.to_string(), MSG_PASSWORD_TOO_SHORT);
    }

    #[tokio::test]
    async fn field_checks_run_in_order() {
        let (service, _store) = service();

        // A malformed email with a short password reports the email first.
        let err = service.login("bob", "123").await.unwrap_err();
        assert_eq!(err.to_string(), MSG_MALFORMED_EMAIL);
    }

    #[tokio::test]
    async fn successful_login_establishes_a_session() {
        let (service, store) = service();

        let user = service.login("alice@example.com", "secret1").await.unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::Administrator);

        assert!(store.is_authenticated().await);
        assert_eq!(store.current_user().await, Some(user));

        let token = store.token().await.expect("token must be stored");
        assert!(service.validate_token(&token));
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let (service, store) = service();
        service.login("alice@example.com", "secret1").await.unwrap();

        service.logout().await.unwrap();
        assert!(!store.is_authenticated().await);
        assert!(store.current_user().await.is_none());
    }

    #[tokio::test]
    async fn password_reset_validates_the_email() {
        let (service, _store) = service();

        let err = service.request_password_reset("").await.unwrap_err();
        assert_eq!(err.to_string(), MSG_EMAIL_REQUIRED);

        let err = service.request_password_reset("bob").await.unwrap_err();
        assert_eq!(err.to_string(), MSG_MALFORMED_EMAIL);

        service
            .request_password_reset("alice@example.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn password_reset_leaves_the_session_untouched() {
        let (service, store) = service();

        service
            .request_password_reset("alice@example.com")
            .await
            .unwrap();
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn foreign_tokens_do_not_validate() {
        let (service, _store) = service();

        assert!(!service.validate_token("not base64 ???"));

        let wrong_prefix = base64::engine::general_purpose::STANDARD.encode("other_prefix_abc");
        assert!(!service.validate_token(&wrong_prefix));
    }

    #[tokio::test(start_paused = true)]
    async fn validation_failures_skip_the_simulated_delay() {
        let (service, _store) = service_with_delay(1000);
        let start = tokio::time::Instant::now();

        let err = service.login("", "").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn successful_login_waits_the_configured_delay() {
        let (service, _store) = service_with_delay(1000);
        let start = tokio::time::Instant::now();

        service.login("alice@example.com", "secret1").await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }
}
