//! Session store facade.
//!
//! Wraps a storage backend behind the two-key session contract: an opaque
//! auth token whose presence means "logged in", and a JSON-encoded user
//! record cached next to it.

use crate::error::SessionError;
use crate::storage::{MemoryStorage, SessionStorage};
use atrium_core::User;

/// Key holding the opaque session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key holding the JSON-encoded user record.
pub const USER_DATA_KEY: &str = "user_data";

/// The session store.
///
/// All reads degrade gracefully: a storage failure or a malformed stored
/// record reads as "no session". Only writes surface errors.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Create a store over the given backend.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Create a store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// True iff a session token is present.
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.storage.read(AUTH_TOKEN_KEY).await, Ok(Some(_)))
    }

    /// The raw session token, if present.
    pub async fn token(&self) -> Option<String> {
        self.storage.read(AUTH_TOKEN_KEY).await.ok().flatten()
    }

    /// The stored user record, if present and intact.
    pub async fn current_user(&self) -> Option<User> {
        let raw = self.storage.read(USER_DATA_KEY).await.ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "stored user record is malformed; treating as absent");
                None
            }
        }
    }

    /// Record a logged-in user under the given token.
    pub async fn establish(&self, user: &User, token: &str) -> Result<(), SessionError> {
        self.storage.write(AUTH_TOKEN_KEY, token).await?;
        let record = serde_json::to_string(user)?;
        self.storage.write(USER_DATA_KEY, &record).await?;
        Ok(())
    }

    /// Drop the token and the user record. Clearing an empty store is a
    /// no-op.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.storage.remove(AUTH_TOKEN_KEY).await?;
        self.storage.remove(USER_DATA_KEY).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NullStorage;
    use atrium_core::UserRole;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            name: "alice".to_string(),
            role: UserRole::Administrator,
        }
    }

    #[tokio::test]
    async fn establish_then_read_back() {
        let store = SessionStore::in_memory();
        let user = sample_user();

        assert!(!store.is_authenticated().await);

        store.establish(&user, "tok_1").await.unwrap();
        assert!(store.is_authenticated().await);
        assert_eq!(store.token().await.as_deref(), Some("tok_1"));
        assert_eq!(store.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn clear_removes_both_keys() {
        let store = SessionStore::in_memory();
        store.establish(&sample_user(), "tok_1").await.unwrap();

        store.clear().await.unwrap();
        assert!(!store.is_authenticated().await);
        assert!(store.current_user().await.is_none());
        assert!(store.token().await.is_none());
    }

    #[tokio::test]
    async fn clear_on_empty_store_is_a_noop() {
        let store = SessionStore::in_memory();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn corrupted_user_record_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.write(AUTH_TOKEN_KEY, "tok_1").await.unwrap();
        storage.write(USER_DATA_KEY, "{definitely not json").await.unwrap();

        let store = SessionStore::new(Box::new(storage));

        // The token is intact, so the session still counts as authenticated,
        // but the user record reads as absent.
        assert!(store.is_authenticated().await);
        assert!(store.current_user().await.is_none());
    }

    #[tokio::test]
    async fn null_backend_never_authenticates() {
        let store = SessionStore::new(Box::new(NullStorage));

        store.establish(&sample_user(), "tok_1").await.unwrap();
        assert!(!store.is_authenticated().await);
        assert!(store.current_user().await.is_none());
    }
}
