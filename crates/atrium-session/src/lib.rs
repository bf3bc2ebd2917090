//! # atrium-session
//!
//! Session storage for the Atrium dashboard.
//!
//! This crate provides functionality for:
//! - Persisting the mock auth session (an opaque token plus a JSON-encoded
//!   user record) behind a pluggable storage backend
//! - In-memory, single-file, and null backends selected from configuration
//! - A `SessionStore` facade implementing the two-key session contract
//!
//! ## Session contract
//!
//! The store holds exactly two keys:
//!
//! | Key | Contents |
//! |-----|----------|
//! | `auth_token` | Opaque token string; its presence is the only "logged in" signal |
//! | `user_data` | JSON-encoded [`atrium_core::User`] record |
//!
//! Malformed stored data is treated as an absent session, never a propagated
//! failure. The null backend models an environment with no storage facility
//! at all: every read reports an absent session.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use atrium_session::{MemoryStorage, SessionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SessionStore::new(Box::new(MemoryStorage::new()));
//!
//! assert!(!store.is_authenticated().await);
//! assert!(store.current_user().await.is_none());
//!
//! // Clearing an empty store is a no-op.
//! store.clear().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod storage;
pub mod store;

pub use error::SessionError;
pub use storage::{FileStorage, MemoryStorage, NullStorage, SessionStorage, create_storage};
pub use store::{AUTH_TOKEN_KEY, SessionStore, USER_DATA_KEY};
