use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Configuration types shared across all Atrium crates
pub mod config;

// Re-export commonly used config types for convenience
pub use config::{AtriumConfig, AuthConfig, ServerConfig, SessionBackend, SessionConfig};

/// An authenticated account as the mock backend reports it.
///
/// Synthesized on successful login, mirrored into the session store as a
/// JSON record, and destroyed on logout. There is no account registry
/// behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Display name, derived from the local part of the email.
    pub name: String,
    pub role: UserRole,
}

/// Account role. The mock login always grants `Administrator`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Administrator,
    Standard,
}

impl User {
    /// Display label for the role, as shown in the dashboard header.
    pub fn role_label(&self) -> &'static str {
        match self.role {
            UserRole::Administrator => "Administrator",
            UserRole::Standard => "Standard",
        }
    }
}
