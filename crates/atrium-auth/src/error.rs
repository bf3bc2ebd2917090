//! Error types for the auth crate.

use atrium_session::SessionError;
use thiserror::Error;

/// Errors from the mock authentication flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad user input, recovered locally and shown inline in the form.
    #[error("{0}")]
    Validation(String),

    /// Session storage failure.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl AuthError {
    /// True for input errors the user can fix by resubmitting.
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }
}
