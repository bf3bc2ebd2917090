//! # atrium-auth
//!
//! Mock authentication for the Atrium dashboard.
//!
//! This crate provides functionality for:
//! - Shape-only credential validation (non-empty fields, an `@` in the
//!   email, a minimum password length) with a fixed validation order
//! - A simulated network round trip on success, standing in for where a
//!   real API call would happen
//! - Minting the opaque session token and writing token + user into the
//!   session store
//! - Logout (clearing the session) and a mock password-reset request
//!
//! There is no real credential verification, no password hashing, and no
//! rate limiting. Validation failures return before the simulated round
//! trip starts, so bad input is rejected without any delay.

pub mod error;
pub mod service;

pub use error::AuthError;
pub use service::AuthService;
