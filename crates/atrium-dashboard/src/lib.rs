//! # atrium-dashboard
//!
//! Embedded web dashboard for the Atrium mock-auth demo.
//!
//! This crate provides an embedded web UI for:
//! - Login (mock credential validation with simulated latency)
//! - Password-reset requests (mock, nothing is actually sent)
//! - A statistics dashboard behind the session check
//! - Fallback error pages with a retry action
//!
//! ## Tech Stack
//!
//! - Axum for HTTP server
//! - Server-rendered HTML, Tailwind CSS via CDN
//! - Alpine.js for the small interactive bits (submit spinner, password
//!   visibility)
//! - A session cookie checked by middleware; redirecting to `/login` is the
//!   only access-control mechanism, consistent with the mock

pub mod auth;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::DashboardError;
pub use server::DashboardServer;
pub use state::AppState;
