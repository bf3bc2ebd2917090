//! Dashboard server implementation.

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;
use tokio::net::TcpListener;

/// The dashboard server.
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server around the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Start the dashboard server.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.state.config().server.bind.clone();
        tracing::info!(address = %addr, "Starting Atrium dashboard");

        let app = routes::create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    /// The configured bind address.
    pub fn bind_addr(&self) -> &str {
        &self.state.config().server.bind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::AtriumConfig;
    use atrium_session::SessionStore;
    use std::sync::Arc;

    #[test]
    fn test_server_creation() {
        let state = AppState::new(AtriumConfig::default(), Arc::new(SessionStore::in_memory()));
        let server = DashboardServer::new(state);
        assert_eq!(server.bind_addr(), "127.0.0.1:8080");
    }
}
