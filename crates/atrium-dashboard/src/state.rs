//! Dashboard application state.

use atrium_auth::AuthService;
use atrium_core::AtriumConfig;
use atrium_session::SessionStore;
use std::sync::Arc;

/// Shared application state for the dashboard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: AtriumConfig,
    /// Mock authentication service.
    auth: AuthService,
    /// Session store shared with the auth service.
    store: Arc<SessionStore>,
}

impl AppState {
    /// Create a new application state around a session store.
    pub fn new(config: AtriumConfig, store: Arc<SessionStore>) -> Self {
        let auth = AuthService::new(store.clone(), config.auth.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                auth,
                store,
            }),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AtriumConfig {
        &self.inner.config
    }

    /// Get the auth service.
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get the session store.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.inner.store
    }
}
