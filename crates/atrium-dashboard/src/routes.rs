//! Route definitions for the dashboard.

use crate::auth;
use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login_submit),
        )
        .route(
            "/forgot-password",
            get(handlers::forgot_password_page).post(handlers::forgot_password_submit),
        )
        .route("/dashboard", get(handlers::dashboard))
        .route("/dashboard/error-test", get(handlers::error_test))
        .route("/logout", post(handlers::logout))
        .route("/healthz", get(handlers::healthz))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root-level boundary: log the panic and serve a bare fallback document.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected panic".to_string()
    };

    tracing::error!(error = %detail, "panic while handling request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(crate::pages::root_error_page(&detail)),
    )
        .into_response()
}
