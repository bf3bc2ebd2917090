//! Request handlers for the dashboard.

use axum::{
    Form, Json,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{clear_session_cookie, session_cookie};
use crate::error::DashboardError;
use crate::pages;
use crate::state::AppState;

/// Login page query parameters.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Forgot-password page query parameters.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordQuery {
    #[serde(default)]
    pub error: Option<String>,
}

/// Forgot-password form data.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

/// Handler for the root path.
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// Handler for the login page (GET).
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(pages::login_page(
        query.error.as_deref(),
        query.redirect.as_deref(),
    ))
}

/// Handler for login form submission (POST).
pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match state.auth().login(&form.email, &form.password).await {
        Ok(user) => {
            let token = state.store().token().await.unwrap_or_default();

            let redirect_url = form
                .redirect
                .filter(|r| !r.is_empty() && r.starts_with('/'))
                .unwrap_or_else(|| "/dashboard".to_string());

            tracing::debug!(name = %user.name, target = %redirect_url, "login succeeded");
            (
                [(header::SET_COOKIE, session_cookie(&token))],
                Redirect::to(&redirect_url),
            )
                .into_response()
        }
        Err(error) => {
            let redirect = form
                .redirect
                .filter(|r| !r.is_empty())
                .map(|r| format!("&redirect={}", urlencoding::encode(&r)))
                .unwrap_or_default();

            Redirect::to(&format!(
                "/login?error={}{}",
                urlencoding::encode(&error.to_string()),
                redirect
            ))
            .into_response()
        }
    }
}

/// Handler for the forgot-password page (GET).
pub async fn forgot_password_page(Query(query): Query<ForgotPasswordQuery>) -> Html<String> {
    Html(pages::forgot_password_page(query.error.as_deref()))
}

/// Handler for forgot-password form submission (POST).
pub async fn forgot_password_submit(
    State(state): State<AppState>,
    Form(form): Form<ForgotPasswordForm>,
) -> Response {
    match state.auth().request_password_reset(&form.email).await {
        Ok(()) => Html(pages::forgot_password_sent_page(&form.email)).into_response(),
        Err(error) => Redirect::to(&format!(
            "/forgot-password?error={}",
            urlencoding::encode(&error.to_string())
        ))
        .into_response(),
    }
}

/// Handler for the dashboard page.
pub async fn dashboard(State(state): State<AppState>) -> Result<Response, DashboardError> {
    // The middleware already vetted the cookie; this mount-time check has
    // the last word in case the session vanished in between.
    let Some(user) = state.store().current_user().await else {
        return Ok(Redirect::to("/login").into_response());
    };

    Ok(Html(pages::dashboard_page(&user, chrono::Local::now())).into_response())
}

/// Handler for logout.
pub async fn logout(State(state): State<AppState>) -> Response {
    if let Err(error) = state.auth().logout().await {
        tracing::error!(%error, "failed to clear session");
    }

    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}

/// Deliberately fails while rendering, to exercise the fallback page.
pub async fn error_test() -> Result<Html<String>, DashboardError> {
    Err(DashboardError::Render(
        "This is a test error triggered by the error test link".to_string(),
    ))
}

/// Liveness probe.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "atrium" }))
}
