//! Session-cookie middleware for the dashboard.
//!
//! The presence of a recognizable session cookie matching the stored token
//! is the only access-control mechanism. Enforcement is a client-visible
//! redirect to the login page, consistent with the mock nature of the app.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "atrium_session";

/// Paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/login", "/forgot-password", "/healthz"];

/// Middleware redirecting any request without a live session to the login
/// page, carrying the original path in the `redirect` query parameter.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    let presented = request
        .headers()
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_session_cookie);

    if let Some(presented) = presented
        && state.auth().validate_token(&presented)
        && state.store().token().await.as_deref() == Some(presented.as_str())
    {
        return next.run(request).await;
    }

    let redirect_to = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Redirect::to(&format!(
        "/login?redirect={}",
        urlencoding::encode(redirect_to)
    ))
    .into_response()
}

/// Extract the session cookie value from a cookie header.
fn extract_session_cookie(cookies: &str) -> Option<String> {
    for cookie in cookies.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) {
            return Some(value.to_string());
        }
    }
    None
}

/// Set-Cookie value establishing the session cookie.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE_NAME, token
    )
}

/// Set-Cookie value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_session_cookie_among_others() {
        let cookies = format!("theme=dark; {}=tok123; lang=en", SESSION_COOKIE_NAME);
        assert_eq!(extract_session_cookie(&cookies).as_deref(), Some("tok123"));
    }

    #[test]
    fn missing_session_cookie_is_none() {
        assert!(extract_session_cookie("theme=dark; lang=en").is_none());
        assert!(extract_session_cookie("").is_none());
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
