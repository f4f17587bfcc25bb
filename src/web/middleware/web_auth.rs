//! Cookie-based authentication middleware for the admin console.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "admin_session";

/// Login page that unauthenticated console requests are sent to.
pub const LOGIN_PATH: &str = "/admin/login";

/// Extracts the session token from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and ignoring the rest.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

/// `Set-Cookie` value storing `token` for `max_age_seconds`.
pub fn session_cookie(token: &str, max_age_seconds: i64) -> HeaderValue {
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}"
    );
    // Tokens are ASCII digits, base64url and hex.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| clear_session_cookie())
}

/// `Set-Cookie` value removing the session cookie.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("admin_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Authenticates console requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: admin_session=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `admin_session` cookie from request
/// 2. Verify it via [`crate::application::services::auth_service::AuthService`]
/// 3. On success, continue to handler
/// 4. On failure or missing cookie, redirect to `/admin/login`
///
/// # Differences from API Auth
///
/// Unlike the API auth middleware which returns `401 Unauthorized`,
/// this middleware redirects to the login page for a better user experience
/// in a browser context.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    match session_token(req.headers()) {
        Some(token) if st.auth_service.authenticate(&token).is_ok() => Ok(next.run(req).await),
        _ => Err(Redirect::to(LOGIN_PATH)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; admin_session=abc.def.123; lang=en"),
        );

        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.123"));
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        let mut headers = HeaderMap::new();
        assert!(session_token(&headers).is_none());

        headers.insert(COOKIE, HeaderValue::from_static("admin_session="));
        assert!(session_token(&headers).is_none());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("t.n.s", 60);
        let cookie = cookie.to_str().unwrap();

        assert!(cookie.starts_with("admin_session=t.n.s;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=60"));
    }
}
