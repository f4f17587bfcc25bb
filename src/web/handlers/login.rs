//! Console login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::middleware::web_auth::{LOGIN_PATH, clear_session_cookie, session_cookie};

/// Template for the login page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    site_name: String,
    has_error: bool,
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub passphrase: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /admin/login`
pub async fn login_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    LoginTemplate {
        site_name: state.site_name.to_string(),
        has_error: false,
        error: String::new(),
    }
}

/// Checks the passphrase and starts a console session.
///
/// # Endpoint
///
/// `POST /admin/login`
///
/// On success sets the `admin_session` cookie and redirects to `/admin`.
/// A wrong passphrase re-renders the form with `401 Unauthorized`.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    match state.auth_service.login(&form.passphrase) {
        Ok(session) => {
            let max_age = (session.expires_at - Utc::now()).num_seconds().max(0);
            Ok((
                [(SET_COOKIE, session_cookie(&session.token, max_age))],
                Redirect::to("/admin"),
            )
                .into_response())
        }
        Err(AppError::Unauthorized { .. }) => Ok((
            StatusCode::UNAUTHORIZED,
            LoginTemplate {
                site_name: state.site_name.to_string(),
                has_error: true,
                error: "Invalid passphrase".to_string(),
            },
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Ends the console session.
///
/// # Endpoint
///
/// `POST /admin/logout`
///
/// Tokens are stateless, so this only clears the cookie.
pub async fn logout_handler() -> impl IntoResponse {
    (
        [(SET_COOKIE, clear_session_cookie())],
        Redirect::to(LOGIN_PATH),
    )
}
