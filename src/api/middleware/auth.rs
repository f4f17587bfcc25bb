//! Bearer session authentication for the JSON API.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

type BearerRejection = <AuthBearer as FromRequestParts<AppState>>::Rejection;

/// Admits API requests carrying a valid session token.
///
/// Tokens come from `POST /api/session` or the `admin session issue` CLI
/// command and are sent as:
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The token is checked for signature and expiry only. There is no server-side
/// session list, so a token stays valid until it expires.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` when the header
/// is missing or not a Bearer credential, or when the token is malformed,
/// forged or expired. The `reason` detail says which.
pub async fn layer(
    State(st): State<AppState>,
    bearer: Result<AuthBearer, BearerRejection>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let AuthBearer(token) = bearer.map_err(|_| {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Authorization header is missing or invalid"}),
        )
    })?;

    st.auth_service.authenticate(&token)?;

    Ok(next.run(req).await)
}
