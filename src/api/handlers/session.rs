//! Handler for the API login endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::session::{LoginRequest, SessionResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges the admin passphrase for a session token.
///
/// # Endpoint
///
/// `POST /api/session`
///
/// # Response
///
/// ```json
/// { "token": "1767225600.Zm9v.3f1c...", "expires_at": "2026-01-01T00:00:00Z" }
/// ```
///
/// # Errors
///
/// Returns 400 if the passphrase is missing.
/// Returns 401 if the passphrase is wrong.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    payload.validate()?;

    let session = state.auth_service.login(&payload.passphrase)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: session.token,
            expires_at: session.expires_at,
        }),
    ))
}
