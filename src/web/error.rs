//! HTML rendering of [`AppError`] for browser-facing pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: String,
    message: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Error returned by page handlers.
///
/// Renders `not_found.html` for [`AppError::NotFound`] and `error.html` for
/// everything else, with the status of the underlying error.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        if matches!(self.0, AppError::NotFound { .. }) {
            return (status, NotFoundTemplate {}).into_response();
        }

        let message = match self.0 {
            AppError::Internal { .. } => "Something went wrong. Please try again.".to_string(),
            other => other.to_string(),
        };

        (
            status,
            ErrorTemplate {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Error").to_string(),
                message,
            },
        )
            .into_response()
    }
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> impl IntoResponse {
    (axum::http::StatusCode::NOT_FOUND, NotFoundTemplate {})
}
