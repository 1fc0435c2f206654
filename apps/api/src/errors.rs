use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;

/// Message returned for every 500. Details are logged, never sent to the caller.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Auth provider error: {0}")]
    Auth(#[from] AuthError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a provider failure for a credential flow (sign-up, sign-in, sign-out).
    /// Provider rejections become client errors carrying the provider's message.
    pub fn from_credential_flow(err: AuthError) -> Self {
        match err {
            AuthError::Rejected { message, .. } => AppError::Validation(message),
            AuthError::MissingToken | AuthError::InvalidToken => AppError::Unauthorized,
            other => AppError::Auth(other),
        }
    }

    /// Maps a provider failure while resolving the caller's session.
    pub fn from_session_lookup(err: AuthError) -> Self {
        match err {
            AuthError::Rejected { .. } | AuthError::MissingToken | AuthError::InvalidToken => {
                AppError::Unauthorized
            }
            other => AppError::Auth(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                internal()
            }
            AppError::Auth(e) => {
                tracing::error!("Auth provider error: {e}");
                internal()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                internal()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}
