use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a request handler can report.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or unknown session cookie.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Malformed or out-of-bounds request body or params.
    #[error("validation error: {0}")]
    Validation(String),

    /// Login with an unknown email or a wrong password.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Resource absent or owned by someone else.
    #[error("{0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthenticated(msg) => {
                tracing::warn!(%msg, "unauthenticated request");
                (StatusCode::UNAUTHORIZED, msg)
            }
            AppError::Validation(msg) => {
                tracing::debug!(%msg, "validation failed");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::InvalidCredentials(msg) => {
                tracing::warn!(%msg, "login rejected");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::debug!(%msg, "not found");
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Conflict(msg) => {
                tracing::warn!(%msg, "conflict");
                (StatusCode::CONFLICT, msg)
            }
            AppError::Database(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::warn!(error = %e, "unique constraint violated");
                (StatusCode::CONFLICT, "Resource already exists".to_string())
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(%msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        let cases = [
            (AppError::Unauthenticated("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidCredentials("x".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::Database(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
