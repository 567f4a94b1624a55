//! The uniform error envelope.
//!
//! Every handler returns `Result<_, ApiError>`; the conversions below map
//! repository and auth failures onto `fiscora_shared::AppError`, whose
//! status and code decide the HTTP response. Bodies are always
//! `{"error": <code>, "message": <text>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use fiscora_db::RepoError;
use fiscora_shared::{AppError, JwtError};

/// Wrapper making `AppError` an Axum response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 5xx details go to the log, not the client.
        if self.0.status_code() >= 500 {
            error!(error = %self.0, "request failed");
        }

        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match &self.0 {
            AppError::Database(_) | AppError::Internal(_) => "An error occurred".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        let app = match &err {
            RepoError::NotFound { .. } => AppError::NotFound(err.to_string()),
            RepoError::TenantMismatch { .. } => AppError::Forbidden(err.to_string()),
            RepoError::Invalid { .. } => AppError::Validation(err.to_string()),
            RepoError::Database(inner) => AppError::Database(inner.to_string()),
        };
        Self(app)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        let app = match err {
            JwtError::Expired => AppError::Unauthorized("Token has expired".to_string()),
            JwtError::Invalid => AppError::Unauthorized("Invalid token".to_string()),
            JwtError::Encoding(e) => AppError::Internal(e),
        };
        Self(app)
    }
}
