//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Every failure a handler can surface maps onto one of these variants;
/// the variant decides the HTTP status and the stable machine-readable code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or is missing.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to touch this record.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or out-of-range input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict with existing state (e.g., duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the stable error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::Conflict(_) => "conflict",
            Self::Database(_) => "database_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Unauthorized(String::new()), 401, "unauthorized")]
    #[case(AppError::Forbidden(String::new()), 403, "forbidden")]
    #[case(AppError::NotFound(String::new()), 404, "not_found")]
    #[case(AppError::Validation(String::new()), 400, "validation_error")]
    #[case(AppError::Conflict(String::new()), 409, "conflict")]
    #[case(AppError::Database(String::new()), 500, "database_error")]
    #[case(AppError::Internal(String::new()), 500, "internal_error")]
    fn status_and_code(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn display_includes_context() {
        let err = AppError::Forbidden("budget belongs to another tenant".into());
        assert_eq!(
            err.to_string(),
            "Access denied: budget belongs to another tenant"
        );
    }
}
