use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid input: {0}")]
    Validation(String),
}

impl AppError {
    /// Map a failed insert onto the duplicate-email error when the store's
    /// uniqueness constraint fired. The existence check in the register
    /// handler is not atomic with the insert; the constraint is what closes
    /// the race between two concurrent registrations.
    pub fn from_insert_error(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.code().as_deref() == Some("23505") {
                return AppError::DuplicateEmail;
            }
        }
        AppError::Database(err)
    }
}

/// Convert AppError into an HTTP response with a JSON error body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::DuplicateEmail => {
                (StatusCode::BAD_REQUEST, "email already registered".to_string())
            }
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user not found".to_string()),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "invalid credentials".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
