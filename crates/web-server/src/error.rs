use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level message for every rejected `/rates` request.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data, more information in details";

#[derive(Error, Debug)]
pub enum AppError {
    /// One or more request values were well-formed but unusable.
    #[error("Invalid input: {0:?}")]
    InvalidInput(Vec<String>),
    /// The query string could not be extracted (e.g. a missing parameter).
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

/// The JSON envelope every error response is wrapped in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub details: Vec<String>,
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::InvalidInput(details) => {
                (StatusCode::NOT_FOUND, INVALID_INPUT_MESSAGE.to_string(), details)
            }
            AppError::InvalidQuery(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid query parameters".to_string(),
                vec![reason],
            ),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {db_err}"),
                    Vec::new(),
                )
            }
            AppError::Unexpected(err) => {
                tracing::error!(error = ?err, "Unexpected error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Unexpected error: {err}"),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorBody {
            status_code: status.as_u16(),
            message,
            details,
        });
        (status, body).into_response()
    }
}
