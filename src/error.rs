use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            RegistryError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            RegistryError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            RegistryError::Database(e) => {
                error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, Json(ApiErrorBody { detail })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
