use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure modes shared by every route handler.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is missing a required field. 422 with `{ error }` body.
    #[error("{0}")]
    Validation(String),

    /// No row matched the requested id. 404 with `{ error }` body.
    #[error("{0}")]
    NotFound(String),

    /// Not-found variant whose 404 body is a bare JSON string instead of an
    /// `{ error }` object. The two delete endpoints have always answered
    /// this way and clients depend on it.
    #[error("{0}")]
    NotFoundBare(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFoundBare(message) => {
                (StatusCode::NOT_FOUND, Json(message)).into_response()
            }
            ApiError::Database(err) => {
                error!("error: database failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
