use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::{HookError, InteractError, PoolError};
use serde_json::json;
use shared::api::ValidationError;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. Validation and not-found carry enough
/// detail for the caller; the rest collapses to a generic 500 with the detail
/// kept in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("user not found")]
    UserNotFound,
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("{0}")]
    Internal(String),
}

impl From<InteractError> for ApiError {
    fn from(err: InteractError) -> Self {
        ApiError::Internal(format!("database interact: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            ApiError::Validation(inner) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "validation failed", "errors": inner.error_messages }),
            ),
            ApiError::UserNotFound => {
                (StatusCode::NOT_FOUND, json!({ "error": "User not found" }))
            },
            err => {
                // Internal detail goes to the log, never to the caller
                error!("error handling request: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            },
        };
        (code, Json(body)).into_response()
    }
}

// Lets pool hooks bail out with `?` on ApiError
impl From<ApiError> for HookError {
    fn from(err: ApiError) -> Self {
        Self::Message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let error = ValidationError { error_messages: vec!["username is required".into()] };
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failures_map_to_500() {
        let response = ApiError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
