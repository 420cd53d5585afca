use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChalklineError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Validation error: {0} is required")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChalklineError>;

/// HTTP-facing error returned by Axum handlers.
/// Every variant maps to a JSON body of the form `{ "error": "..." }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ChalklineError> for ApiError {
    fn from(err: ChalklineError) -> Self {
        match err {
            ChalklineError::MissingField(field) => {
                ApiError::BadRequest(format!("{} is required", field))
            }
            other => ApiError::Internal(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = ApiError::NotFound("no such play".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let api: ApiError = ChalklineError::MissingField("title").into();
        let resp = api.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
