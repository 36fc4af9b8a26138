use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": ..., "message": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, message: Option<String>) -> Self {
        Self { status, error: error.to_string(), message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "message": self.message}))).into_response()
    }
}

/// Failure of a product handler. Absence is a bare 404 without a body.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Json(JsonApiError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Json(e) => e.into_response(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(msg) => {
                error!(err = %msg, "store failure");
                ApiError::Json(JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Store Failure",
                    Some("the product store is unavailable".to_string()),
                ))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_bare_404() {
        let resp = ApiError::from(ServiceError::not_found("product")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn db_error_maps_to_500() {
        let resp = ApiError::from(ServiceError::Db("connection reset".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn db_error_detail_stays_out_of_body() {
        match ApiError::from(ServiceError::Db("relation \"product\" does not exist".into())) {
            ApiError::Json(e) => {
                assert_eq!(e.error, "Store Failure");
                let message = e.message.unwrap_or_default();
                assert!(!message.contains("relation"));
                assert!(!message.is_empty());
            }
            ApiError::NotFound => panic!("store failure mapped to 404"),
        }
    }

    #[test]
    fn startup_error_messages() {
        let e = StartupError::InvalidConfig("database.url is empty".into());
        assert_eq!(e.to_string(), "invalid configuration: database.url is empty");
    }
}
