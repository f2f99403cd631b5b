use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Single error contract for every route handler. Each variant maps to one
/// row of the HTTP response table; nothing propagates past a handler
/// unconverted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid data")]
    Validation(#[from] ValidationErrors),

    #[error("invalid request body: {0}")]
    BadBody(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("upstream catalog error: {0}")]
    Upstream(anyhow::Error),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadBody(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => {
                warn!(error = %self, "request rejected");
                json!({ "message": "Invalid data", "errors": errors })
            }
            ApiError::BadBody(detail) => {
                warn!(error = %self, "request rejected");
                json!({ "message": "Invalid data", "error": detail })
            }
            ApiError::InvalidId(detail) => {
                warn!(error = %self, "request rejected");
                json!({ "message": "Invalid identifier", "error": detail })
            }
            ApiError::NotFound(entity) => {
                json!({ "message": format!("{entity} not found") })
            }
            ApiError::Database(e) => {
                error!(error = %e, "database operation failed");
                json!({ "message": "Server error", "error": e.to_string() })
            }
            ApiError::Upstream(e) => {
                error!(error = %e, "catalog request failed");
                json!({ "message": "Server error", "error": e.to_string() })
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal failure");
                json!({ "message": "Server error", "error": e.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn field_errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("price", ValidationError::new("range"));
        errors
    }

    #[test]
    fn status_codes_follow_the_response_table() {
        assert_eq!(
            ApiError::Validation(field_errors()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadBody("missing field `name`".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidId("bad oid".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Product").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_body_enumerates_fields() {
        let response = ApiError::Validation(field_errors()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Invalid data");
        assert!(body["errors"]["price"].is_array());
    }

    #[tokio::test]
    async fn not_found_body_names_the_entity() {
        let response = ApiError::NotFound("Order").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Order not found");
    }

    #[tokio::test]
    async fn server_errors_carry_opaque_detail() {
        let response = ApiError::Upstream(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Server error");
        assert_eq!(body["error"], "connection refused");
    }
}
