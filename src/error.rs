//! Error handling

use axum::{
    extract::rejection::PathRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Resource errors
    #[error("not found: {0}")]
    NotFound(String),

    // Resource exists but cannot be operated on (e.g. retired engine)
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    // Validation errors
    #[error("validation error: {0}")]
    ValidationError(String),

    // Generic errors
    #[error("internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) | AppError::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            AppError::NotFound(msg) => msg.as_str(),
            AppError::Unprocessable(msg) => msg.as_str(),
            AppError::ValidationError(msg) => {
                tracing::debug!("Request validation failed: {}", msg);
                msg.as_str()
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error"
            }
        };

        let body = Json(json!({
            "detail": detail,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        AppError::ValidationError(err.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InternalError(format!("Invalid prediction output: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_detail() {
        let (status, body) = body_json(AppError::NotFound("Engine not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Engine not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn unprocessable_maps_to_422() {
        let (status, body) = body_json(AppError::Unprocessable("Engine is retired".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Engine is retired");
    }

    #[tokio::test]
    async fn internal_error_hides_message() {
        let (status, body) = body_json(AppError::InternalError("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal server error");
    }
}
