use crate::models::ErrorResponse;
use crate::render::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use journal_types::errors::ValidationError;
use thiserror::Error;

/// Central error type for the journal service
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal server error")]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => {
                tracing::warn!(error = %err, "Rejected invalid request");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "VALIDATION_ERROR",
                        message: err.to_string(),
                        detail: err.details(),
                    },
                )
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "INTERNAL_ERROR",
                        message: "Internal server error".to_string(),
                        detail: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_types::errors::{FieldError, FieldErrorKind};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_unprocessable() {
        let err: AppError = ValidationError::new(vec![
            FieldError::body_field("title", FieldErrorKind::Missing),
            FieldError::body_field("body", FieldErrorKind::NotAString),
        ])
        .into();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["detail"][0]["loc"], serde_json::json!(["body", "title"]));
        assert_eq!(json["detail"][0]["type"], "missing");
        assert_eq!(json["detail"][1]["type"], "string_type");
    }

    #[tokio::test]
    async fn test_render_failure_maps_to_server_error() {
        let err: AppError = RenderError::from(minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "index.html",
        ))
        .into();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "INTERNAL_ERROR");
        assert!(json.get("detail").is_none());
    }
}
