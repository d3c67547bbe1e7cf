use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use journal_types::entry::NewEntry;
use journal_types::errors::{FieldError, FieldErrorDetail, FieldErrorKind, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent: String,
}

impl HealthResponse {
    pub fn ok(agent: &str) -> Self {
        Self {
            status: "ok".to_string(),
            agent: agent.to_string(),
        }
    }
}

/// Error body: `{error, message, detail}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<FieldErrorDetail>,
}

/// Validated body of `POST /entries`
///
/// The body is decoded as JSON when the content type is absent or a JSON
/// media type, then checked field by field, so every failure is reported as
/// a validation error with its location rather than as a framework rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntryRequest(pub NewEntry);

impl<S> FromRequest<S> for CreateEntryRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_body = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ValidationError::single(FieldError::body(FieldErrorKind::InvalidJson(
                rejection.body_text(),
            )))
        })?;

        if bytes.is_empty() {
            return Err(ValidationError::single(FieldError::body(FieldErrorKind::Missing)).into());
        }
        if !json_body {
            return Err(
                ValidationError::single(FieldError::body(FieldErrorKind::NotAnObject)).into(),
            );
        }

        let payload: Value = serde_json::from_slice(&bytes).map_err(|e| {
            ValidationError::single(FieldError::body(FieldErrorKind::InvalidJson(e.to_string())))
        })?;

        Ok(Self(NewEntry::from_json(&payload)?))
    }
}

/// Absent content type or `application/json` / `application/*+json`
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(&headers(None)));
        assert!(is_json_content_type(&headers(Some("application/json"))));
        assert!(is_json_content_type(&headers(Some("Application/JSON; charset=utf-8"))));
        assert!(is_json_content_type(&headers(Some("application/merge-patch+json"))));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_content_type(&headers(Some("text/plain"))));
        assert!(!is_json_content_type(&headers(Some("application/x-www-form-urlencoded"))));
        assert!(!is_json_content_type(&headers(Some("json"))));
    }

    #[test]
    fn test_health_response() {
        assert_eq!(
            serde_json::to_value(HealthResponse::ok("a1")).unwrap(),
            serde_json::json!({"status": "ok", "agent": "a1"})
        );
    }
}
