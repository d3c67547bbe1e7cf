//! Error types for journal input validation
//!
//! Validation is the only failure a caller can trigger, so the taxonomy is a
//! single error carrying one `FieldError` per offending location.

use serde::Serialize;
use thiserror::Error;

/// What went wrong at a single location in the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Required field absent
    Missing,
    /// Field present but not a JSON string
    NotAString,
    /// Payload is valid JSON but not an object
    NotAnObject,
    /// Payload could not be read as JSON at all
    InvalidJson(String),
}

impl FieldErrorKind {
    /// Stable machine-readable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "missing",
            FieldErrorKind::NotAString => "string_type",
            FieldErrorKind::NotAnObject => "object_type",
            FieldErrorKind::InvalidJson(_) => "json_invalid",
        }
    }

    /// Human-readable message for this kind
    pub fn message(&self) -> String {
        match self {
            FieldErrorKind::Missing => "Field required".to_string(),
            FieldErrorKind::NotAString => "Input should be a valid string".to_string(),
            FieldErrorKind::NotAnObject => "Input should be a valid object".to_string(),
            FieldErrorKind::InvalidJson(reason) => format!("JSON decode error: {}", reason),
        }
    }
}

/// A validation failure at one location of the request
///
/// `loc` is the path to the offending value, e.g. `["body", "title"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Error on a named field of the request body
    pub fn body_field(field: &str, kind: FieldErrorKind) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            kind,
        }
    }

    /// Error on the request body as a whole
    pub fn body(kind: FieldErrorKind) -> Self {
        Self {
            loc: vec!["body".to_string()],
            kind,
        }
    }

    /// Wire shape of this error: `{loc, msg, type}`
    pub fn detail(&self) -> FieldErrorDetail {
        FieldErrorDetail {
            loc: self.loc.clone(),
            msg: self.kind.message(),
            kind: self.kind.code(),
        }
    }
}

/// Serialized form of a `FieldError`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Request validation failure
///
/// Invariant: `errors` is never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty(), "ValidationError needs at least one field error");
        Self { errors }
    }

    pub fn single(error: FieldError) -> Self {
        Self { errors: vec![error] }
    }

    /// Wire shape of every field error, in order
    pub fn details(&self) -> Vec<FieldErrorDetail> {
        self.errors.iter().map(FieldError::detail).collect()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.loc.join("."), e.kind.message()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::single(FieldError::body_field("body", FieldErrorKind::Missing));
        assert_eq!(err.to_string(), "Validation failed: body.body (Field required)");
    }

    #[test]
    fn test_validation_error_lists_every_field() {
        let err = ValidationError::new(vec![
            FieldError::body_field("title", FieldErrorKind::NotAString),
            FieldError::body_field("body", FieldErrorKind::Missing),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("body.title"));
        assert!(msg.contains("body.body"));
    }

    #[test]
    fn test_detail_serialization() {
        let detail = FieldError::body_field("title", FieldErrorKind::Missing).detail();
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"loc": ["body", "title"], "msg": "Field required", "type": "missing"})
        );
    }

    #[test]
    fn test_invalid_json_message_carries_reason() {
        let kind = FieldErrorKind::InvalidJson("expected value".to_string());
        assert_eq!(kind.code(), "json_invalid");
        assert!(kind.message().contains("expected value"));
    }
}
