//! Journal entry types
//!
//! An entry is a title/body pair plus the moment the service accepted it.
//! Entries have no identity of their own; they are referenced only by their
//! position in the journal.

use crate::errors::{FieldError, FieldErrorKind, ValidationError};
use chrono::{Local, NaiveDateTime, SubsecRound, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Wire format for timestamps: ISO-8601, no offset, microsecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Wire format for timestamps on a whole second
pub const TIMESTAMP_FORMAT_WHOLE_SECOND: &str = "%Y-%m-%dT%H:%M:%S";

/// Server-assigned creation time of an entry
///
/// Local wall-clock time without timezone normalization, kept to
/// microsecond precision. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Current local server time
    pub fn now() -> Self {
        Self(Local::now().naive_local().trunc_subsecs(6))
    }

    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self(naive)
    }

    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// Parse from the ISO-8601 form produced by `Display`
    ///
    /// Accepts any fractional-second precision, including none.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The fraction is omitted entirely on a whole second
        let format = if self.0.nanosecond() == 0 {
            TIMESTAMP_FORMAT_WHOLE_SECOND
        } else {
            TIMESTAMP_FORMAT
        };
        write!(f, "{}", self.0.format(format))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(de::Error::custom)
    }
}

/// Validated input for a new entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub body: String,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Validate a decoded JSON payload
    ///
    /// The payload must be an object whose `title` and `body` are both
    /// strings. Every offending field is reported. Extra keys are ignored.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let Some(object) = payload.as_object() else {
            return Err(ValidationError::single(FieldError::body(
                FieldErrorKind::NotAnObject,
            )));
        };

        let mut errors = Vec::new();
        let title = required_string(object.get("title"), "title", &mut errors);
        let body = required_string(object.get("body"), "body", &mut errors);

        match (title, body) {
            (Some(title), Some(body)) if errors.is_empty() => Ok(Self { title, body }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

fn required_string(value: Option<&Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::body_field(field, FieldErrorKind::NotAString));
            None
        }
        None => {
            errors.push(FieldError::body_field(field, FieldErrorKind::Missing));
            None
        }
    }
}

/// A stored journal entry
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub body: String,
    pub created: Timestamp,
}

impl Entry {
    pub fn new(input: NewEntry, created: Timestamp) -> Self {
        Self {
            title: input.title,
            body: input.body,
            created,
        }
    }
}
