//! Request validation primitives shared by every aggregate.
//!
//! A failed validation carries one fixed top-level message plus the list of
//! offending fields, so callers can show all problems at once.

use std::fmt;

use models::errors::ModelError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Message of every validation failure raised for a request body.
pub const INVALID_BODY: &str = "Request body is not valid";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
    pub details: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(details: Vec<FieldError>) -> Self {
        Self { message: INVALID_BODY.to_string(), details }
    }

    /// Single-field failure.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError { field: field.into(), message: message.into() }])
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collects field errors; turns into `Err` only if something was pushed.
#[derive(Debug, Default)]
pub struct Validator {
    details: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.details.push(FieldError { field: field.into(), message: message.into() });
    }

    /// Record a row-level model check under `field`.
    pub fn check(&mut self, field: impl Into<String>, result: Result<(), ModelError>) {
        if let Err(e) = result {
            let message = match e {
                ModelError::Validation(m) => m,
                other => other.to_string(),
            };
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool { self.details.is_empty() }

    pub fn finish(self) -> Result<(), ValidationError> {
        self.finish_with(())
    }

    pub fn finish_with<T>(self, value: T) -> Result<T, ValidationError> {
        if self.details.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.details))
        }
    }
}

/// The body as a JSON object, or a validation failure on `body`.
pub fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| ValidationError::field("body", "must be a JSON object"))
}

/// Whether `key` is present with a non-null value.
pub fn has_value(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).is_some_and(|v| !v.is_null())
}
