use std::result::Result as StdResult;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raised when a payload does not match a record shape.
///
/// Lists every violated field, not only the first one encountered.
#[derive(Error, Debug)]
#[error("{entity} validation failed: {} {location}", summarize(.violations))]
pub struct ValidationError {
    pub entity: &'static str,
    pub violations: Vec<FieldViolation>,
    pub location: ErrorLocation,
}

impl ValidationError {
    /// Names of the violated fields, in the order they were checked
    pub fn fields(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.field.clone()).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = StdResult<T, ValidationError>;
