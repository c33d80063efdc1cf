//! Schema validation for incoming and stored records
//!
//! Each validator walks every declared field and collects all violations
//! before failing, so callers can report the full list at once.

mod contact_message;
mod design;

pub use contact_message::validate_contact_message;
pub use design::validate_design;

use crate::{FieldViolation, ValidationError};

use error_location::ErrorLocation;
use serde_json::{Map, Value};
use url::Url;

/// Field name used when the payload itself is not a JSON object
pub const BODY_FIELD: &str = "body";

/// Reads typed fields out of a JSON object, recording a violation for each
/// field that is missing or malformed.
pub(crate) struct FieldChecker<'a> {
    object: Option<&'a Map<String, Value>>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldChecker<'a> {
    pub(crate) fn new(raw: &'a Value) -> Self {
        match raw.as_object() {
            Some(object) => Self {
                object: Some(object),
                violations: Vec::new(),
            },
            None => Self {
                object: None,
                violations: vec![FieldViolation::new(BODY_FIELD, "must be a JSON object")],
            },
        }
    }

    /// `None` when the payload is not an object or the key is absent.
    /// An explicit `null` is returned as `Some(Value::Null)`.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.and_then(|object| object.get(field))
    }

    fn violation(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    fn is_root_invalid(&self) -> bool {
        self.object.is_none()
    }

    pub(crate) fn required_string(&mut self, field: &str, non_empty: bool) -> Option<String> {
        if self.is_root_invalid() {
            return None;
        }
        match self.get(field) {
            None => {
                self.violation(field, "field required");
                None
            }
            Some(Value::String(s)) if non_empty && s.is_empty() => {
                self.violation(field, "must not be empty");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.violation(field, "must be a string");
                None
            }
        }
    }

    pub(crate) fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.violation(field, "must be a string");
                None
            }
        }
    }

    pub(crate) fn required_url(&mut self, field: &str) -> Option<Url> {
        let raw = self.required_string(field, true)?;
        self.parse_url(field, &raw)
    }

    pub(crate) fn optional_url(&mut self, field: &str) -> Option<Url> {
        let raw = self.optional_string(field)?;
        self.parse_url(field, &raw)
    }

    /// Accepts absolute `http`/`https` URLs that name a host
    fn parse_url(&mut self, field: &str, raw: &str) -> Option<Url> {
        match Url::parse(raw) {
            Ok(url)
                if matches!(url.scheme(), "http" | "https")
                    && url.host_str().is_some_and(|h| !h.is_empty()) =>
            {
                Some(url)
            }
            Ok(url) => {
                self.violation(
                    field,
                    format!(
                        "must be an absolute http(s) URL, got scheme '{}'",
                        url.scheme()
                    ),
                );
                None
            }
            Err(e) => {
                self.violation(field, format!("must be a valid absolute URL: {}", e));
                None
            }
        }
    }

    /// Absent means empty. Order is preserved.
    pub(crate) fn string_list(&mut self, field: &str) -> Vec<String> {
        match self.get(field) {
            None => Vec::new(),
            Some(Value::Array(items)) => {
                let mut strings = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => strings.push(s.clone()),
                        _ => self.violation(&format!("{}[{}]", field, index), "must be a string"),
                    }
                }
                strings
            }
            Some(_) => {
                self.violation(field, "must be a list of strings");
                Vec::new()
            }
        }
    }

    pub(crate) fn optional_non_negative_number(&mut self, field: &str) -> Option<f64> {
        match self.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) if value.is_finite() && value >= 0.0 => Some(value),
                Some(_) => {
                    self.violation(field, "must be greater than or equal to 0");
                    None
                }
                None => {
                    self.violation(field, "must be a number");
                    None
                }
            },
            Some(_) => {
                self.violation(field, "must be a number");
                None
            }
        }
    }

    pub(crate) fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn into_error(self, entity: &'static str, location: ErrorLocation) -> ValidationError {
        ValidationError {
            entity,
            violations: self.violations,
            location,
        }
    }
}
