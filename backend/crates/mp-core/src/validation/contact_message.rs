use super::FieldChecker;
use crate::{ContactMessage, Result as ValidationResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

/// Validate a raw JSON value against the `ContactMessage` shape.
///
/// `email` only has to be non-empty; no address format is enforced.
#[track_caller]
pub fn validate_contact_message(raw: &Value) -> ValidationResult<ContactMessage> {
    let location = ErrorLocation::from(Location::caller());
    let mut checker = FieldChecker::new(raw);

    let name = checker.required_string("name", false);
    let email = checker.required_string("email", true);
    let message = checker.required_string("message", false);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if checker.is_clean() => Ok(ContactMessage {
            name,
            email,
            message,
        }),
        _ => Err(checker.into_error(ContactMessage::ENTITY, location)),
    }
}
