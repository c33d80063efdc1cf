use super::FieldChecker;
use crate::{Design, Result as ValidationResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

/// Validate a raw JSON value against the `Design` shape
#[track_caller]
pub fn validate_design(raw: &Value) -> ValidationResult<Design> {
    let location = ErrorLocation::from(Location::caller());
    let mut checker = FieldChecker::new(raw);

    let title = checker.required_string("title", true);
    let description = checker.optional_string("description");
    let image_url = checker.required_url("image_url");
    let marketplace_url = checker.optional_url("marketplace_url");
    let tags = checker.string_list("tags");
    let colors = checker.string_list("colors");
    let price = checker.optional_non_negative_number("price");

    match (title, image_url) {
        (Some(title), Some(image_url)) if checker.is_clean() => Ok(Design {
            title,
            description,
            image_url,
            marketplace_url,
            tags,
            colors,
            price,
        }),
        _ => Err(checker.into_error(Design::ENTITY, location)),
    }
}
