use crate::validate_design;

use googletest::matchers::is_empty as empty;
use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_minimal_design_when_validated_then_lists_default_to_empty() {
    // Given
    let raw = json!({
        "title": "Retro Sunset",
        "image_url": "https://cdn.example.com/retro.png"
    });

    // When
    let design = validate_design(&raw).unwrap();

    // Then
    assert_that!(design.title, eq("Retro Sunset"));
    assert_that!(design.image_url.as_str(), eq("https://cdn.example.com/retro.png"));
    assert_that!(design.tags, empty());
    assert_that!(design.colors, empty());
    assert_that!(design.description, none());
    assert_that!(design.marketplace_url, none());
    assert_that!(design.price, none());
}

#[test]
fn given_full_design_when_validated_then_all_fields_kept_in_order() {
    let raw = json!({
        "title": "Cat Astronaut",
        "description": "A cat in space",
        "image_url": "https://cdn.example.com/cat.png",
        "marketplace_url": "https://www.amazon.com/dp/B000000",
        "tags": ["cat", "space", "funny"],
        "colors": ["#000000", "navy"],
        "price": 19.99
    });

    let design = validate_design(&raw).unwrap();

    assert_that!(design.description, some(eq("A cat in space")));
    assert_that!(
        design.marketplace_url.map(|u| u.to_string()),
        some(eq("https://www.amazon.com/dp/B000000"))
    );
    assert_that!(design.tags, elements_are![eq("cat"), eq("space"), eq("funny")]);
    assert_that!(design.colors, elements_are![eq("#000000"), eq("navy")]);
    assert_that!(design.price, some(eq(19.99)));
}

#[test]
fn given_zero_price_when_validated_then_ok() {
    let raw = json!({
        "title": "Free Sample",
        "image_url": "http://example.com/free.png",
        "price": 0
    });

    assert_that!(validate_design(&raw), ok(anything()));
}

#[test]
fn given_negative_price_when_validated_then_price_violation() {
    let raw = json!({
        "title": "Bad Price",
        "image_url": "https://example.com/a.png",
        "price": -1.5
    });

    let err = validate_design(&raw).unwrap_err();

    assert_that!(err.fields(), elements_are![eq("price")]);
}

#[test]
fn given_relative_image_url_when_validated_then_image_url_violation() {
    let raw = json!({
        "title": "Relative",
        "image_url": "/images/a.png"
    });

    let err = validate_design(&raw).unwrap_err();

    assert_that!(err.fields(), elements_are![eq("image_url")]);
}

#[test]
fn given_non_http_scheme_when_validated_then_url_rejected() {
    let raw = json!({
        "title": "FTP",
        "image_url": "ftp://example.com/a.png",
        "marketplace_url": "mailto:shop@example.com"
    });

    let err = validate_design(&raw).unwrap_err();

    assert_that!(err.fields(), elements_are![eq("image_url"), eq("marketplace_url")]);
}

#[test]
fn given_null_marketplace_url_when_validated_then_treated_as_absent() {
    let raw = json!({
        "title": "Null Link",
        "image_url": "https://example.com/a.png",
        "marketplace_url": null,
        "description": null
    });

    let design = validate_design(&raw).unwrap();

    assert_that!(design.marketplace_url, none());
    assert_that!(design.description, none());
}

#[test]
fn given_many_problems_when_validated_then_every_field_is_reported() {
    let raw = json!({
        "title": "",
        "marketplace_url": "not a url",
        "tags": "summer",
        "colors": ["red", 7],
        "price": "cheap"
    });

    let err = validate_design(&raw).unwrap_err();

    assert_that!(err.entity, eq("Design"));
    assert_that!(
        err.fields(),
        elements_are![
            eq("title"),
            eq("image_url"),
            eq("marketplace_url"),
            eq("tags"),
            eq("colors[1]"),
            eq("price")
        ]
    );
}

#[test]
fn given_non_object_when_validated_then_body_violation_only() {
    let err = validate_design(&json!(["not", "an", "object"])).unwrap_err();

    assert_that!(err.fields(), elements_are![eq("body")]);
}

#[test]
fn given_validation_error_when_displayed_then_mentions_fields() {
    let err = validate_design(&json!({"title": "No image"})).unwrap_err();

    let text = err.to_string();

    assert_that!(text, contains_substring("Design validation failed"));
    assert_that!(text, contains_substring("image_url: field required"));
}
