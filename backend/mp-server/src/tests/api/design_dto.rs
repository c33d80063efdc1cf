use crate::DesignDto;

use mp_db::Document;

use chrono::Utc;
use serde_json::{Value, json};

fn document(fields: Value) -> Document {
    let Value::Object(fields) = fields else {
        panic!("expected an object");
    };
    let now = Utc::now();
    Document {
        id: "0b6c3f4e-8f0e-4d55-9a52-3f5f3c1d2e11".into(),
        fields,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_valid_document_serializes_with_string_id_and_extra_fields() {
    let dto = DesignDto::from_document(document(json!({
        "title": "Wave",
        "image_url": "https://cdn.example.com/wave.png",
        "tags": ["ocean"],
        "featured": true
    })))
    .unwrap();

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["_id"], "0b6c3f4e-8f0e-4d55-9a52-3f5f3c1d2e11");
    assert_eq!(json["title"], "Wave");
    assert_eq!(json["image_url"], "https://cdn.example.com/wave.png");
    assert_eq!(json["tags"], json!(["ocean"]));
    assert!(json.get("colors").is_none());
    assert_eq!(json["featured"], true);
    assert!(json["created_at"].is_string());
}

#[test]
fn test_invalid_document_is_skipped() {
    let dto = DesignDto::from_document(document(json!({
        "description": "no title, no image"
    })));

    assert!(dto.is_none());
}

#[test]
fn test_stored_values_are_not_normalized() {
    let dto = DesignDto::from_document(document(json!({
        "title": "Wave",
        "image_url": "HTTPS://CDN.Example.com",
        "price": 20
    })))
    .unwrap();

    assert_eq!(dto.fields["image_url"], "HTTPS://CDN.Example.com");
    assert_eq!(dto.fields["price"], json!(20));
    assert!(!dto.fields.contains_key("description"));
    assert!(!dto.fields.contains_key("_id"));
    assert!(dto.fields.contains_key("created_at"));
}
