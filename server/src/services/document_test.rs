use super::*;

// =============================================================
// Collection allow-listing
// =============================================================

#[test]
fn users_and_bikes_are_known_collections() {
    assert!(is_known_collection("users"));
    assert!(is_known_collection("bikes"));
}

#[test]
fn other_collections_are_rejected() {
    assert!(!is_known_collection("boards"));
    assert!(!is_known_collection(""));
    assert!(!is_known_collection("Users"));
}

#[test]
fn key_field_per_collection() {
    assert_eq!(key_field("users"), Some("email"));
    assert_eq!(key_field("bikes"), Some("registrationId"));
    assert_eq!(key_field("sessions"), None);
}

// =============================================================
// Document key validation
// =============================================================

#[test]
fn validate_document_key_accepts_matching_key() {
    let doc = serde_json::json!({ "email": "ada@x.com", "name": "Ada" });
    assert!(validate_document_key("users", "ada@x.com", &doc).is_ok());
}

#[test]
fn validate_document_key_rejects_mismatch() {
    let doc = serde_json::json!({ "email": "someone@x.com" });
    assert!(matches!(
        validate_document_key("users", "ada@x.com", &doc),
        Err(DocumentError::KeyMismatch(_))
    ));
}

#[test]
fn validate_document_key_rejects_missing_field() {
    let doc = serde_json::json!({ "name": "Ada" });
    assert!(matches!(
        validate_document_key("users", "ada@x.com", &doc),
        Err(DocumentError::KeyMismatch(_))
    ));
}

#[test]
fn validate_document_key_rejects_non_object() {
    let doc = serde_json::json!("just a string");
    assert!(matches!(
        validate_document_key("bikes", "B1", &doc),
        Err(DocumentError::NotAnObject)
    ));
}

#[test]
fn validate_document_key_uses_camel_case_bike_field() {
    let doc = serde_json::json!({ "registrationId": "B1", "model": "Road" });
    assert!(validate_document_key("bikes", "B1", &doc).is_ok());
}
