use super::*;

fn doc(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "name": "Ada Lovelace",
        "age": 36,
        "isManager": true,
        "isDeleted": false,
    })
}

#[test]
fn from_document_decodes_camel_case_fields() {
    let user = User::from_document(&doc("ada@example.com")).expect("valid doc");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.age, 36);
    assert!(user.is_manager);
    assert!(!user.is_deleted);
}

#[test]
fn from_document_defaults_missing_is_deleted_to_false() {
    let mut value = doc("ada@example.com");
    value.as_object_mut().expect("object").remove("isDeleted");
    let user = User::from_document(&value).expect("valid doc");
    assert!(!user.is_deleted);
}

#[test]
fn from_document_rejects_missing_name() {
    let mut value = doc("ada@example.com");
    value.as_object_mut().expect("object").remove("name");
    assert!(matches!(User::from_document(&value), Err(DocumentError::Malformed(_))));
}

#[test]
fn from_document_rejects_empty_email_key() {
    assert_eq!(User::from_document(&doc("   ")), Err(DocumentError::EmptyKey));
}

#[test]
fn from_document_rejects_non_object() {
    let value = serde_json::json!("not a user");
    assert!(matches!(User::from_document(&value), Err(DocumentError::Malformed(_))));
}

#[test]
fn role_label_reflects_manager_flag() {
    let mut user = User::from_document(&doc("ada@example.com")).expect("valid doc");
    assert_eq!(user.role_label(), "Manager");
    user.is_manager = false;
    assert_eq!(user.role_label(), "User");
}

#[test]
fn matches_searches_name_and_email_case_insensitively() {
    let user = User::from_document(&doc("Ada@Example.com")).expect("valid doc");
    assert!(user.matches("lovelace"));
    assert!(user.matches("ada@"));
    assert!(!user.matches("babbage"));
}

#[test]
fn serializes_back_to_camel_case() {
    let user = User::from_document(&doc("ada@example.com")).expect("valid doc");
    let value = serde_json::to_value(&user).expect("serialize");
    assert!(value.get("isManager").is_some());
    assert!(value.get("isDeleted").is_some());
    assert!(value.get("is_manager").is_none());
}
