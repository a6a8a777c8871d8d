use super::*;

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn session_user_from_live_document() {
    let doc = serde_json::json!({
        "email": "ada@x.com",
        "name": "Ada",
        "age": 36,
        "isManager": true,
        "isDeleted": false,
    });
    let user = session_user_from_document(&doc).expect("live user");
    assert_eq!(user.email, "ada@x.com");
    assert_eq!(user.name, "Ada");
    assert!(user.is_manager);
}

#[test]
fn session_user_rejects_soft_deleted_document() {
    let doc = serde_json::json!({
        "email": "ada@x.com",
        "name": "Ada",
        "age": 36,
        "isManager": false,
        "isDeleted": true,
    });
    assert!(session_user_from_document(&doc).is_none());
}

#[test]
fn session_user_rejects_malformed_document() {
    let doc = serde_json::json!({ "email": "ada@x.com" });
    assert!(session_user_from_document(&doc).is_none());
}
