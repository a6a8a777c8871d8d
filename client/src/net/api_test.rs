use super::*;

#[test]
fn collection_endpoint_formats_expected_path() {
    assert_eq!(collection_endpoint("bikes"), "/api/collections/bikes");
}

#[test]
fn document_endpoint_formats_expected_path() {
    assert_eq!(document_endpoint("users", "ada@x.com"), "/api/collections/users/ada@x.com");
}

#[test]
fn decode_users_skips_malformed_documents() {
    let docs = vec![
        serde_json::json!({
            "email": "ada@x.com",
            "name": "Ada",
            "age": 36,
            "isManager": true,
            "isDeleted": false,
        }),
        serde_json::json!({ "email": "broken@x.com" }),
        serde_json::json!(42),
    ];
    let (users, skipped) = decode_users(&docs);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "ada@x.com");
    assert_eq!(skipped, 2);
}

#[test]
fn decode_bikes_skips_out_of_range_ratings() {
    let docs = vec![
        serde_json::json!({
            "registrationId": "B1",
            "color": "Red",
            "model": "Road",
            "location": "Lot A",
            "rating": 4.0,
            "isDeleted": false,
        }),
        serde_json::json!({
            "registrationId": "B2",
            "color": "Blue",
            "model": "Trail",
            "location": "Lot B",
            "rating": 9.0,
            "isDeleted": false,
        }),
    ];
    let (bikes, skipped) = decode_bikes(&docs);
    assert_eq!(bikes.len(), 1);
    assert_eq!(bikes[0].registration_id, "B1");
    assert_eq!(skipped, 1);
}

#[test]
fn decode_empty_collections() {
    let (users, skipped) = decode_users(&[]);
    assert!(users.is_empty());
    assert_eq!(skipped, 0);
    let (bikes, skipped) = decode_bikes(&[]);
    assert!(bikes.is_empty());
    assert_eq!(skipped, 0);
}

#[test]
fn api_error_messages_render_for_display() {
    assert_eq!(ApiError::Message("email not found".to_owned()).to_string(), "email not found");
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
}
