use super::*;

#[test]
fn unknown_collection_maps_to_not_found() {
    let err = DocumentError::UnknownCollection("boards".to_owned());
    assert_eq!(document_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn missing_document_maps_to_not_found() {
    let err = DocumentError::NotFound { collection: "bikes".to_owned(), key: "B1".to_owned() };
    assert_eq!(document_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn key_mismatch_maps_to_bad_request() {
    let err = DocumentError::KeyMismatch("B1".to_owned());
    assert_eq!(document_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn non_object_body_maps_to_bad_request() {
    assert_eq!(document_error_to_status(&DocumentError::NotAnObject), StatusCode::BAD_REQUEST);
}
