use super::*;

#[test]
fn complete_credentials_pass() {
    assert_eq!(validate_credentials_form("ada@x.com", "secret"), None);
}

#[test]
fn empty_email_is_rejected() {
    assert_eq!(validate_credentials_form("   ", "secret"), Some("Enter both email and password."));
}

#[test]
fn empty_password_is_rejected() {
    assert_eq!(validate_credentials_form("ada@x.com", ""), Some("Enter both email and password."));
}
