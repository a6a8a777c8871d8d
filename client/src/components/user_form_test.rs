use super::*;

#[test]
fn valid_fields_pass_through_normalized() {
    let (name, email, age) = validate_user_form(" Ada ", " Ada@Example.COM ", "36").expect("valid");
    assert_eq!(name, "Ada");
    assert_eq!(email, "ada@example.com");
    assert_eq!(age, 36);
}

#[test]
fn empty_name_is_rejected() {
    assert_eq!(validate_user_form("  ", "a@x.com", "30"), Err("Name is required."));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(validate_user_form("Ada", "not-an-email", "30"), Err("Enter a valid email address."));
    assert_eq!(validate_user_form("Ada", "@x.com", "30"), Err("Enter a valid email address."));
    assert_eq!(validate_user_form("Ada", "a@", "30"), Err("Enter a valid email address."));
}

#[test]
fn non_numeric_age_is_rejected() {
    assert_eq!(validate_user_form("Ada", "a@x.com", "old"), Err("Enter a valid age."));
    assert_eq!(validate_user_form("Ada", "a@x.com", ""), Err("Enter a valid age."));
}

#[test]
fn out_of_range_age_is_rejected() {
    assert_eq!(validate_user_form("Ada", "a@x.com", "0"), Err("Enter a valid age."));
    assert_eq!(validate_user_form("Ada", "a@x.com", "121"), Err("Enter a valid age."));
}
