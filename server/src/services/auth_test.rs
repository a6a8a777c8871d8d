use super::*;

// =============================================================
// normalize_email
// =============================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Ada@Example.COM "), Some("ada@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("ada.example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_parts() {
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("ada@"), None);
    assert_eq!(normalize_email(""), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("a@b@c.com"), None);
}

// =============================================================
// Password hashing
// =============================================================

#[test]
fn hash_password_is_deterministic_per_salt() {
    assert_eq!(hash_password("salt", "secret"), hash_password("salt", "secret"));
}

#[test]
fn hash_password_differs_across_salts() {
    assert_ne!(hash_password("salt-a", "secret"), hash_password("salt-b", "secret"));
}

#[test]
fn hash_password_differs_across_passwords() {
    assert_ne!(hash_password("salt", "secret"), hash_password("salt", "Secret"));
}

#[test]
fn hash_password_is_hex_sha256() {
    let hash = hash_password("salt", "secret");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_is_unique_hex() {
    let a = generate_salt();
    let b = generate_salt();
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn bytes_to_hex_formats_leading_zeros() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
}
