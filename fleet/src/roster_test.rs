use super::*;
use crate::bike::Bike;
use crate::user::User;

fn user(email: &str, name: &str, deleted: bool) -> User {
    User {
        email: email.to_owned(),
        name: name.to_owned(),
        age: 30,
        is_manager: false,
        is_deleted: deleted,
    }
}

fn bike(id: &str, model: &str, deleted: bool) -> Bike {
    Bike {
        registration_id: id.to_owned(),
        color: "Red".to_owned(),
        model: model.to_owned(),
        location: "Lot A".to_owned(),
        rating: 4.0,
        is_deleted: deleted,
    }
}

fn keys(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.email.as_str()).collect()
}

// =============================================================
// De-duplication
// =============================================================

#[test]
fn replace_all_collapses_duplicate_keys_to_last_occurrence() {
    let mut roster = Roster::new();
    roster.replace_all([
        user("a@x.com", "First", false),
        user("b@x.com", "Other", false),
        user("a@x.com", "Second", false),
    ]);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("a@x.com").map(|u| u.name.as_str()), Some("Second"));
    assert_eq!(keys(&roster.visible()), ["a@x.com", "b@x.com"]);
}

#[test]
fn upsert_replaces_in_place_and_appends_new() {
    let mut roster = Roster::new();
    roster.upsert(user("a@x.com", "Ada", false));
    roster.upsert(user("b@x.com", "Bo", false));
    roster.upsert(user("a@x.com", "Ada II", false));
    assert_eq!(keys(&roster.visible()), ["a@x.com", "b@x.com"]);
    assert_eq!(roster.get("a@x.com").map(|u| u.name.as_str()), Some("Ada II"));
}

// =============================================================
// Soft delete
// =============================================================

#[test]
fn patch_deleted_hides_entity_from_visible() {
    let mut roster = Roster::new();
    roster.replace_all([user("a@x.com", "Ada", false), user("b@x.com", "Bo", false)]);
    assert!(roster.patch_deleted("a@x.com"));
    assert_eq!(keys(&roster.visible()), ["b@x.com"]);
    // Still in the backing snapshot.
    assert_eq!(roster.len(), 2);
}

#[test]
fn patch_deleted_is_idempotent() {
    let mut roster = Roster::new();
    roster.replace_all([user("a@x.com", "Ada", false)]);
    assert!(roster.patch_deleted("a@x.com"));
    assert!(roster.patch_deleted("a@x.com"));
    assert!(roster.visible().is_empty());
    assert_eq!(roster.get("a@x.com").map(|u| u.is_deleted), Some(true));
}

#[test]
fn patch_deleted_unknown_key_returns_false() {
    let mut roster: Roster<User> = Roster::new();
    assert!(!roster.patch_deleted("ghost@x.com"));
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_empty_term_returns_non_deleted_subset() {
    let mut roster = Roster::new();
    roster.replace_all([user("a@x.com", "Ada", false), user("b@x.com", "Bo", true)]);
    assert_eq!(keys(&roster.search("")), ["a@x.com"]);
    assert_eq!(keys(&roster.search("   ")), ["a@x.com"]);
}

#[test]
fn search_matches_case_insensitive_substrings() {
    let mut roster = Roster::new();
    roster.replace_all([
        user("ada@x.com", "Ada Lovelace", false),
        user("bo@x.com", "Bo Diddley", false),
    ]);
    assert_eq!(keys(&roster.search("LOVE")), ["ada@x.com"]);
    assert_eq!(keys(&roster.search("@x.com")), ["ada@x.com", "bo@x.com"]);
}

#[test]
fn search_never_returns_deleted_entities_even_on_match() {
    // A match on any searchable field must never resurrect a deleted row.
    let mut roster = Roster::new();
    roster.replace_all([user("gone@x.com", "Gone", true)]);
    assert!(roster.search("gone@x.com").is_empty());
}

#[test]
fn search_bikes_over_all_four_fields() {
    let mut roster = Roster::new();
    roster.replace_all([bike("B1", "Road", false), bike("B2", "Trail", true)]);
    assert_eq!(roster.search("road").len(), 1);
    assert_eq!(roster.search("road")[0].registration_id, "B1");
    // B2 matches "trail" but is deleted.
    assert!(roster.search("trail").is_empty());
}

#[test]
fn search_no_match_returns_empty() {
    let mut roster = Roster::new();
    roster.replace_all([bike("B1", "Road", false)]);
    assert!(roster.search("unicycle").is_empty());
}
