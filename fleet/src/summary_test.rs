use super::*;

fn user(email: &str, manager: bool, deleted: bool) -> User {
    User {
        email: email.to_owned(),
        name: "Someone".to_owned(),
        age: 30,
        is_manager: manager,
        is_deleted: deleted,
    }
}

fn bike(id: &str, rating: f64, deleted: bool) -> Bike {
    Bike {
        registration_id: id.to_owned(),
        color: "Red".to_owned(),
        model: "Road".to_owned(),
        location: "Lot A".to_owned(),
        rating,
        is_deleted: deleted,
    }
}

#[test]
fn summarize_counts_only_visible_entities() {
    let mut users = Roster::new();
    users.replace_all([
        user("a@x.com", true, false),
        user("b@x.com", false, false),
        user("c@x.com", true, true),
    ]);
    let mut bikes = Roster::new();
    bikes.replace_all([bike("B1", 4.0, false), bike("B2", 2.0, true)]);

    let summary = summarize(&users, &bikes);
    assert_eq!(summary.total_users, 2);
    assert_eq!(summary.managers, 1);
    assert_eq!(summary.total_bikes, 1);
    assert_eq!(summary.average_rating, Some(4.0));
}

#[test]
fn summarize_averages_over_visible_bikes() {
    let users = Roster::new();
    let mut bikes = Roster::new();
    bikes.replace_all([bike("B1", 3.0, false), bike("B2", 4.0, false)]);
    let summary = summarize(&users, &bikes);
    assert_eq!(summary.average_rating, Some(3.5));
}

#[test]
fn summarize_empty_bike_set_has_no_average() {
    let summary = summarize(&Roster::new(), &Roster::new());
    assert_eq!(summary.average_rating, None);
    assert_eq!(summary.total_users, 0);
    assert_eq!(summary.total_bikes, 0);
}
