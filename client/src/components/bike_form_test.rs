use super::*;

#[test]
fn valid_fields_pass_through_trimmed() {
    let (id, model, color, location, rating) =
        validate_bike_form(" B1 ", " Road ", "Red", "Lot A", "4.5").expect("valid");
    assert_eq!(id, "B1");
    assert_eq!(model, "Road");
    assert_eq!(color, "Red");
    assert_eq!(location, "Lot A");
    assert!((rating - 4.5).abs() < f64::EPSILON);
}

#[test]
fn empty_registration_id_is_rejected() {
    assert_eq!(
        validate_bike_form("", "Road", "Red", "Lot A", "4"),
        Err("Registration ID is required.")
    );
}

#[test]
fn empty_text_fields_are_rejected() {
    assert_eq!(validate_bike_form("B1", " ", "Red", "Lot A", "4"), Err("Model is required."));
    assert_eq!(validate_bike_form("B1", "Road", "", "Lot A", "4"), Err("Color is required."));
    assert_eq!(validate_bike_form("B1", "Road", "Red", "", "4"), Err("Location is required."));
}

#[test]
fn out_of_range_rating_is_rejected() {
    let err = Err("Enter a rating between 0 and 5.");
    assert_eq!(validate_bike_form("B1", "Road", "Red", "Lot A", "5.5"), err);
    assert_eq!(validate_bike_form("B1", "Road", "Red", "Lot A", "-1"), err);
    assert_eq!(validate_bike_form("B1", "Road", "Red", "Lot A", "lots"), err);
}

#[test]
fn boundary_ratings_are_accepted() {
    assert!(validate_bike_form("B1", "Road", "Red", "Lot A", "0").is_ok());
    assert!(validate_bike_form("B1", "Road", "Red", "Lot A", "5").is_ok());
}
