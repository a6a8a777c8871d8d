use super::*;

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

// =============================================================
// bucket_index
// =============================================================

#[test]
fn exact_four_lands_in_last_bucket() {
    assert_eq!(bucket_index(4.0), Some(4));
}

#[test]
fn exact_one_lands_in_second_bucket() {
    assert_eq!(bucket_index(1.0), Some(1));
}

#[test]
fn five_is_included_in_closed_last_bucket() {
    assert_eq!(bucket_index(5.0), Some(4));
}

#[test]
fn zero_lands_in_first_bucket() {
    assert_eq!(bucket_index(0.0), Some(0));
}

#[test]
fn just_below_bucket_boundary_stays_low() {
    assert_eq!(bucket_index(3.999), Some(3));
    assert_eq!(bucket_index(0.999), Some(0));
}

#[test]
fn out_of_range_and_non_finite_are_excluded() {
    assert_eq!(bucket_index(-0.5), None);
    assert_eq!(bucket_index(5.5), None);
    assert_eq!(bucket_index(f64::NAN), None);
    assert_eq!(bucket_index(f64::INFINITY), None);
}

// =============================================================
// RatingHistogram
// =============================================================

#[test]
fn histogram_counts_only_the_visible_bike() {
    // B1 rating 4 visible, B2 rating 1.5 deleted.
    let bikes = [bike("B1", 4.0, false), bike("B2", 1.5, true)];
    let histogram = RatingHistogram::from_bikes(&bikes);
    assert_eq!(histogram.counts, [0, 0, 0, 0, 1]);
}

#[test]
fn histogram_excludes_deleted_bikes() {
    let bikes = [bike("B1", 2.5, false), bike("B2", 2.5, true)];
    let histogram = RatingHistogram::from_bikes(&bikes);
    assert_eq!(histogram.counts[2], 1);
    assert_eq!(histogram.total(), 1);
}

#[test]
fn histogram_max_count_of_empty_is_zero() {
    let histogram = RatingHistogram::from_bikes(&[]);
    assert_eq!(histogram.max_count(), 0);
    assert_eq!(histogram.total(), 0);
}

#[test]
fn labels_align_with_bucket_indices() {
    assert_eq!(BUCKET_LABELS[bucket_index(4.0).expect("in range")], "4-5");
    assert_eq!(BUCKET_LABELS[bucket_index(1.0).expect("in range")], "1-2");
}

// =============================================================
// bikes_in_bucket
// =============================================================

#[test]
fn bucket_members_exclude_deleted() {
    let bikes = [
        bike("B1", 4.2, false),
        bike("B2", 4.8, true),
        bike("B3", 3.2, false),
    ];
    let members = bikes_in_bucket(&bikes, 4);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].registration_id, "B1");
}

#[test]
fn bucket_members_of_unknown_bucket_are_empty() {
    let bikes = [bike("B1", 4.2, false)];
    assert!(bikes_in_bucket(&bikes, 9).is_empty());
}
