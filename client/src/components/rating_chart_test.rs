use super::*;

#[test]
fn bar_height_scales_to_the_largest_bucket() {
    assert_eq!(bar_height(4, 4), BAR_AREA_HEIGHT);
    assert_eq!(bar_height(2, 4), BAR_AREA_HEIGHT / 2);
    assert_eq!(bar_height(0, 4), 0);
}

#[test]
fn bar_height_empty_histogram_is_flat() {
    assert_eq!(bar_height(0, 0), 0);
}

#[test]
fn one_color_per_bucket() {
    assert_eq!(BAR_COLORS.len(), BUCKET_COUNT);
}
