use super::*;

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
}

#[test]
fn page_count_zero_page_size_is_zero() {
    assert_eq!(page_count(25, 0), 0);
}

#[test]
fn clamp_page_stays_within_range() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(9, 3), 3);
    assert_eq!(clamp_page(5, 0), 1);
}

#[test]
fn page_slice_returns_expected_window() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(page_slice(&items, 1, 10), (1..=10).collect::<Vec<_>>());
    assert_eq!(page_slice(&items, 3, 10), (21..=25).collect::<Vec<_>>());
    assert!(page_slice(&items, 4, 10).is_empty());
}

#[test]
fn page_slice_degenerate_inputs_are_empty() {
    let items = [1, 2, 3];
    assert!(page_slice(&items, 0, 10).is_empty());
    assert!(page_slice(&items, 1, 0).is_empty());
}

#[test]
fn union_of_pages_equals_full_row_set() {
    // Desktop renders the filtered set directly; mobile renders it page by
    // page. Both must expose the same rows in the same order.
    let items: Vec<u32> = (1..=23).collect();
    let pages = page_count(items.len(), 7);
    let mut reassembled = Vec::new();
    for page in 1..=pages {
        reassembled.extend(page_slice(&items, page, 7));
    }
    assert_eq!(reassembled, items);
}
