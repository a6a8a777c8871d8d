use super::*;

// Browser storage is unavailable under test; these cover the pure toggle
// contract and the SSR fallbacks.

#[test]
fn toggle_flips_the_flag() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn toggle_twice_round_trips() {
    let start = false;
    assert_eq!(toggle(toggle(start)), start);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_defaults_to_light_off_browser() {
    assert!(!read_preference());
}
