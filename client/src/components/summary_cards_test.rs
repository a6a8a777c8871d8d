use super::*;

#[test]
fn format_average_two_decimals() {
    assert_eq!(format_average(Some(3.456)), "3.46");
    assert_eq!(format_average(Some(4.0)), "4.00");
}

#[test]
fn format_average_dash_when_no_bikes() {
    assert_eq!(format_average(None), "-");
}
