use trip_cost_calculator::currency::format_brl;

#[test]
fn formats_with_comma_decimal_separator() {
    assert_eq!(format_brl(50.0), "R$ 50,00");
    assert_eq!(format_brl(0.0), "R$ 0,00");
    assert_eq!(format_brl(12.5), "R$ 12,50");
}

#[test]
fn rounds_to_two_decimals() {
    assert_eq!(format_brl(106.9999), "R$ 107,00");
    assert_eq!(format_brl(101.649), "R$ 101,65");
}
