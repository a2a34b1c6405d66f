use super::*;

#[test]
fn seven_out_of_ten_fills_198_point_1() {
    assert_eq!(dash_value(7.0, 10.0), 198.1);
    assert_eq!(dash_pattern(7.0, 10.0), "198.1 283");
}

#[test]
fn perfect_score_fills_the_whole_arc() {
    assert_eq!(dash_value(10.0, 10.0), GAUGE_CIRCUMFERENCE);
    assert_eq!(dash_pattern(10.0, 10.0), "283 283");
}

#[test]
fn zero_score_leaves_the_arc_empty() {
    assert_eq!(dash_pattern(0.0, 10.0), "0 283");
}

#[test]
fn out_of_range_ratios_are_clamped() {
    assert_eq!(dash_value(15.0, 10.0), GAUGE_CIRCUMFERENCE);
    assert_eq!(dash_value(-3.0, 10.0), 0.0);
}

#[test]
fn degenerate_totals_yield_an_empty_arc() {
    assert_eq!(dash_value(5.0, 0.0), 0.0);
    assert_eq!(dash_value(5.0, -1.0), 0.0);
    assert_eq!(dash_value(5.0, f64::NAN), 0.0);
    assert_eq!(dash_value(f64::NAN, 10.0), 0.0);
}

#[test]
fn metric_parsing_tolerates_whitespace_and_rejects_garbage() {
    assert_eq!(parse_metric(Some(" 7 ".to_owned())), 7.0);
    assert_eq!(parse_metric(Some("7.5".to_owned())), 7.5);
    assert!(parse_metric(Some("seven".to_owned())).is_nan());
    assert!(parse_metric(Some(String::new())).is_nan());
    assert!(parse_metric(None).is_nan());
}

#[test]
fn garbage_attributes_never_reach_the_style() {
    let pattern = dash_pattern(parse_metric(None), parse_metric(Some("x".to_owned())));
    assert_eq!(pattern, "0 283");
}
