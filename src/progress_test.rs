use super::*;

#[test]
fn summary_reports_answered_over_total() {
    assert_eq!(summary(0, 10), "Progress: 0/10");
    assert_eq!(summary(3, 10), "Progress: 3/10");
    assert_eq!(summary(10, 10), "Progress: 10/10");
}

#[test]
fn summary_handles_an_empty_page() {
    assert_eq!(summary(0, 0), "Progress: 0/0");
}
