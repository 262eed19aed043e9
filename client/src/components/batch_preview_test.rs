use super::*;

#[test]
fn results_heading_counts_items() {
    assert_eq!(results_heading(0), "Results (0)");
    assert_eq!(results_heading(3), "Results (3)");
}
