use super::*;
use crate::metrics::entropy::analyzer::{compute_entropy, entropy_impact};
use crate::testing::{changes, xy_history};

#[test]
fn print_report_does_not_panic() {
    let entropy = compute_entropy(&xy_history());
    print_report(&entropy, entropy.len() + 3);
}

#[test]
fn print_report_empty() {
    print_report(&[], 0);
}

#[test]
fn print_impact_does_not_panic() {
    let entropy = compute_entropy(&xy_history());
    print_impact(&entropy_impact(&changes(&[("y.py", 1, 1), ("z.py", 1, 0)]), &entropy));
}
