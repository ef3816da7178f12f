use super::*;
use crate::testing::{changes, commit, xy_history};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn equal_shares_maximize_entropy() {
    assert!(approx(normalized_entropy(&[3, 3]), 1.0));
    assert!(approx(normalized_entropy(&[2, 2, 2, 2]), 1.0));
}

#[test]
fn single_author_is_zero() {
    assert_eq!(normalized_entropy(&[7]), 0.0);
    assert_eq!(normalized_entropy(&[]), 0.0);
}

#[test]
fn skewed_shares_approach_zero() {
    let skewed = normalized_entropy(&[1000, 1]);
    assert!(skewed > 0.0 && skewed < 0.02, "got {skewed}");
    assert!(normalized_entropy(&[3, 1]) < normalized_entropy(&[2, 2]));
}

#[test]
fn entropy_in_unit_interval() {
    for counts in [[1u64, 2, 3], [5, 1, 1], [10, 10, 1]] {
        let e = normalized_entropy(&counts);
        assert!((0.0..=1.0 + 1e-12).contains(&e), "{counts:?} -> {e}");
    }
}

#[test]
fn compute_entropy_per_file() {
    let result = compute_entropy(&xy_history());
    // y.py: Alice once, Bob once
    assert_eq!(result[0].filename, "y.py");
    assert!(approx(result[0].entropy, 1.0));
    assert_eq!(result[0].contributors, 2);
    assert_eq!(result[0].total_changes, 2);
    // x.py: Alice only
    assert_eq!(result[1].filename, "x.py");
    assert_eq!(result[1].entropy, 0.0);
    assert_eq!(result[1].contributors, 1);
}

#[test]
fn empty_history() {
    assert!(compute_entropy(&[]).is_empty());
}

#[test]
fn signal_thresholds() {
    assert_eq!(classify_signal(0.9, 4), EntropySignal::Diffuse);
    assert_eq!(classify_signal(0.9, 3), EntropySignal::Neutral);
    assert_eq!(classify_signal(0.2, 2), EntropySignal::Dominant);
    assert_eq!(classify_signal(0.0, 1), EntropySignal::Neutral);
    assert_eq!(classify_signal(0.5, 5), EntropySignal::Neutral);
}

#[test]
fn diffuse_file_from_history() {
    let commits: Vec<Commit> = ["A", "B", "C", "D"]
        .iter()
        .enumerate()
        .map(|(i, a)| commit(&i.to_string(), a, &[("M", "shared.rs")]))
        .collect();
    let entropy = compute_entropy(&commits);
    let impact = entropy_impact(&changes(&[("shared.rs", 1, 1)]), &entropy);
    let m = impact[0].metrics.as_ref().unwrap();
    assert_eq!(m.contributors, 4);
    assert_eq!(m.signal, EntropySignal::Diffuse);
}

#[test]
fn impact_flags_new_files() {
    let entropy = compute_entropy(&xy_history());
    let impact = entropy_impact(&changes(&[("fresh.rs", 1, 0), ("x.py", 1, 1)]), &entropy);
    assert!(impact[0].new_file);
    assert_eq!(impact[1].metrics.as_ref().unwrap().signal, EntropySignal::Neutral);
}
