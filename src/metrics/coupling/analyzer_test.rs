use super::*;
use crate::testing::{changes, commit, xy_history};

#[test]
fn xy_pair_count_and_jaccard() {
    let result = compute_coupling(&xy_history());
    assert_eq!(result.pairs.len(), 1);
    let pair = &result.pairs[0];
    assert_eq!((pair.file1.as_str(), pair.file2.as_str()), ("x.py", "y.py"));
    assert_eq!(pair.count, 1);
    assert!((pair.jaccard - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!((pair.file1_changes, pair.file2_changes), (2, 2));
}

fn link(result: &CouplingResult, a: &str, b: &str) -> Option<(u32, f64)> {
    result
        .neighbors(a)
        .into_iter()
        .find(|(file, _, _)| file == b)
        .map(|(_, count, strength)| (count, strength))
}

#[test]
fn coupling_is_symmetric() {
    let commits = vec![
        commit("1", "A", &[("M", "a"), ("M", "b"), ("M", "c")]),
        commit("2", "A", &[("M", "a"), ("M", "b")]),
        commit("3", "B", &[("M", "c")]),
    ];
    let result = compute_coupling(&commits);
    for (x, y) in [("a", "b"), ("a", "c"), ("b", "c")] {
        assert_eq!(link(&result, x, y), link(&result, y, x));
    }
    assert_eq!(link(&result, "a", "b"), Some((2, 1.0)));
}

#[test]
fn jaccard_stays_in_unit_interval() {
    let commits = vec![
        commit("1", "A", &[("M", "a"), ("M", "b")]),
        commit("2", "A", &[("M", "a"), ("M", "c")]),
        commit("3", "A", &[("M", "b"), ("M", "c"), ("M", "d")]),
        commit("4", "A", &[("M", "a")]),
    ];
    for pair in compute_coupling(&commits).pairs {
        assert!((0.0..=1.0).contains(&pair.jaccard), "{pair:?}");
    }
}

#[test]
fn jaccard_empty_union_is_zero() {
    assert_eq!(jaccard(0, 0, 0), 0.0);
    assert_eq!(jaccard(2, 2, 2), 1.0);
}

#[test]
fn single_file_commits_have_no_pairs() {
    let commits = vec![commit("1", "A", &[("A", "a")]), commit("2", "A", &[("M", "a")])];
    let result = compute_coupling(&commits);
    assert!(result.pairs.is_empty());
    assert_eq!(result.file_changes["a"], 2);
    assert_eq!(result.graph.node_count(), 1);
    assert_eq!(result.graph.edge_count(), 0);
}

#[test]
fn graph_mirrors_pair_table() {
    let result = compute_coupling(&xy_history());
    assert_eq!(result.graph.node_count(), 2);
    assert_eq!(result.graph.edge_count(), 1);
    let neighbors = result.neighbors("y.py");
    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors[0].0, "x.py");
    assert_eq!(neighbors[0].1, 1);
    assert!(result.neighbors("unknown.py").is_empty());
}

#[test]
fn pairs_sorted_by_strength() {
    let commits = vec![
        commit("1", "A", &[("M", "a"), ("M", "b")]),
        commit("2", "A", &[("M", "a"), ("M", "b")]),
        commit("3", "A", &[("M", "c"), ("M", "d")]),
        commit("4", "A", &[("M", "c")]),
    ];
    let result = compute_coupling(&commits);
    assert_eq!(result.pairs[0].file1, "a");
    assert_eq!(result.pairs[0].jaccard, 1.0);
    assert_eq!(result.pairs[1].jaccard, 0.5);
}

#[test]
fn empty_history() {
    let result = compute_coupling(&[]);
    assert!(result.pairs.is_empty());
    assert!(result.file_changes.is_empty());
    assert_eq!(result.graph.node_count(), 0);
}

#[test]
fn risk_thresholds() {
    assert_eq!(classify_risk(0.9, 1), RiskLevel::Critical);
    assert_eq!(classify_risk(0.9, 0), RiskLevel::Medium);
    assert_eq!(classify_risk(0.75, 1), RiskLevel::High);
    assert_eq!(classify_risk(0.2, 2), RiskLevel::Medium);
    assert_eq!(classify_risk(0.4, 0), RiskLevel::Elevated);
    assert_eq!(classify_risk(0.1, 0), RiskLevel::Low);
}

#[test]
fn impact_splits_modified_and_unmodified() {
    let commits = vec![
        commit("1", "A", &[("M", "a"), ("M", "b"), ("M", "c")]),
        commit("2", "A", &[("M", "a"), ("M", "b")]),
        commit("3", "A", &[("M", "a"), ("M", "b")]),
    ];
    let result = compute_coupling(&commits);
    let impact = coupling_impact(&changes(&[("a", 1, 1), ("c", 1, 0)]), &result);

    let a = impact[0].metrics.as_ref().unwrap();
    assert_eq!(impact[0].filename, "a");
    assert_eq!(a.total_coupled_files, 2);
    assert_eq!(a.coupled_modified.len(), 1);
    assert_eq!(a.coupled_modified[0].file, "c");
    assert_eq!(a.coupled_unmodified[0].file, "b");
    assert_eq!(a.coupled_unmodified[0].strength, 1.0);
    assert_eq!(a.strong_unmodified, 1);
    assert_eq!(a.max_coupling, 1.0);
    assert_eq!(a.risk, RiskLevel::Critical);

    // c co-changed once with a and b out of three changes to a and b
    let c = impact[1].metrics.as_ref().unwrap();
    assert!((c.max_coupling - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(c.strong_unmodified, 0);
    assert_eq!(c.risk, RiskLevel::Elevated);
}

#[test]
fn impact_flags_new_files() {
    let result = compute_coupling(&xy_history());
    let impact = coupling_impact(&changes(&[("brand_new.rs", 3, 0)]), &result);
    assert!(impact[0].new_file);
    assert!(impact[0].metrics.is_none());
}

#[test]
fn impact_file_without_neighbours() {
    let result = compute_coupling(&[commit("1", "A", &[("A", "solo")])]);
    let impact = coupling_impact(&changes(&[("solo", 1, 0)]), &result);
    let m = impact[0].metrics.as_ref().unwrap();
    assert_eq!(m.total_coupled_files, 0);
    assert_eq!(m.avg_coupling, 0.0);
    assert_eq!(m.risk, RiskLevel::Low);
}
