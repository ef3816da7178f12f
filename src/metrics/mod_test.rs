use super::*;
use crate::testing::{commit, xy_history};

#[test]
fn changes_by_author_counts_file_entries() {
    let tally = changes_by_author(&xy_history());
    assert_eq!(tally["x.py"]["Alice"], 2);
    assert!(!tally["x.py"].contains_key("Bob"));
    assert_eq!(tally["y.py"]["Alice"], 1);
    assert_eq!(tally["y.py"]["Bob"], 1);
}

#[test]
fn changes_by_author_ignores_empty_commits() {
    let tally = changes_by_author(&[commit("m", "Merger", &[])]);
    assert!(tally.is_empty());
}

#[test]
fn dominant_author_picks_highest_count() {
    let counts = BTreeMap::from([("Bob".to_string(), 3), ("Alice".to_string(), 1)]);
    assert_eq!(dominant_author(&counts), Some(("Bob", 3)));
}

#[test]
fn dominant_author_breaks_ties_by_name() {
    let counts = BTreeMap::from([("Zed".to_string(), 2), ("Amy".to_string(), 2)]);
    assert_eq!(dominant_author(&counts), Some(("Amy", 2)));
    assert_eq!(dominant_author(&BTreeMap::new()), None);
}

#[test]
fn new_file_impact_omits_metrics() {
    let json = serde_json::to_value(FileImpact::<u32>::new_file("n.py")).unwrap();
    assert_eq!(json["filename"], "n.py");
    assert_eq!(json["new_file"], true);
    assert!(json.get("metrics").is_none());

    let json = serde_json::to_value(FileImpact::known("x.py", 7)).unwrap();
    assert_eq!(json["new_file"], false);
    assert_eq!(json["metrics"], 7);
}

#[test]
fn metric_value_downcasts_to_its_type() {
    let value = MetricValue::new(vec![1u32, 2]);
    assert_eq!(value.downcast_ref::<Vec<u32>>(), Some(&vec![1, 2]));
    assert!(value.downcast_ref::<String>().is_none());
}

#[test]
fn by_risk_orders_highest_first_and_new_files_last() {
    let impact = vec![
        FileImpact::known("a", RiskLevel::Low),
        FileImpact::new_file("b"),
        FileImpact::known("c", RiskLevel::Critical),
        FileImpact::known("d", RiskLevel::Medium),
        FileImpact::known("e", RiskLevel::Critical),
    ];
    let names: Vec<&str> = by_risk(&impact, |r| *r)
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(names, vec!["c", "e", "d", "a", "b"]);
}
