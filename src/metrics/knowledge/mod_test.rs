use super::*;
use crate::testing::xy_history;

#[test]
fn result_json_has_team_summary() {
    let c = KnowledgeComputator;
    let result = c.calculate(&xy_history()).unwrap();
    let json = c.result_json(&result, 10).unwrap();
    assert_eq!(json["bus_factor"], 1);
    assert_eq!(json["knowledge_redundancy"], 1.5);
    assert_eq!(json["team_risk"], "critical");
    assert_eq!(json["authors"][0]["author"], "Alice");
    assert!(json.get("file_ownership").is_none());
}

#[test]
fn result_json_limits_authors() {
    let c = KnowledgeComputator;
    let result = c.calculate(&xy_history()).unwrap();
    let json = c.result_json(&result, 1).unwrap();
    assert_eq!(json["authors"].as_array().unwrap().len(), 1);
    assert_eq!(json["author_count"], 2);
}
