use super::*;
use crate::testing::{changes, xy_history};

#[test]
fn result_json_respects_limit() {
    let c = ChurnComputator;
    let result = c.calculate(&xy_history()).unwrap();
    let json = c.result_json(&result, 1).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["filename"], "y.py");
}

#[test]
fn impact_json_shape() {
    let c = ChurnComputator;
    let result = c.calculate(&xy_history()).unwrap();
    let impact = c
        .analyze_impact(&changes(&[("x.py", 1, 0), ("z.py", 1, 0)]), &result)
        .unwrap();
    let json = c.impact_json(&impact).unwrap();
    assert_eq!(json[0]["filename"], "x.py");
    assert_eq!(json[0]["metrics"]["risk"], "elevated");
    assert_eq!(json[1]["new_file"], true);
    assert!(json[1].get("metrics").is_none());
}

#[test]
fn limit_larger_than_result() {
    let c = ChurnComputator;
    let result = c.calculate(&xy_history()).unwrap();
    c.print_result(&result, 100);
    assert_eq!(c.result_json(&result, 100).unwrap().as_array().unwrap().len(), 2);
}
