use super::*;

#[test]
fn added_file_counts_one_addition() {
    let fc = FileChange::from_status("a.rs", "A");
    assert_eq!((fc.additions, fc.deletions), (1, 0));
    assert_eq!(fc.status, "A");
}

#[test]
fn deleted_file_counts_one_deletion() {
    let fc = FileChange::from_status("a.rs", "D");
    assert_eq!((fc.additions, fc.deletions), (0, 1));
}

#[test]
fn other_statuses_count_both() {
    for status in ["M", "T", "R100", "C075", "U"] {
        let fc = FileChange::from_status("a.rs", status);
        assert_eq!(
            (fc.additions, fc.deletions),
            (1, 1),
            "status {status} should count as (1, 1)"
        );
        assert_eq!(fc.churn(), 2);
    }
}

#[test]
fn status_keeps_only_leading_letter() {
    let fc = FileChange::from_status("b.rs", "R087");
    assert_eq!(fc.status, "R");
}

#[test]
fn current_change_total_is_sum() {
    let c = CurrentChange::new("x.py", 4, 3);
    assert_eq!(c.total, 7);
}

#[test]
fn commit_json_field_names() {
    let commit = Commit {
        hash: "abc".to_string(),
        author: "Alice".to_string(),
        date: "Mon Jan 1 00:00:00 2024 +0000".to_string(),
        message: "init".to_string(),
        files: vec![FileChange::from_status("x.py", "A")],
    };
    let value = serde_json::to_value(&commit).unwrap();
    for key in ["hash", "author", "date", "message", "files"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    let file = &value["files"][0];
    assert_eq!(file["filename"], "x.py");
    assert_eq!(file["status"], "A");
    assert_eq!(file["additions"], 1);
    assert_eq!(file["deletions"], 0);
}
