//! Commit fixtures shared by the metric tests.

use crate::model::{Commit, CurrentChange, CurrentChanges, FileChange};

/// A commit touching `files`, each given as `(status, filename)`.
pub fn commit(hash: &str, author: &str, files: &[(&str, &str)]) -> Commit {
    Commit {
        hash: hash.to_string(),
        author: author.to_string(),
        date: "Mon Jan 1 10:00:00 2024 +0000".to_string(),
        message: format!("commit {hash}"),
        files: files
            .iter()
            .map(|(status, name)| FileChange::from_status(*name, status))
            .collect(),
    }
}

/// A adds x.py (Alice), B modifies x.py and y.py (Alice), C modifies y.py (Bob).
pub fn xy_history() -> Vec<Commit> {
    vec![
        commit("a", "Alice", &[("A", "x.py")]),
        commit("b", "Alice", &[("M", "x.py"), ("M", "y.py")]),
        commit("c", "Bob", &[("M", "y.py")]),
    ]
}

pub fn changes(files: &[(&str, u64, u64)]) -> CurrentChanges {
    files
        .iter()
        .map(|(name, add, del)| (name.to_string(), CurrentChange::new(*name, *add, *del)))
        .collect()
}
