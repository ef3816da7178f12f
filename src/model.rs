//! Commit history records shared by the collector and every metric.
//!
//! Additions and deletions on a `FileChange` are synthesized from the
//! name-status code rather than counted from line diffs: an added file
//! counts as (1, 0), a deleted file as (0, 1), anything else as (1, 1).
//! Churn and entropy figures are therefore event counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub filename: String,
    pub status: String,
    pub additions: u32,
    pub deletions: u32,
}

impl FileChange {
    /// Build a change record from a name-status code such as `A`, `M` or `R100`.
    /// Only the leading letter of the code is kept.
    pub fn from_status(filename: impl Into<String>, status: &str) -> Self {
        let code = status.chars().next().unwrap_or('M');
        let (additions, deletions) = match code {
            'A' => (1, 0),
            'D' => (0, 1),
            _ => (1, 1),
        };
        Self {
            filename: filename.into(),
            status: code.to_string(),
            additions,
            deletions,
        }
    }

    pub fn churn(&self) -> u64 {
        u64::from(self.additions) + u64::from(self.deletions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    /// Timestamp exactly as git printed it; never parsed.
    pub date: String,
    pub message: String,
    pub files: Vec<FileChange>,
}

/// Uncommitted edits to one file, read from `git diff --stat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentChange {
    pub filename: String,
    pub additions: u64,
    pub deletions: u64,
    pub total: u64,
}

impl CurrentChange {
    pub fn new(filename: impl Into<String>, additions: u64, deletions: u64) -> Self {
        Self {
            filename: filename.into(),
            additions,
            deletions,
            total: additions + deletions,
        }
    }
}

pub type CurrentChanges = BTreeMap<String, CurrentChange>;

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
