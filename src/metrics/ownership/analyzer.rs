//! Developer ownership: how concentrated each file's changes are in its
//! dominant author.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::metrics::{FileImpact, changes_by_author, dominant_author};
use crate::model::{Commit, CurrentChanges};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipCategory {
    Exclusive,
    Strong,
    Moderate,
    Shared,
    Dispersed,
}

impl OwnershipCategory {
    pub fn label(&self) -> &'static str {
        match self {
            OwnershipCategory::Exclusive => "EXCLUSIVE",
            OwnershipCategory::Strong => "STRONG",
            OwnershipCategory::Moderate => "MODERATE",
            OwnershipCategory::Shared => "SHARED",
            OwnershipCategory::Dispersed => "DISPERSED",
        }
    }
}

/// Categorize an ownership ratio. An even two-way split (0.5) is moderate.
pub fn categorize(ratio: f64, contributors: usize) -> OwnershipCategory {
    if ratio > 0.8 && contributors == 1 {
        OwnershipCategory::Exclusive
    } else if ratio > 0.8 {
        OwnershipCategory::Strong
    } else if ratio >= 0.5 {
        OwnershipCategory::Moderate
    } else if ratio > 0.3 {
        OwnershipCategory::Shared
    } else {
        OwnershipCategory::Dispersed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOwnership {
    pub filename: String,
    pub dominant_author: String,
    /// Dominant author's changes / all changes to the file.
    pub ownership_ratio: f64,
    pub contributor_count: usize,
    pub author_changes: BTreeMap<String, u64>,
    pub total_changes: u64,
}

impl FileOwnership {
    pub fn category(&self) -> OwnershipCategory {
        categorize(self.ownership_ratio, self.contributor_count)
    }

    /// Contributors by change count descending, then name.
    pub fn top_contributors(&self, n: usize) -> Vec<(String, u64)> {
        let mut authors: Vec<(String, u64)> = self
            .author_changes
            .iter()
            .map(|(a, &c)| (a.clone(), c))
            .collect();
        authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        authors.truncate(n);
        authors
    }
}

/// Ownership per file, sorted by ratio descending then filename.
pub fn compute_ownership(commits: &[Commit]) -> Vec<FileOwnership> {
    let mut result: Vec<FileOwnership> = changes_by_author(commits)
        .into_iter()
        .filter_map(|(filename, author_changes)| {
            let total_changes: u64 = author_changes.values().sum();
            let (dominant, count) = dominant_author(&author_changes)?;
            if total_changes == 0 {
                return None;
            }
            Some(FileOwnership {
                dominant_author: dominant.to_string(),
                ownership_ratio: count as f64 / total_changes as f64,
                contributor_count: author_changes.len(),
                filename,
                author_changes,
                total_changes,
            })
        })
        .collect();
    result.sort_by(|a, b| {
        b.ownership_ratio
            .total_cmp(&a.ownership_ratio)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    result
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnershipImpact {
    pub dominant_author: String,
    pub ownership_ratio: f64,
    pub contributor_count: usize,
    pub total_changes: u64,
    pub top_contributors: Vec<(String, u64)>,
    pub category: OwnershipCategory,
}

pub fn ownership_impact(
    changes: &CurrentChanges,
    ownership: &[FileOwnership],
) -> Vec<FileImpact<OwnershipImpact>> {
    let by_name: HashMap<&str, &FileOwnership> =
        ownership.iter().map(|o| (o.filename.as_str(), o)).collect();
    changes
        .keys()
        .map(|filename| match by_name.get(filename.as_str()) {
            None => FileImpact::new_file(filename),
            Some(o) => FileImpact::known(
                filename,
                OwnershipImpact {
                    dominant_author: o.dominant_author.clone(),
                    ownership_ratio: o.ownership_ratio,
                    contributor_count: o.contributor_count,
                    total_changes: o.total_changes,
                    top_contributors: o.top_contributors(3),
                    category: o.category(),
                },
            ),
        })
        .collect()
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
