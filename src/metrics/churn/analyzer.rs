//! Code churn: total synthetic additions plus deletions per file.

use std::collections::HashMap;

use serde::Serialize;

use crate::metrics::FileImpact;
use crate::metrics::risk::{RiskLevel, percentile_rank};
use crate::model::{Commit, CurrentChanges};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChurn {
    pub filename: String,
    pub churn: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnImpact {
    pub historical_churn: u64,
    pub current_churn: u64,
    pub churn_percentile: f64,
    pub risk: RiskLevel,
}

/// Churn per file, sorted by churn descending then filename.
pub fn compute_churn(commits: &[Commit]) -> Vec<FileChurn> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for commit in commits {
        for file in &commit.files {
            *totals.entry(file.filename.as_str()).or_insert(0) += file.churn();
        }
    }

    let mut result: Vec<FileChurn> = totals
        .into_iter()
        .map(|(filename, churn)| FileChurn {
            filename: filename.to_string(),
            churn,
        })
        .collect();
    result.sort_by(|a, b| b.churn.cmp(&a.churn).then_with(|| a.filename.cmp(&b.filename)));
    result
}

pub fn classify_risk(percentile: f64, current: u64, historical: u64) -> RiskLevel {
    if percentile > 0.9 {
        RiskLevel::Critical
    } else if percentile > 0.8 {
        RiskLevel::High
    } else if percentile > 0.6 {
        RiskLevel::Medium
    } else if current as f64 > historical as f64 * 0.3 {
        RiskLevel::Elevated
    } else {
        RiskLevel::Low
    }
}

/// Rank each changed file's historical churn among all files.
pub fn churn_impact(changes: &CurrentChanges, churn: &[FileChurn]) -> Vec<FileImpact<ChurnImpact>> {
    let all: Vec<u64> = churn.iter().map(|f| f.churn).collect();
    let by_name: HashMap<&str, u64> = churn.iter().map(|f| (f.filename.as_str(), f.churn)).collect();

    changes
        .values()
        .map(|change| match by_name.get(change.filename.as_str()) {
            None => FileImpact::new_file(&change.filename),
            Some(&historical) => {
                let churn_percentile = percentile_rank(&all, &historical);
                FileImpact::known(
                    &change.filename,
                    ChurnImpact {
                        historical_churn: historical,
                        current_churn: change.total,
                        churn_percentile,
                        risk: classify_risk(churn_percentile, change.total, historical),
                    },
                )
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
