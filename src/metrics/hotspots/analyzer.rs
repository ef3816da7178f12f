//! Hotspot analysis: files that change often and in large amounts.
//!
//! Score = change frequency × average churn per change. The product is
//! the file's total churn, but both factors are kept because the
//! average change size is compared against the size of the pending
//! change during impact analysis.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::metrics::FileImpact;
use crate::metrics::risk::{RiskLevel, percentile_rank};
use crate::model::{Commit, CurrentChanges};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHotspot {
    pub filename: String,
    /// Number of commits touching the file.
    pub changes: u32,
    pub churn: u64,
    pub avg_churn: f64,
    pub score: f64,
}

/// Hotspots sorted by score descending then filename.
pub fn compute_hotspots(commits: &[Commit]) -> Vec<FileHotspot> {
    let mut stats: BTreeMap<&str, (u32, u64)> = BTreeMap::new();
    for commit in commits {
        for file in &commit.files {
            let entry = stats.entry(file.filename.as_str()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += file.churn();
        }
    }

    let mut result: Vec<FileHotspot> = stats
        .into_iter()
        .map(|(filename, (changes, churn))| {
            let avg_churn = if changes > 0 {
                churn as f64 / f64::from(changes)
            } else {
                0.0
            };
            FileHotspot {
                filename: filename.to_string(),
                changes,
                churn,
                avg_churn,
                // changes × avg_churn, taken exactly
                score: churn as f64,
            }
        })
        .collect();
    result.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    result
}

pub fn classify_risk(percentile: f64, relative_size: f64) -> RiskLevel {
    if percentile > 0.9 && relative_size > 1.5 {
        RiskLevel::Critical
    } else if percentile > 0.8 || (percentile > 0.7 && relative_size > 1.5) {
        RiskLevel::High
    } else if percentile > 0.6 || relative_size > 2.0 {
        RiskLevel::Medium
    } else if percentile > 0.4 || relative_size > 1.0 {
        RiskLevel::Elevated
    } else {
        RiskLevel::Low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotImpact {
    pub hotspot_score: f64,
    pub score_percentile: f64,
    pub change_frequency: u32,
    pub avg_change_size: f64,
    pub current_change_size: u64,
    /// Pending change size over the historical average; 0 without history.
    pub relative_change_size: f64,
    pub risk: RiskLevel,
}

pub fn hotspot_impact(
    changes: &CurrentChanges,
    hotspots: &[FileHotspot],
) -> Vec<FileImpact<HotspotImpact>> {
    let scores: Vec<f64> = hotspots.iter().map(|h| h.score).collect();
    let by_name: HashMap<&str, &FileHotspot> =
        hotspots.iter().map(|h| (h.filename.as_str(), h)).collect();

    changes
        .values()
        .map(|change| match by_name.get(change.filename.as_str()) {
            None => FileImpact::new_file(&change.filename),
            Some(h) => {
                let score_percentile = percentile_rank(&scores, &h.score);
                let relative_change_size = if h.avg_churn > 0.0 {
                    change.total as f64 / h.avg_churn
                } else {
                    0.0
                };
                FileImpact::known(
                    &change.filename,
                    HotspotImpact {
                        hotspot_score: h.score,
                        score_percentile,
                        change_frequency: h.changes,
                        avg_change_size: h.avg_churn,
                        current_change_size: change.total,
                        relative_change_size,
                        risk: classify_risk(score_percentile, relative_change_size),
                    },
                )
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
