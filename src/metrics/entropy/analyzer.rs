//! Change entropy: how evenly a file's changes spread across authors.
//!
//! Each author's share of a file's changes is treated as a probability.
//! Shannon entropy in bits is normalized by log2(author count) into
//! [0, 1]; a file with a single author has entropy 0.

use std::collections::HashMap;

use serde::Serialize;

use crate::metrics::{FileImpact, changes_by_author};
use crate::model::{Commit, CurrentChanges};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntropy {
    pub filename: String,
    /// Normalized entropy in [0, 1].
    pub entropy: f64,
    pub contributors: usize,
    pub total_changes: u64,
}

/// What the entropy of a file says about its ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropySignal {
    /// Many contributors with no clear owner.
    Diffuse,
    /// Several contributors but one dominant owner.
    Dominant,
    Neutral,
}

impl EntropySignal {
    pub fn label(&self) -> &'static str {
        match self {
            EntropySignal::Diffuse => "DIFFUSE",
            EntropySignal::Dominant => "DOMINANT",
            EntropySignal::Neutral => "NEUTRAL",
        }
    }
}

pub fn classify_signal(entropy: f64, contributors: usize) -> EntropySignal {
    if entropy > 0.8 && contributors > 3 {
        EntropySignal::Diffuse
    } else if entropy < 0.3 && contributors > 1 {
        EntropySignal::Dominant
    } else {
        EntropySignal::Neutral
    }
}

/// Shannon entropy of `counts` divided by its maximum, log2(len).
pub fn normalized_entropy(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 || counts.len() < 2 {
        return 0.0;
    }
    let entropy: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total as f64;
            -p * p.log2()
        })
        .sum();
    entropy / (counts.len() as f64).log2()
}

/// Entropy per file, sorted by entropy descending then filename.
pub fn compute_entropy(commits: &[Commit]) -> Vec<FileEntropy> {
    let mut result: Vec<FileEntropy> = changes_by_author(commits)
        .into_iter()
        .map(|(filename, authors)| {
            let counts: Vec<u64> = authors.values().copied().collect();
            FileEntropy {
                filename,
                entropy: normalized_entropy(&counts),
                contributors: counts.len(),
                total_changes: counts.iter().sum(),
            }
        })
        .collect();
    result.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    result
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyImpact {
    pub entropy: f64,
    pub contributors: usize,
    pub signal: EntropySignal,
}

pub fn entropy_impact(
    changes: &CurrentChanges,
    entropy: &[FileEntropy],
) -> Vec<FileImpact<EntropyImpact>> {
    let by_name: HashMap<&str, &FileEntropy> =
        entropy.iter().map(|e| (e.filename.as_str(), e)).collect();
    changes
        .keys()
        .map(|filename| match by_name.get(filename.as_str()) {
            None => FileImpact::new_file(filename),
            Some(e) => FileImpact::known(
                filename,
                EntropyImpact {
                    entropy: e.entropy,
                    contributors: e.contributors,
                    signal: classify_signal(e.entropy, e.contributors),
                },
            ),
        })
        .collect()
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
