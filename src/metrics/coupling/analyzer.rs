//! Change coupling: how often pairs of files change in the same commit.
//!
//! Every unordered pair of distinct files in a commit counts one
//! co-change. Strength is the Jaccard index of the two files' commit
//! sets: co-changes / (changes_a + changes_b - co-changes). The pairs
//! also form an undirected graph (files as nodes, co-change counts as
//! edge weights) that impact analysis walks to find neighbours.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::metrics::FileImpact;
use crate::metrics::risk::RiskLevel;
use crate::model::{Commit, CurrentChanges};

/// A pair of files with their co-change statistics.
/// Pairs are ordered lexicographically (file1 < file2).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouplingPair {
    pub file1: String,
    pub file2: String,
    /// Commits that touched both files.
    pub count: u32,
    pub jaccard: f64,
    pub file1_changes: u32,
    pub file2_changes: u32,
}

pub struct CouplingResult {
    /// Sorted by Jaccard descending, then by file names.
    pub pairs: Vec<CouplingPair>,
    /// Commits touching each file.
    pub file_changes: BTreeMap<String, u32>,
    pub graph: UnGraph<String, u32>,
    nodes: HashMap<String, NodeIndex>,
}

impl CouplingResult {
    pub fn node(&self, filename: &str) -> Option<NodeIndex> {
        self.nodes.get(filename).copied()
    }

    /// Every file that co-changed with `filename`, as (file, count, strength).
    pub fn neighbors(&self, filename: &str) -> Vec<(String, u32, f64)> {
        let Some(node) = self.node(filename) else {
            return Vec::new();
        };
        self.graph
            .edges(node)
            .map(|edge| {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                let other = self.graph[other].clone();
                let count = *edge.weight();
                let strength = self.strength(filename, &other, count);
                (other, count, strength)
            })
            .collect()
    }

    fn strength(&self, a: &str, b: &str, count: u32) -> f64 {
        let changes = |f: &str| self.file_changes.get(f).copied().unwrap_or(0);
        jaccard(count, changes(a), changes(b))
    }
}

/// Jaccard index of two change sets sharing `count` commits; 0 when the
/// union is empty.
pub fn jaccard(count: u32, changes_a: u32, changes_b: u32) -> f64 {
    let union = (changes_a + changes_b).saturating_sub(count);
    if union == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(union)
    }
}

pub fn compute_coupling(commits: &[Commit]) -> CouplingResult {
    let mut file_changes: BTreeMap<String, u32> = BTreeMap::new();
    let mut pair_counts: BTreeMap<(String, String), u32> = BTreeMap::new();

    for commit in commits {
        let files: BTreeSet<&str> = commit.files.iter().map(|f| f.filename.as_str()).collect();
        let files: Vec<&str> = files.into_iter().collect();
        for f in &files {
            *file_changes.entry(f.to_string()).or_insert(0) += 1;
        }
        for i in 0..files.len() {
            for j in (i + 1)..files.len() {
                let key = (files[i].to_string(), files[j].to_string());
                *pair_counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    let mut graph = UnGraph::with_capacity(file_changes.len(), pair_counts.len());
    let nodes: HashMap<String, NodeIndex> = file_changes
        .keys()
        .map(|f| (f.clone(), graph.add_node(f.clone())))
        .collect();
    for ((a, b), &count) in &pair_counts {
        graph.add_edge(nodes[a], nodes[b], count);
    }

    let mut pairs: Vec<CouplingPair> = pair_counts
        .into_iter()
        .map(|((file1, file2), count)| {
            let file1_changes = file_changes[&file1];
            let file2_changes = file_changes[&file2];
            CouplingPair {
                jaccard: jaccard(count, file1_changes, file2_changes),
                file1,
                file2,
                count,
                file1_changes,
                file2_changes,
            }
        })
        .collect();
    pairs.sort_by(|a, b| {
        b.jaccard
            .total_cmp(&a.jaccard)
            .then_with(|| a.file1.cmp(&b.file1))
            .then_with(|| a.file2.cmp(&b.file2))
    });

    CouplingResult {
        pairs,
        file_changes,
        graph,
        nodes,
    }
}

/// A neighbour of a modified file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoupledFile {
    pub file: String,
    pub strength: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouplingImpact {
    pub max_coupling: f64,
    pub avg_coupling: f64,
    pub total_coupled_files: usize,
    /// Neighbours with strength above 0.5 that are not part of the change.
    pub strong_unmodified: usize,
    pub risk: RiskLevel,
    pub coupled_modified: Vec<CoupledFile>,
    pub coupled_unmodified: Vec<CoupledFile>,
}

pub fn classify_risk(max_coupling: f64, strong_unmodified: usize) -> RiskLevel {
    if max_coupling > 0.8 && strong_unmodified > 0 {
        RiskLevel::Critical
    } else if max_coupling > 0.7 && strong_unmodified > 0 {
        RiskLevel::High
    } else if max_coupling > 0.5 || strong_unmodified > 1 {
        RiskLevel::Medium
    } else if max_coupling > 0.3 {
        RiskLevel::Elevated
    } else {
        RiskLevel::Low
    }
}

/// For each modified file, split its coupled neighbours into those that
/// are also modified and those that are not.
pub fn coupling_impact(
    changes: &CurrentChanges,
    result: &CouplingResult,
) -> Vec<FileImpact<CouplingImpact>> {
    changes
        .keys()
        .map(|filename| {
            if !result.file_changes.contains_key(filename) {
                return FileImpact::new_file(filename);
            }

            let mut coupled_modified = Vec::new();
            let mut coupled_unmodified = Vec::new();
            for (file, count, strength) in result.neighbors(filename) {
                let entry = CoupledFile {
                    file,
                    strength,
                    count,
                };
                if changes.contains_key(&entry.file) {
                    coupled_modified.push(entry);
                } else {
                    coupled_unmodified.push(entry);
                }
            }
            sort_by_strength(&mut coupled_modified);
            sort_by_strength(&mut coupled_unmodified);

            let strengths: Vec<f64> = coupled_modified
                .iter()
                .chain(&coupled_unmodified)
                .map(|c| c.strength)
                .collect();
            let total_coupled_files = strengths.len();
            let max_coupling = strengths.iter().copied().fold(0.0, f64::max);
            let avg_coupling = if total_coupled_files > 0 {
                strengths.iter().sum::<f64>() / total_coupled_files as f64
            } else {
                0.0
            };
            let strong_unmodified = coupled_unmodified.iter().filter(|c| c.strength > 0.5).count();

            FileImpact::known(
                filename,
                CouplingImpact {
                    max_coupling,
                    avg_coupling,
                    total_coupled_files,
                    strong_unmodified,
                    risk: classify_risk(max_coupling, strong_unmodified),
                    coupled_modified,
                    coupled_unmodified,
                },
            )
        })
        .collect()
}

fn sort_by_strength(files: &mut [CoupledFile]) {
    files.sort_by(|a, b| b.strength.total_cmp(&a.strength).then_with(|| a.file.cmp(&b.file)));
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
