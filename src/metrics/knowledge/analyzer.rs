//! Knowledge distribution: how much of the codebase each author knows,
//! and how many authors the project could lose before most files lose
//! their dominant owner.
//!
//! - Coverage: files the author touched / all files.
//! - Depth: mean ownership ratio over the files the author dominates.
//! - Bus factor: the fewest authors, taken by owned-file count, whose
//!   owned files cover at least half of all files.
//! - Redundancy: mean number of distinct authors per file.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::metrics::risk::RiskLevel;
use crate::metrics::{FileImpact, changes_by_author, dominant_author};
use crate::model::{Commit, CurrentChanges};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorKnowledge {
    pub author: String,
    pub coverage: f64,
    pub depth: f64,
    pub owned_files: usize,
    pub files_changed: usize,
    pub commit_count: usize,
    pub bus_factor_contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileKnowledge {
    pub dominant_author: String,
    pub ownership_ratio: f64,
    pub contributor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeResult {
    pub bus_factor: usize,
    pub knowledge_redundancy: f64,
    /// Ranked by coverage × depth descending, then author name.
    pub authors: Vec<AuthorKnowledge>,
    pub file_ownership: BTreeMap<String, FileKnowledge>,
    pub file_count: usize,
    pub author_count: usize,
}

impl KnowledgeResult {
    /// Team risk from bus factor and redundancy. A history that touched no
    /// files has nothing to lose, so it is Low even though its bus factor
    /// of 0 would otherwise rank Critical.
    pub fn team_risk(&self) -> RiskLevel {
        if self.file_count == 0 {
            return RiskLevel::Low;
        }
        team_risk(self.bus_factor, self.knowledge_redundancy)
    }

    pub fn author(&self, name: &str) -> Option<&AuthorKnowledge> {
        self.authors.iter().find(|a| a.author == name)
    }
}

pub fn team_risk(bus_factor: usize, redundancy: f64) -> RiskLevel {
    if bus_factor <= 1 {
        RiskLevel::Critical
    } else if bus_factor <= 2 {
        RiskLevel::High
    } else if redundancy < 1.5 {
        RiskLevel::Medium
    } else if bus_factor <= 3 {
        RiskLevel::Elevated
    } else {
        RiskLevel::Low
    }
}

/// Greedy bus factor over `(author, owned_files)`. Authors are taken by
/// owned-file count descending, ties by name, until their files reach
/// half of `file_count`. 0 when there are no files.
pub fn bus_factor(owned: &[(&str, usize)], file_count: usize) -> usize {
    if file_count == 0 {
        return 0;
    }
    let mut ranked = owned.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut cumulative = 0;
    let mut factor = 0;
    for (_, files) in ranked {
        cumulative += files;
        factor += 1;
        if cumulative * 2 >= file_count {
            break;
        }
    }
    factor
}

pub fn compute_knowledge(commits: &[Commit]) -> KnowledgeResult {
    let by_file = changes_by_author(commits);

    let mut commit_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for commit in commits {
        *commit_counts.entry(commit.author.as_str()).or_insert(0) += 1;
    }

    let mut files_by_author: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut file_ownership: BTreeMap<String, FileKnowledge> = BTreeMap::new();
    for (filename, authors) in &by_file {
        for author in authors.keys() {
            files_by_author
                .entry(author.as_str())
                .or_default()
                .insert(filename.as_str());
        }
        let total: u64 = authors.values().sum();
        if let Some((dominant, count)) = dominant_author(authors)
            && total > 0
        {
            file_ownership.insert(
                filename.clone(),
                FileKnowledge {
                    dominant_author: dominant.to_string(),
                    ownership_ratio: count as f64 / total as f64,
                    contributor_count: authors.len(),
                },
            );
        }
    }

    let file_count = by_file.len();
    let share = |n: usize| {
        if file_count > 0 {
            n as f64 / file_count as f64
        } else {
            0.0
        }
    };

    let mut authors: Vec<AuthorKnowledge> = commit_counts
        .iter()
        .map(|(&author, &commit_count)| {
            let files_changed = files_by_author.get(author).map_or(0, |f| f.len());
            let owned: Vec<f64> = file_ownership
                .values()
                .filter(|o| o.dominant_author == author)
                .map(|o| o.ownership_ratio)
                .collect();
            let depth = if owned.is_empty() {
                0.0
            } else {
                owned.iter().sum::<f64>() / owned.len() as f64
            };
            AuthorKnowledge {
                author: author.to_string(),
                coverage: share(files_changed),
                depth,
                owned_files: owned.len(),
                files_changed,
                commit_count,
                bus_factor_contribution: share(owned.len()),
            }
        })
        .collect();
    authors.sort_by(|a, b| {
        (b.coverage * b.depth)
            .total_cmp(&(a.coverage * a.depth))
            .then_with(|| a.author.cmp(&b.author))
    });

    let owned: Vec<(&str, usize)> = authors
        .iter()
        .map(|a| (a.author.as_str(), a.owned_files))
        .collect();
    let factor = bus_factor(&owned, file_count);

    let knowledge_redundancy = if file_count > 0 {
        by_file.values().map(|a| a.len()).sum::<usize>() as f64 / file_count as f64
    } else {
        0.0
    };

    KnowledgeResult {
        bus_factor: factor,
        knowledge_redundancy,
        author_count: authors.len(),
        authors,
        file_ownership,
        file_count,
    }
}

pub fn knowledge_risk(ratio: f64, contributors: usize, depth: f64) -> RiskLevel {
    if ratio > 0.9 && contributors == 1 && depth > 0.8 {
        RiskLevel::Critical
    } else if ratio > 0.8 && contributors <= 2 {
        RiskLevel::High
    } else if contributors < 3 || ratio > 0.7 {
        RiskLevel::Medium
    } else if contributors < 4 {
        RiskLevel::Elevated
    } else {
        RiskLevel::Low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamKnowledge {
    pub bus_factor: usize,
    pub knowledge_redundancy: f64,
    pub file_count: usize,
    pub author_count: usize,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileKnowledgeImpact {
    pub dominant_author: String,
    pub ownership_ratio: f64,
    pub contributor_count: usize,
    pub author_knowledge_depth: f64,
    pub author_knowledge_coverage: f64,
    pub knowledge_risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeImpact {
    pub team: TeamKnowledge,
    pub files: Vec<FileImpact<FileKnowledgeImpact>>,
}

pub fn knowledge_impact(changes: &CurrentChanges, result: &KnowledgeResult) -> KnowledgeImpact {
    let team = TeamKnowledge {
        bus_factor: result.bus_factor,
        knowledge_redundancy: result.knowledge_redundancy,
        file_count: result.file_count,
        author_count: result.author_count,
        risk: result.team_risk(),
    };

    let files = changes
        .keys()
        .map(|filename| match result.file_ownership.get(filename) {
            None => FileImpact::new_file(filename),
            Some(o) => {
                let (depth, coverage) = result
                    .author(&o.dominant_author)
                    .map_or((0.0, 0.0), |a| (a.depth, a.coverage));
                FileImpact::known(
                    filename,
                    FileKnowledgeImpact {
                        dominant_author: o.dominant_author.clone(),
                        ownership_ratio: o.ownership_ratio,
                        contributor_count: o.contributor_count,
                        author_knowledge_depth: depth,
                        author_knowledge_coverage: coverage,
                        knowledge_risk: knowledge_risk(o.ownership_ratio, o.contributor_count, depth),
                    },
                )
            }
        })
        .collect();

    KnowledgeImpact { team, files }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
