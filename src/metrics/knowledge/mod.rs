pub mod analyzer;
mod report;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::metrics::Computator;
use crate::metrics::risk::RiskLevel;
use crate::model::{Commit, CurrentChanges};
use analyzer::{AuthorKnowledge, KnowledgeImpact, KnowledgeResult, compute_knowledge, knowledge_impact};

pub struct KnowledgeComputator;

#[derive(Serialize)]
struct JsonResult<'a> {
    bus_factor: usize,
    knowledge_redundancy: f64,
    file_count: usize,
    author_count: usize,
    team_risk: RiskLevel,
    authors: &'a [AuthorKnowledge],
}

impl Computator for KnowledgeComputator {
    type Output = KnowledgeResult;
    type Impact = KnowledgeImpact;

    fn id(&self) -> &'static str {
        "knowledge_distribution"
    }

    fn name(&self) -> &'static str {
        "Knowledge Distribution"
    }

    fn description(&self) -> &'static str {
        "Analyzes how knowledge is spread across the team."
    }

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output> {
        Ok(compute_knowledge(commits))
    }

    fn analyze_impact(&self, changes: &CurrentChanges, result: &Self::Output) -> Result<Self::Impact> {
        Ok(knowledge_impact(changes, result))
    }

    fn print_result(&self, result: &Self::Output, limit: usize) {
        report::print_report(result, limit);
    }

    fn print_impact(&self, impact: &Self::Impact) {
        report::print_impact(impact);
    }

    // Per-file ownership is already reported by developer_ownership.
    fn result_json(&self, result: &Self::Output, limit: usize) -> Result<Value> {
        let json = JsonResult {
            bus_factor: result.bus_factor,
            knowledge_redundancy: result.knowledge_redundancy,
            file_count: result.file_count,
            author_count: result.author_count,
            team_risk: result.team_risk(),
            authors: &result.authors[..limit.min(result.authors.len())],
        };
        Ok(serde_json::to_value(json)?)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
