pub mod analyzer;
mod report;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::metrics::{Computator, FileImpact};
use crate::model::{Commit, CurrentChanges};
use analyzer::{
    FileOwnership, OwnershipCategory, OwnershipImpact, compute_ownership, ownership_impact,
};

pub struct OwnershipComputator;

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    ownership: &'a FileOwnership,
    category: OwnershipCategory,
}

impl Computator for OwnershipComputator {
    type Output = Vec<FileOwnership>;
    type Impact = Vec<FileImpact<OwnershipImpact>>;

    fn id(&self) -> &'static str {
        "developer_ownership"
    }

    fn name(&self) -> &'static str {
        "Developer Ownership"
    }

    fn description(&self) -> &'static str {
        "Measures the concentration of changes among developers."
    }

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output> {
        Ok(compute_ownership(commits))
    }

    fn analyze_impact(&self, changes: &CurrentChanges, result: &Self::Output) -> Result<Self::Impact> {
        Ok(ownership_impact(changes, result))
    }

    fn print_result(&self, result: &Self::Output, limit: usize) {
        report::print_report(&result[..limit.min(result.len())], result.len());
    }

    fn print_impact(&self, impact: &Self::Impact) {
        report::print_impact(impact);
    }

    fn result_json(&self, result: &Self::Output, limit: usize) -> Result<Value> {
        let entries: Vec<JsonEntry> = result
            .iter()
            .take(limit)
            .map(|o| JsonEntry {
                ownership: o,
                category: o.category(),
            })
            .collect();
        Ok(serde_json::to_value(entries)?)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
