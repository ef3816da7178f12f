pub mod analyzer;
mod report;

use serde_json::Value;

use crate::error::Result;
use crate::metrics::{Computator, FileImpact};
use crate::model::{Commit, CurrentChanges};
use analyzer::{ChurnImpact, FileChurn, churn_impact, compute_churn};

pub struct ChurnComputator;

impl Computator for ChurnComputator {
    type Output = Vec<FileChurn>;
    type Impact = Vec<FileImpact<ChurnImpact>>;

    fn id(&self) -> &'static str {
        "code_churn"
    }

    fn name(&self) -> &'static str {
        "Code Churn"
    }

    fn description(&self) -> &'static str {
        "Measures the amount of code added, modified, or deleted over time."
    }

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output> {
        Ok(compute_churn(commits))
    }

    fn analyze_impact(&self, changes: &CurrentChanges, result: &Self::Output) -> Result<Self::Impact> {
        Ok(churn_impact(changes, result))
    }

    fn print_result(&self, result: &Self::Output, limit: usize) {
        report::print_report(&result[..limit.min(result.len())], result.len());
    }

    fn print_impact(&self, impact: &Self::Impact) {
        report::print_impact(impact);
    }

    fn result_json(&self, result: &Self::Output, limit: usize) -> Result<Value> {
        Ok(serde_json::to_value(&result[..limit.min(result.len())])?)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
