pub mod analyzer;
mod report;

use serde_json::Value;

use crate::error::Result;
use crate::metrics::{Computator, FileImpact};
use crate::model::{Commit, CurrentChanges};
use analyzer::{EntropyImpact, FileEntropy, compute_entropy, entropy_impact};

pub struct EntropyComputator;

impl Computator for EntropyComputator {
    type Output = Vec<FileEntropy>;
    type Impact = Vec<FileImpact<EntropyImpact>>;

    fn id(&self) -> &'static str {
        "change_entropy"
    }

    fn name(&self) -> &'static str {
        "Change Entropy"
    }

    fn description(&self) -> &'static str {
        "Measures the complexity and distribution of changes."
    }

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output> {
        Ok(compute_entropy(commits))
    }

    fn analyze_impact(&self, changes: &CurrentChanges, result: &Self::Output) -> Result<Self::Impact> {
        Ok(entropy_impact(changes, result))
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
