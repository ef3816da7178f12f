pub mod analyzer;
mod report;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::metrics::{Computator, FileImpact};
use crate::model::{Commit, CurrentChanges};
use analyzer::{CouplingImpact, CouplingPair, CouplingResult, compute_coupling, coupling_impact};

pub struct CouplingComputator;

/// JSON view of a coupling result. The graph is not serialized.
#[derive(Serialize)]
struct JsonResult<'a> {
    pairs: &'a [CouplingPair],
    total_pairs: usize,
    file_changes: &'a BTreeMap<String, u32>,
}

impl Computator for CouplingComputator {
    type Output = CouplingResult;
    type Impact = Vec<FileImpact<CouplingImpact>>;

    fn id(&self) -> &'static str {
        "change_coupling"
    }

    fn name(&self) -> &'static str {
        "Change Coupling"
    }

    fn description(&self) -> &'static str {
        "Measures how frequently files change together."
    }

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output> {
        Ok(compute_coupling(commits))
    }

    fn analyze_impact(&self, changes: &CurrentChanges, result: &Self::Output) -> Result<Self::Impact> {
        Ok(coupling_impact(changes, result))
    }

    fn print_result(&self, result: &Self::Output, limit: usize) {
        let shown = limit.min(result.pairs.len());
        report::print_report(&result.pairs[..shown], result.pairs.len());
    }

    fn print_impact(&self, impact: &Self::Impact) {
        report::print_impact(impact);
    }

    fn result_json(&self, result: &Self::Output, limit: usize) -> Result<Value> {
        let shown = limit.min(result.pairs.len());
        Ok(serde_json::to_value(JsonResult {
            pairs: &result.pairs[..shown],
            total_pairs: result.pairs.len(),
            file_changes: &result.file_changes,
        })?)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
