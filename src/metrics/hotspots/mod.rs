pub mod analyzer;
mod report;

use serde_json::Value;

use crate::error::Result;
use crate::metrics::{Computator, FileImpact};
use crate::model::{Commit, CurrentChanges};
use analyzer::{FileHotspot, HotspotImpact, compute_hotspots, hotspot_impact};

pub struct HotspotComputator;

impl Computator for HotspotComputator {
    type Output = Vec<FileHotspot>;
    type Impact = Vec<FileImpact<HotspotImpact>>;

    fn id(&self) -> &'static str {
        "hotspot_analysis"
    }

    fn name(&self) -> &'static str {
        "Hotspot Analysis"
    }

    fn description(&self) -> &'static str {
        "Identifies files with both high complexity and change frequency."
    }

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output> {
        Ok(compute_hotspots(commits))
    }

    fn analyze_impact(&self, changes: &CurrentChanges, result: &Self::Output) -> Result<Self::Impact> {
        Ok(hotspot_impact(changes, result))
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
