//! Metric computators and the engine that runs them.
//!
//! A computator turns the collected commit set into its own result type
//! and projects that result onto the uncommitted changes. Result and
//! impact shapes differ per computator, so the engine only handles them
//! through the type-erased `Metric` interface.

pub mod churn;
pub mod coupling;
mod engine;
pub mod entropy;
pub mod hotspots;
pub mod knowledge;
pub mod ownership;
pub mod risk;

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::metrics::risk::RiskLevel;
use crate::model::{Commit, CurrentChanges};

pub use engine::{MetricEngine, MetricResults};

/// A metric over commit history with a typed result and impact report.
pub trait Computator: Send + Sync {
    type Output: Send + Sync + 'static;
    type Impact: Serialize + Send + Sync + 'static;

    /// Stable identifier used for selection and JSON keys.
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    fn calculate(&self, commits: &[Commit]) -> Result<Self::Output>;

    fn analyze_impact(
        &self,
        changes: &CurrentChanges,
        result: &Self::Output,
    ) -> Result<Self::Impact>;

    /// Print the top `limit` entries of a result as a table.
    fn print_result(&self, result: &Self::Output, limit: usize);

    fn print_impact(&self, impact: &Self::Impact);

    /// JSON form of the top `limit` entries of a result.
    fn result_json(&self, result: &Self::Output, limit: usize) -> Result<Value>;

    fn impact_json(&self, impact: &Self::Impact) -> Result<Value> {
        Ok(serde_json::to_value(impact)?)
    }
}

/// Opaque result or impact value produced by a `Metric`.
pub struct MetricValue(Box<dyn Any + Send + Sync>);

impl MetricValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetricValue(..)")
    }
}

/// Object-safe view of a `Computator`, as stored by the engine.
pub trait Metric: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn calculate(&self, commits: &[Commit]) -> Result<MetricValue>;
    fn analyze_impact(&self, changes: &CurrentChanges, result: &MetricValue)
    -> Result<MetricValue>;
    fn print_result(&self, result: &MetricValue, limit: usize) -> Result<()>;
    fn print_impact(&self, impact: &MetricValue) -> Result<()>;
    fn result_json(&self, result: &MetricValue, limit: usize) -> Result<Value>;
    fn impact_json(&self, impact: &MetricValue) -> Result<Value>;
}

struct Erased<C>(C);

impl<C: Computator> Erased<C> {
    fn output<'a>(&self, value: &'a MetricValue) -> Result<&'a C::Output> {
        value
            .downcast_ref::<C::Output>()
            .ok_or_else(|| Error::ResultType(self.0.id().to_string()))
    }

    fn impact<'a>(&self, value: &'a MetricValue) -> Result<&'a C::Impact> {
        value
            .downcast_ref::<C::Impact>()
            .ok_or_else(|| Error::ResultType(self.0.id().to_string()))
    }
}

impl<C: Computator> Metric for Erased<C> {
    fn id(&self) -> &'static str {
        self.0.id()
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn description(&self) -> &'static str {
        self.0.description()
    }

    fn calculate(&self, commits: &[Commit]) -> Result<MetricValue> {
        self.0.calculate(commits).map(MetricValue::new)
    }

    fn analyze_impact(
        &self,
        changes: &CurrentChanges,
        result: &MetricValue,
    ) -> Result<MetricValue> {
        let output = self.output(result)?;
        self.0.analyze_impact(changes, output).map(MetricValue::new)
    }

    fn print_result(&self, result: &MetricValue, limit: usize) -> Result<()> {
        self.0.print_result(self.output(result)?, limit);
        Ok(())
    }

    fn print_impact(&self, impact: &MetricValue) -> Result<()> {
        self.0.print_impact(self.impact(impact)?);
        Ok(())
    }

    fn result_json(&self, result: &MetricValue, limit: usize) -> Result<Value> {
        self.0.result_json(self.output(result)?, limit)
    }

    fn impact_json(&self, impact: &MetricValue) -> Result<Value> {
        self.0.impact_json(self.impact(impact)?)
    }
}

/// Wrap a computator for registration with the engine.
pub fn boxed<C: Computator + 'static>(computator: C) -> Box<dyn Metric> {
    Box::new(Erased(computator))
}

/// Per-file impact entry. Files with no history are flagged `new_file`
/// and carry no metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileImpact<M> {
    pub filename: String,
    pub new_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<M>,
}

impl<M> FileImpact<M> {
    pub fn new_file(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            new_file: true,
            metrics: None,
        }
    }

    pub fn known(filename: impl Into<String>, metrics: M) -> Self {
        Self {
            filename: filename.into(),
            new_file: false,
            metrics: Some(metrics),
        }
    }
}

/// Impact rows ordered by risk, highest first, with new files last.
/// Rows of equal risk keep their input order.
pub fn by_risk<M>(
    impact: &[FileImpact<M>],
    risk: impl Fn(&M) -> RiskLevel,
) -> Vec<&FileImpact<M>> {
    let mut rows: Vec<&FileImpact<M>> = impact.iter().collect();
    rows.sort_by_key(|f| f.metrics.as_ref().map_or(u8::MAX, |m| risk(m).sort_key()));
    rows
}

/// Change counts per file and author: one per file entry in a commit.
pub fn changes_by_author(commits: &[Commit]) -> BTreeMap<String, BTreeMap<String, u64>> {
    let mut tally: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    for commit in commits {
        for file in &commit.files {
            *tally
                .entry(file.filename.clone())
                .or_default()
                .entry(commit.author.clone())
                .or_insert(0) += 1;
        }
    }
    tally
}

/// The author with the most changes; ties go to the lexicographically
/// smallest name. `None` for an empty map.
pub fn dominant_author(counts: &BTreeMap<String, u64>) -> Option<(&str, u64)> {
    let mut best: Option<(&str, u64)> = None;
    for (author, &count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((author.as_str(), count));
        }
    }
    best
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
