use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::{debug, warn};

use super::churn::ChurnComputator;
use super::coupling::CouplingComputator;
use super::entropy::EntropyComputator;
use super::hotspots::HotspotComputator;
use super::knowledge::KnowledgeComputator;
use super::ownership::OwnershipComputator;
use super::{Metric, MetricValue, boxed};
use crate::error::{Error, Result};
use crate::model::{Commit, CurrentChanges};

pub type Constructor = fn() -> Box<dyn Metric>;

/// Results keyed by metric id. `None` marks a metric that failed.
pub type MetricResults = BTreeMap<String, Option<MetricValue>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Registry of metric constructors plus the currently active set.
///
/// Every metric runs in isolation: an error or a panic inside one
/// computator leaves a `None` entry for its id and the others still run.
pub struct MetricEngine {
    registry: Vec<(&'static str, Constructor)>,
    /// Active metrics under the id they were registered with.
    active: Vec<(&'static str, Box<dyn Metric>)>,
}

impl MetricEngine {
    /// An engine with nothing registered.
    pub fn empty() -> Self {
        Self {
            registry: Vec::new(),
            active: Vec::new(),
        }
    }

    /// An engine with every built-in metric registered and active.
    pub fn builtin() -> Self {
        let mut engine = Self::empty();
        engine.register("code_churn", || boxed(ChurnComputator));
        engine.register("change_coupling", || boxed(CouplingComputator));
        engine.register("change_entropy", || boxed(EntropyComputator));
        engine.register("developer_ownership", || boxed(OwnershipComputator));
        engine.register("hotspot_analysis", || boxed(HotspotComputator));
        engine.register("knowledge_distribution", || boxed(KnowledgeComputator));
        engine.activate(None);
        engine
    }

    /// Register a constructor under `id`, replacing any previous one.
    /// The active set is not changed until the next `activate`.
    pub fn register(&mut self, id: &'static str, constructor: Constructor) {
        match self.registry.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = constructor,
            None => self.registry.push((id, constructor)),
        }
    }

    /// Activate the given ids, or every registered metric for `None`.
    /// Unknown ids are logged and returned.
    pub fn activate(&mut self, ids: Option<&[String]>) -> Vec<String> {
        let mut unknown = Vec::new();
        self.active = match ids {
            None => self.registry.iter().map(|(id, make)| (*id, make())).collect(),
            Some(ids) => {
                let mut active: Vec<(&'static str, Box<dyn Metric>)> = Vec::new();
                for id in ids {
                    match self.registry.iter().find(|(known, _)| *known == id.as_str()) {
                        Some((known, make)) => {
                            if !active.iter().any(|(a, _)| a == known) {
                                active.push((*known, make()));
                            }
                        }
                        None => {
                            warn!("unknown metric: {id}");
                            unknown.push(id.clone());
                        }
                    }
                }
                active
            }
        };
        debug!(active = ?self.active_ids(), "metrics activated");
        unknown
    }

    pub fn active_ids(&self) -> Vec<&'static str> {
        self.active.iter().map(|(id, _)| *id).collect()
    }

    /// Id, name and description of every registered metric.
    pub fn available(&self) -> Vec<MetricInfo> {
        self.registry
            .iter()
            .map(|(id, make)| {
                let metric = make();
                MetricInfo {
                    id,
                    name: metric.name(),
                    description: metric.description(),
                }
            })
            .collect()
    }

    pub fn metric(&self, id: &str) -> Option<&dyn Metric> {
        self.active
            .iter()
            .find(|(active, _)| *active == id)
            .map(|(_, m)| m.as_ref())
    }

    pub fn calculate_metrics(&self, commits: &[Commit]) -> MetricResults {
        self.active
            .iter()
            .map(|(id, metric)| {
                let value = isolated(id, "calculate", || metric.calculate(commits));
                (id.to_string(), value)
            })
            .collect()
    }

    /// Project each successful result onto `changes`. Metrics whose result
    /// is missing or `None` are skipped.
    pub fn analyze_impact(&self, changes: &CurrentChanges, results: &MetricResults) -> MetricResults {
        let mut impacts = MetricResults::new();
        for (id, metric) in &self.active {
            let Some(Some(result)) = results.get(*id) else {
                debug!(metric = *id, "no result, skipping impact");
                continue;
            };
            let impact = isolated(id, "impact analysis", || metric.analyze_impact(changes, result));
            impacts.insert(id.to_string(), impact);
        }
        impacts
    }
}

fn isolated<T>(id: &str, stage: &str, f: impl FnOnce() -> Result<T>) -> Option<T> {
    match catch_panic(id, f) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(metric = id, "{stage} failed: {e}");
            None
        }
    }
}

/// Run `f`, turning a panic into `Error::Metric`.
fn catch_panic<T>(id: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(Error::Metric {
            id: id.to_string(),
            message: format!("panicked: {}", panic_message(payload.as_ref())),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
