//! Entry points for the `gitsect` subcommands.
//!
//! Each `run_*` function resolves its settings, drives the collector and
//! the metric engine, and renders either tables or a single JSON object
//! keyed by metric id.

use std::error::Error;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::info;

use crate::config::{self, FileConfig, Overrides, Settings};
use crate::error;
use crate::history::{HistoryCache, HistoryCollector};
use crate::metrics::{MetricEngine, MetricResults};
use crate::report_helpers;

/// Merge the config file (explicit or `<repo>/.gitsect.toml`) with CLI overrides.
pub fn load_settings(
    repo: &Path,
    config_file: Option<&Path>,
    overrides: Overrides,
) -> error::Result<Settings> {
    let file = FileConfig::load(config_file, repo)?;
    Ok(config::resolve(repo, file, overrides))
}

/// The built-in engine restricted to `selection`. Unknown ids are skipped
/// with a warning; a selection where nothing is known is an error.
pub fn select_engine(selection: Option<&[String]>) -> error::Result<MetricEngine> {
    let mut engine = MetricEngine::builtin();
    let unknown = engine.activate(selection);
    if engine.active_ids().is_empty() && !unknown.is_empty() {
        return Err(error::Error::UnknownMetric(unknown.join(", ")));
    }
    Ok(engine)
}

/// JSON object keyed by active metric id; failed metrics map to `null`.
pub fn results_json(
    engine: &MetricEngine,
    results: &MetricResults,
    limit: usize,
) -> error::Result<Value> {
    let mut out = Map::new();
    for id in engine.active_ids() {
        let value = match (engine.metric(id), results.get(id)) {
            (Some(metric), Some(Some(result))) => metric.result_json(result, limit)?,
            _ => Value::Null,
        };
        out.insert(id.to_string(), value);
    }
    Ok(Value::Object(out))
}

pub fn impacts_json(engine: &MetricEngine, impacts: &MetricResults) -> error::Result<Value> {
    let mut out = Map::new();
    for id in engine.active_ids() {
        let value = match (engine.metric(id), impacts.get(id)) {
            (Some(metric), Some(Some(impact))) => metric.impact_json(impact)?,
            _ => Value::Null,
        };
        out.insert(id.to_string(), value);
    }
    Ok(Value::Object(out))
}

fn print_results(engine: &MetricEngine, results: &MetricResults, limit: usize) -> error::Result<()> {
    for id in engine.active_ids() {
        let Some(metric) = engine.metric(id) else {
            continue;
        };
        match results.get(id) {
            Some(Some(result)) => metric.print_result(result, limit)?,
            _ => println!("{}: not available (see log for details)", metric.name()),
        }
        println!();
    }
    Ok(())
}

fn print_impacts(engine: &MetricEngine, impacts: &MetricResults) -> error::Result<()> {
    for id in engine.active_ids() {
        let Some(metric) = engine.metric(id) else {
            continue;
        };
        match impacts.get(id) {
            Some(Some(impact)) => metric.print_impact(impact)?,
            _ => println!("{}: not available (see log for details)", metric.name()),
        }
        println!();
    }
    Ok(())
}

pub fn run_metrics(settings: Settings, json: bool, clear_cache: bool) -> Result<(), Box<dyn Error>> {
    let collector = HistoryCollector::open(settings.collector)?;
    if clear_cache {
        let removed = collector.clear_cache()?;
        println!(
            "Cleared {removed} cached history entries from {}.",
            collector.cache_dir().display()
        );
        return Ok(());
    }

    let engine = select_engine(settings.metrics.as_deref())?;
    let commits = collector.collect_history()?;
    info!(commits = commits.len(), "computing metrics");
    let results = engine.calculate_metrics(&commits);

    if json {
        report_helpers::print_json_stdout(&results_json(&engine, &results, settings.limit)?)?;
    } else {
        if commits.is_empty() {
            println!("No commits found.");
            return Ok(());
        }
        print_results(&engine, &results, settings.limit)?;
    }
    Ok(())
}

pub fn run_impact(settings: Settings, json: bool) -> Result<(), Box<dyn Error>> {
    let collector = HistoryCollector::open(settings.collector)?;
    let engine = select_engine(settings.metrics.as_deref())?;

    let changes = collector.get_current_changes()?;
    if changes.is_empty() {
        if json {
            report_helpers::print_json_stdout(&Value::Object(Map::new()))?;
        } else {
            println!("No uncommitted changes found.");
        }
        return Ok(());
    }

    let commits = collector.collect_history()?;
    let results = engine.calculate_metrics(&commits);
    let impacts = engine.analyze_impact(&changes, &results);

    if json {
        report_helpers::print_json_stdout(&impacts_json(&engine, &impacts)?)?;
    } else {
        println!(
            "{} uncommitted files changed in {}.",
            changes.len(),
            collector.root().display()
        );
        println!();
        print_impacts(&engine, &impacts)?;
    }
    Ok(())
}

pub fn run_plugins(json: bool) -> Result<(), Box<dyn Error>> {
    let available = MetricEngine::builtin().available();
    if json {
        report_helpers::print_json_stdout(&available)?;
        return Ok(());
    }

    let id_width = report_helpers::max_name_width(available.iter().map(|m| m.id), 2);
    let separator = report_helpers::separator(78);
    println!("Available metrics");
    println!("{separator}");
    for m in &available {
        println!(" {}  {}", report_helpers::pad(m.id, id_width), m.name);
        println!(" {}  {}", report_helpers::pad("", id_width), m.description);
    }
    println!("{separator}");
    Ok(())
}

/// Clear the cache directory chosen by `--cache-dir`, the config file, or
/// the default, in that order.
pub fn run_clear_cache(
    cache_dir: Option<PathBuf>,
    config_file: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let dir = match cache_dir {
        Some(dir) => dir,
        None => FileConfig::load(config_file, Path::new("."))?
            .cache_dir
            .unwrap_or_else(config::default_cache_dir),
    };
    let removed = HistoryCache::new(&dir).clear()?;
    println!("Cleared {removed} cached history entries from {}.", dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
