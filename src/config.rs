//! Collector configuration and the optional `.gitsect.toml` file.
//!
//! Values resolve in three layers: command-line flags win over the
//! config file, which wins over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".gitsect.toml";
pub const CACHE_DIR_NAME: &str = ".gitsect_cache";
pub const DEFAULT_LIMIT: usize = 10;

/// Everything the history collector needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub repo_path: PathBuf,
    pub max_commits: Option<u32>,
    pub since_days: Option<u32>,
    pub file_patterns: Vec<String>,
    pub cache_dir: PathBuf,
    pub use_cache: bool,
}

impl CollectorConfig {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            max_commits: None,
            since_days: None,
            file_patterns: Vec::new(),
            cache_dir: default_cache_dir(),
            use_cache: true,
        }
    }
}

/// `~/.gitsect_cache`, or `./.gitsect_cache` when there is no home directory.
pub fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CACHE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(CACHE_DIR_NAME))
}

/// Contents of a `.gitsect.toml` file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub max_commits: Option<u32>,
    pub since_days: Option<u32>,
    pub file_patterns: Option<Vec<String>>,
    pub metrics: Option<Vec<String>>,
    pub limit: Option<usize>,
    pub cache_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    /// Load the explicit file if given, else `<repo>/.gitsect.toml` when it
    /// exists, else an empty config.
    pub fn load(explicit: Option<&Path>, repo: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config file");
            return Self::from_path(path);
        }
        let implicit = repo.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            debug!(path = %implicit.display(), "loading config file");
            return Self::from_path(&implicit);
        }
        Ok(Self::default())
    }
}

/// Options given on the command line. `None` or empty means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub max_commits: Option<u32>,
    pub since_days: Option<u32>,
    pub file_patterns: Vec<String>,
    pub metrics: Vec<String>,
    pub limit: Option<usize>,
    pub cache_dir: Option<PathBuf>,
    pub no_cache: bool,
}

/// A fully resolved run: collector settings plus metric selection and limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub collector: CollectorConfig,
    pub metrics: Option<Vec<String>>,
    pub limit: usize,
}

pub fn resolve(repo_path: &Path, file: FileConfig, cli: Overrides) -> Settings {
    let file_patterns = if cli.file_patterns.is_empty() {
        file.file_patterns.unwrap_or_default()
    } else {
        cli.file_patterns
    };
    let metrics = if cli.metrics.is_empty() {
        file.metrics
    } else {
        Some(cli.metrics)
    };

    let mut collector = CollectorConfig::new(repo_path);
    collector.max_commits = bound(cli.max_commits.or(file.max_commits));
    collector.since_days = bound(cli.since_days.or(file.since_days));
    collector.file_patterns = file_patterns;
    collector.use_cache = !cli.no_cache;
    if let Some(dir) = cli.cache_dir.or(file.cache_dir) {
        collector.cache_dir = dir;
    }

    Settings {
        collector,
        metrics,
        limit: cli.limit.or(file.limit).unwrap_or(DEFAULT_LIMIT),
    }
}

/// A zero commit or day bound means unbounded.
fn bound(value: Option<u32>) -> Option<u32> {
    value.filter(|&n| n > 0)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
