//! History collection: one `git log` per run, parsed in parallel and
//! cached on disk keyed by the collection parameters.

pub mod cache;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::CollectorConfig;
use crate::error::Result;
use crate::git::diffstat::{diff_stat_args, parse_diff_stat};
use crate::git::log::{log_args, parse_log};
use crate::git::patterns::FilePatterns;
use crate::git::{self, CommandRunner, GitCommand};
use crate::model::{Commit, CurrentChanges};

pub use cache::HistoryCache;

pub struct HistoryCollector {
    config: CollectorConfig,
    root: PathBuf,
    patterns: FilePatterns,
    cache: HistoryCache,
    runner: Box<dyn CommandRunner>,
}

impl HistoryCollector {
    /// Locate the repository containing `config.repo_path` and prepare to run
    /// the `git` binary against its working tree.
    pub fn open(config: CollectorConfig) -> Result<Self> {
        let root = git::discover_root(&config.repo_path)?;
        let runner = Box::new(GitCommand::new(&root));
        Ok(Self::with_runner(config, root, runner))
    }

    pub fn with_runner(
        config: CollectorConfig,
        root: PathBuf,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        let patterns = FilePatterns::new(&config.file_patterns);
        let cache = HistoryCache::new(&config.cache_dir);
        Self {
            config,
            root,
            patterns,
            cache,
            runner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cache_key(&self) -> String {
        HistoryCache::key(
            &self.root,
            self.config.max_commits,
            self.config.since_days,
            &self.config.file_patterns,
        )
    }

    /// Return the commit set for this configuration, from cache when a fresh
    /// entry exists. Order is not meaningful.
    pub fn collect_history(&self) -> Result<Vec<Commit>> {
        let key = self.cache_key();
        if self.config.use_cache
            && let Some(commits) = self.cache.load(&key)
        {
            return Ok(commits);
        }

        let args = log_args(self.config.max_commits, self.config.since_days);
        let output = self.runner.run(&args)?;
        let commits = parse_log(&output, &self.patterns);
        info!("collected {} commits from {}", commits.len(), self.root.display());

        if self.config.use_cache
            && let Err(e) = self.cache.store(&key, &commits)
        {
            warn!("could not write history cache: {e}");
        }
        Ok(commits)
    }

    /// Uncommitted working-tree changes, filtered by the same file patterns.
    pub fn get_current_changes(&self) -> Result<CurrentChanges> {
        let output = self.runner.run(&diff_stat_args())?;
        Ok(parse_diff_stat(&output, &self.patterns))
    }

    pub fn cache_dir(&self) -> &Path {
        self.cache.dir()
    }

    pub fn clear_cache(&self) -> Result<usize> {
        self.cache.clear()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
