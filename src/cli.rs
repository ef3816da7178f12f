/// CLI argument definitions for the `gitsect` command.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "gitsect", version, about = "Change-history risk metrics for git repositories")]
pub struct Cli {
    /// Config file (default: <repo>/.gitsect.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for cached history (default: ~/.gitsect_cache)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// History selection shared by `metrics` and `impact`.
#[derive(Args)]
pub struct SelectionArgs {
    /// Repository to analyze (default: current directory)
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Metric ids to run (default: all)
    #[arg(short, long = "metrics", value_name = "ID")]
    pub metrics: Vec<String>,

    /// Only read the most recent N commits
    #[arg(long)]
    pub max_commits: Option<u32>,

    /// Only read commits from the last N days
    #[arg(long)]
    pub since_days: Option<u32>,

    /// Restrict to matching files: exact name, `*.ext`, or a `*` prefix pattern
    #[arg(short, long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Ignore cached history and do not write a new entry
    #[arg(long)]
    pub no_cache: bool,
}

impl SelectionArgs {
    pub fn overrides(&self, limit: Option<usize>, cache_dir: Option<PathBuf>) -> Overrides {
        Overrides {
            max_commits: self.max_commits,
            since_days: self.since_days,
            file_patterns: self.patterns.clone(),
            metrics: self.metrics.clone(),
            limit,
            cache_dir,
            no_cache: self.no_cache,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute change metrics over the commit history
    #[command(long_about = cli_help::METRICS)]
    Metrics {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Rows shown per metric (default: 10)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Clear the history cache and exit
        #[arg(long)]
        clear_cache: bool,
    },

    /// Score uncommitted changes against the history metrics
    #[command(long_about = cli_help::IMPACT)]
    Impact {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List the available metrics
    Plugins {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove all cached history
    ClearCache,

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}
