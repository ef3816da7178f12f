//! Long help text for the `gitsect` subcommands.

pub const METRICS: &str = "\
Collect the commit history of a repository and compute change metrics.

Available metrics (select with -m, repeatable; default: all):
  code_churn              lines added + deleted per file
  change_coupling         files that change together (Jaccard strength)
  change_entropy          how evenly changes spread over authors
  developer_ownership     dominant author and ownership ratio per file
  hotspot_analysis        change frequency \u{00d7} average change size
  knowledge_distribution  coverage, depth and bus factor of the team

Churn is counted from name-status, not real line deltas:
  added file = 1 addition, deleted file = 1 deletion,
  any other change = 1 addition + 1 deletion.

History is cached per repository and selection for 24 hours
(default location: ~/.gitsect_cache).

Examples:
  gitsect metrics                          # all metrics, current directory
  gitsect metrics --repo ../app -l 20      # top 20 rows per metric
  gitsect metrics -m code_churn -p '*.rs'  # churn over Rust files only
  gitsect metrics --since-days 90 --json   # last 90 days, machine-readable";

pub const IMPACT: &str = "\
Assess the risk of the uncommitted changes in the working tree.

Metrics are computed over the history as with `gitsect metrics`, then each
modified file is scored against them: churn and hotspot percentiles, coupled
files left unmodified, ownership concentration and team knowledge.
Files with no history are reported as new.

Risk levels, highest first: CRITICAL, HIGH, MEDIUM, ELEVATED, LOW.

Examples:
  gitsect impact                           # all metrics
  gitsect impact -m change_coupling        # only coupling impact
  gitsect impact --json                    # machine-readable";
