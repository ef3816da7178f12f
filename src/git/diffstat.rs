/// Parsing of `git diff --stat` output into per-file current changes.
///
/// Lines look like `path | 10 +++++-----`. Insertions and deletions are
/// read from the `+`/`-` graph; when git prints no graph (binary-sized or
/// graph-less lines such as `path | 7`), the count is split evenly with
/// the odd unit going to insertions. Lines that do not fit the shape,
/// including the trailing summary and `Bin` lines, are skipped.
use super::patterns::FilePatterns;
use crate::model::{CurrentChange, CurrentChanges};

/// Arguments for the working-tree diff-stat invocation.
pub fn diff_stat_args() -> Vec<String> {
    vec![
        "diff".to_string(),
        "--stat=4096,4096".to_string(),
        "--no-color".to_string(),
    ]
}

/// Parse a single diff-stat line. Returns `None` for malformed lines.
pub fn parse_line(line: &str) -> Option<CurrentChange> {
    let (name, stats) = line.rsplit_once('|')?;
    let filename = name.trim();
    if filename.is_empty() {
        return None;
    }

    let mut tokens = stats.split_whitespace();
    let count: u64 = tokens.next()?.parse().ok()?;
    let graph = tokens.next().unwrap_or("");

    let mut insertions = graph.chars().filter(|&c| c == '+').count() as u64;
    let mut deletions = graph.chars().filter(|&c| c == '-').count() as u64;
    if insertions == 0 && deletions == 0 {
        deletions = count / 2;
        insertions = count - deletions;
    }

    Some(CurrentChange::new(filename, insertions, deletions))
}

/// Parse the full diff-stat output, keeping files that pass `patterns`.
pub fn parse_diff_stat(output: &str, patterns: &FilePatterns) -> CurrentChanges {
    output
        .lines()
        .filter_map(parse_line)
        .filter(|change| patterns.matches(&change.filename))
        .map(|change| (change.filename.clone(), change))
        .collect()
}

#[cfg(test)]
#[path = "diffstat_test.rs"]
mod tests;
