//! `git log` extraction: command construction and sentinel-delimited parsing.
//!
//! Each commit is printed as a start sentinel line, one field per line
//! (hash, author, date, subject, body), an end sentinel line and then the
//! `--name-status` block. Splitting on the start sentinel yields one
//! independent chunk per commit, which lets the chunks be parsed on a
//! worker pool. A chunk without its end sentinel is dropped.

use std::ops::Range;

use chrono::{Days, Local, NaiveDate};
use rayon::prelude::*;
use tracing::{debug, warn};

use super::patterns::FilePatterns;
use crate::model::{Commit, FileChange};

pub const START_SENTINEL: &str = "COMMIT_START";
pub const END_SENTINEL: &str = "COMMIT_END";

/// Arguments for the single `git log` invocation of a collection.
pub fn log_args(max_commits: Option<u32>, since_days: Option<u32>) -> Vec<String> {
    let mut args = vec![
        "log".to_string(),
        format!("--pretty=format:{START_SENTINEL}%n%H%n%an%n%ad%n%s%n%b%n{END_SENTINEL}"),
        "--name-status".to_string(),
    ];
    if let Some(date) = since_days.and_then(|d| since_date(Local::now().date_naive(), d)) {
        args.push(format!("--since={}", date.format("%Y-%m-%d")));
    }
    if let Some(n) = max_commits {
        args.push("-n".to_string());
        args.push(n.to_string());
    }
    args
}

/// The calendar day `days` before `today`, or `None` if out of range.
pub fn since_date(today: NaiveDate, days: u32) -> Option<NaiveDate> {
    today.checked_sub_days(Days::new(u64::from(days)))
}

/// Split raw log output into per-commit chunks (text after each start sentinel).
pub fn split_chunks(output: &str) -> Vec<&str> {
    let marker = format!("{START_SENTINEL}\n");
    output.split(marker.as_str()).skip(1).collect()
}

/// Split `len` items into `parts` contiguous ranges whose sizes differ by at most one.
/// Earlier ranges take the remainder.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }
    let base = len / parts;
    let remainder = len % parts;
    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let size = base + usize::from(i < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Number of parsing workers: hardware parallelism capped by the chunk count.
pub fn worker_count(chunks: usize) -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    available.min(chunks)
}

/// Parse one commit chunk. Returns `None` for a truncated chunk, or when a
/// filter is active and none of the commit's files pass it.
pub fn parse_chunk(chunk: &str, patterns: &FilePatterns) -> Option<Commit> {
    let lines: Vec<&str> = chunk.lines().map(|l| l.trim_end_matches('\r')).collect();
    let end = lines.iter().position(|l| *l == END_SENTINEL)?;
    if end < 4 {
        return None;
    }

    let hash = lines[0].trim();
    if hash.is_empty() {
        return None;
    }

    let files: Vec<FileChange> = lines[end + 1..]
        .iter()
        .filter_map(|line| parse_name_status(line))
        .filter(|fc| patterns.matches(&fc.filename))
        .collect();

    if !patterns.is_empty() && files.is_empty() {
        return None;
    }

    Some(Commit {
        hash: hash.to_string(),
        author: lines[1].to_string(),
        date: lines[2].to_string(),
        message: lines[3].to_string(),
        files,
    })
}

/// Parse one `--name-status` line: `M\tpath`, or `R100\told\tnew` for renames
/// and copies, where the destination path is kept.
fn parse_name_status(line: &str) -> Option<FileChange> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 2 || parts[0].is_empty() {
        return None;
    }
    let status = parts[0];
    let filename = if parts.len() >= 3 && (status.starts_with('R') || status.starts_with('C')) {
        parts[2]
    } else {
        parts[1]
    };
    Some(FileChange::from_status(filename, status))
}

fn parse_slice(chunks: &[&str], patterns: &FilePatterns) -> Vec<Commit> {
    chunks
        .iter()
        .filter_map(|chunk| parse_chunk(chunk, patterns))
        .collect()
}

/// Parse the whole log stream on a pool of `worker_count` threads.
///
/// Chunks are partitioned into equal index ranges, each range is parsed
/// independently and the per-range results are concatenated once every
/// worker has finished. Result order is not guaranteed to follow history.
pub fn parse_log(output: &str, patterns: &FilePatterns) -> Vec<Commit> {
    let chunks = split_chunks(output);
    if chunks.is_empty() {
        return Vec::new();
    }

    let workers = worker_count(chunks.len());
    let slices = partition(chunks.len(), workers);
    debug!(chunks = chunks.len(), workers, "parsing git log");

    let parsed: Vec<Vec<Commit>> = match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
    {
        Ok(pool) => pool.install(|| {
            slices
                .par_iter()
                .map(|range| parse_slice(&chunks[range.clone()], patterns))
                .collect()
        }),
        Err(e) => {
            warn!("could not start parser pool, parsing on one thread: {e}");
            slices
                .iter()
                .map(|range| parse_slice(&chunks[range.clone()], patterns))
                .collect()
        }
    };

    let commits: Vec<Commit> = parsed.into_iter().flatten().collect();
    if commits.len() < chunks.len() {
        debug!(
            dropped = chunks.len() - commits.len(),
            "skipped truncated or filtered commits"
        );
    }
    commits
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
