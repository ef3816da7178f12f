use super::*;
use crate::error::Error;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const LOG_OUTPUT: &str = "\
COMMIT_START
c2
Bob
Tue Jan 2 10:00:00 2024 +0000
edit y
COMMIT_END
M\ty.py

COMMIT_START
c1
Alice
Mon Jan 1 10:00:00 2024 +0000
add x and y
multi-line body
COMMIT_END
A\tx.py
A\ty.py
A\tREADME.md
";

const DIFF_OUTPUT: &str = " x.py | 4 ++--\n README.md | 1 +\n 2 files changed, 3 insertions(+), 2 deletions(-)\n";

struct FakeGit {
    calls: Arc<AtomicUsize>,
}

impl CommandRunner for FakeGit {
    fn run(&self, args: &[String]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match args.first().map(String::as_str) {
            Some("log") => Ok(LOG_OUTPUT.to_string()),
            Some("diff") => Ok(DIFF_OUTPUT.to_string()),
            _ => Ok(String::new()),
        }
    }
}

struct FailingGit;

impl CommandRunner for FailingGit {
    fn run(&self, _args: &[String]) -> Result<String> {
        Err(Error::GitUnavailable(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "git not found",
        )))
    }
}

fn collector(cache_dir: &Path, patterns: &[&str]) -> (HistoryCollector, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut config = CollectorConfig::new("/repo");
    config.cache_dir = cache_dir.to_path_buf();
    config.file_patterns = patterns.iter().map(|p| p.to_string()).collect();
    let runner = Box::new(FakeGit {
        calls: Arc::clone(&calls),
    });
    (
        HistoryCollector::with_runner(config, PathBuf::from("/repo"), runner),
        calls,
    )
}

fn sorted(mut commits: Vec<Commit>) -> Vec<Commit> {
    commits.sort_by(|a, b| a.hash.cmp(&b.hash));
    commits
}

#[test]
fn collect_parses_log() {
    let dir = tempfile::tempdir().unwrap();
    let (c, calls) = collector(dir.path(), &[]);
    let commits = sorted(c.collect_history().unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].hash, "c1");
    assert_eq!(commits[0].message, "add x and y");
    assert_eq!(commits[0].files.len(), 3);
    assert_eq!(commits[1].author, "Bob");
}

#[test]
fn second_collection_is_a_cache_hit() {
    let dir = tempfile::tempdir().unwrap();
    let (c, calls) = collector(dir.path(), &[]);
    let first = c.collect_history().unwrap();
    let second = c.collect_history().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(sorted(first), sorted(second));
    assert!(HistoryCache::new(dir.path()).entry_path(&c.cache_key()).exists());
}

#[test]
fn cache_hit_returns_identical_serialization() {
    let dir = tempfile::tempdir().unwrap();
    let (c, _) = collector(dir.path(), &[]);
    let first = serde_json::to_string(&c.collect_history().unwrap()).unwrap();
    let second = serde_json::to_string(&c.collect_history().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disabled_cache_always_runs_git() {
    let dir = tempfile::tempdir().unwrap();
    let (mut c, calls) = collector(dir.path(), &[]);
    c.config.use_cache = false;
    c.collect_history().unwrap();
    c.collect_history().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn corrupt_cache_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    let (c, calls) = collector(dir.path(), &[]);
    let path = HistoryCache::new(dir.path()).entry_path(&c.cache_key());
    fs::write(&path, "garbage").unwrap();

    let commits = c.collect_history().unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let rewritten: Vec<Commit> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(rewritten.len(), 2);
}

#[test]
fn different_patterns_use_different_entries() {
    let dir = tempfile::tempdir().unwrap();
    let (all, _) = collector(dir.path(), &[]);
    let (py, py_calls) = collector(dir.path(), &["*.py"]);
    all.collect_history().unwrap();
    py.collect_history().unwrap();
    assert_ne!(all.cache_key(), py.cache_key());
    assert_eq!(py_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn pattern_filter_applies_to_history() {
    let dir = tempfile::tempdir().unwrap();
    let (c, _) = collector(dir.path(), &["*.py"]);
    let commits = sorted(c.collect_history().unwrap());
    let files: Vec<&str> = commits[0].files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(files, vec!["x.py", "y.py"]);
}

#[test]
fn current_changes_are_parsed_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let (c, _) = collector(dir.path(), &[]);
    let changes = c.get_current_changes().unwrap();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes["x.py"].additions, 2);
    assert_eq!(changes["x.py"].deletions, 2);

    let (py, _) = collector(dir.path(), &["*.py"]);
    assert_eq!(py.get_current_changes().unwrap().len(), 1);
}

#[test]
fn git_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CollectorConfig::new("/repo");
    config.cache_dir = dir.path().to_path_buf();
    let c = HistoryCollector::with_runner(config, PathBuf::from("/repo"), Box::new(FailingGit));
    assert!(matches!(c.collect_history(), Err(Error::GitUnavailable(_))));
    assert!(c.get_current_changes().is_err());
}

#[test]
fn clear_cache_forces_recollection() {
    let dir = tempfile::tempdir().unwrap();
    let (c, calls) = collector(dir.path(), &[]);
    assert_eq!(c.cache_dir(), dir.path());
    assert_eq!(c.root(), Path::new("/repo"));
    c.collect_history().unwrap();
    assert_eq!(c.clear_cache().unwrap(), 1);
    assert_eq!(c.clear_cache().unwrap(), 0);
    c.collect_history().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn open_rejects_non_repository() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("plain");
    fs::create_dir_all(&sub).unwrap();
    let result = HistoryCollector::open(CollectorConfig::new(&sub));
    assert!(matches!(result, Err(Error::NotARepository { .. })));
}
