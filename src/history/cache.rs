//! On-disk cache of collected commit history.
//!
//! One JSON file per collection key, named by the MD5 digest of the
//! repository root, the commit and day bounds and the file patterns.
//! Entries older than a day are ignored; unreadable or corrupt entries
//! count as a miss.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::Commit;

pub const MAX_AGE: Duration = Duration::from_secs(86_400);

pub struct HistoryCache {
    dir: PathBuf,
}

impl HistoryCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache key for one collection: 32 lowercase hex characters.
    pub fn key(
        root: &Path,
        max_commits: Option<u32>,
        since_days: Option<u32>,
        patterns: &[String],
    ) -> String {
        let bound = |v: Option<u32>| v.map_or_else(|| "all".to_string(), |n| n.to_string());
        let patterns = if patterns.is_empty() {
            "all".to_string()
        } else {
            patterns.join(",")
        };
        let key = format!(
            "{}_{}_{}_{}",
            root.display(),
            bound(max_commits),
            bound(since_days),
            patterns
        );
        format!("{:x}", md5::compute(key.as_bytes()))
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a fresh entry, or `None` on a miss, a stale entry or a corrupt file.
    pub fn load(&self, key: &str) -> Option<Vec<Commit>> {
        let path = self.entry_path(key);
        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
        if !is_fresh(modified, SystemTime::now()) {
            debug!(path = %path.display(), "cache entry is stale");
            return None;
        }

        let data = match fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) => {
                warn!("cannot read cache file {}, rebuilding: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str::<Vec<Commit>>(&data) {
            Ok(commits) => {
                info!("loaded {} commits from cache", commits.len());
                Some(commits)
            }
            Err(e) => {
                warn!("cache file {} is corrupted, rebuilding: {e}", path.display());
                None
            }
        }
    }

    /// Write an entry, creating the cache directory on first use.
    pub fn store(&self, key: &str, commits: &[Commit]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, serde_json::to_string(commits)?)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        info!("saved {} commits to cache", commits.len());
        Ok(())
    }

    /// Remove every cache entry, and any temporary file left by an
    /// interrupted write. Returns how many entries were removed.
    pub fn clear(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry?.path();
            if is_entry_file(&path) {
                fs::remove_file(&path)?;
                removed += 1;
            } else if is_temp_file(&path) {
                fs::remove_file(&path)?;
            }
        }
        debug!(removed, dir = %self.dir.display(), "cache cleared");
        Ok(removed)
    }
}

/// True when a file modified at `modified` is younger than `MAX_AGE` at `now`.
/// Timestamps in the future count as fresh.
pub fn is_fresh(modified: SystemTime, now: SystemTime) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age < MAX_AGE,
        Err(_) => true,
    }
}

fn is_entry_file(path: &Path) -> bool {
    has_key_name(path, ".json")
}

fn is_temp_file(path: &Path) -> bool {
    has_key_name(path, ".json.tmp")
}

/// `<32 hex digits><suffix>`
fn has_key_name(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(suffix))
        .is_some_and(|key| key.len() == 32 && key.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
