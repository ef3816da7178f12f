//! Everything that talks to git or reads its text output.
//!
//! The collector shells out to the `git` binary through a `CommandRunner`
//! so the subprocess can be swapped for a fake in tests. libgit2 is only
//! used to locate the working tree before any command runs.

pub mod diffstat;
pub mod log;
pub mod patterns;

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;
use tracing::debug;

use crate::error::{Error, Result};

/// Runs one git invocation and returns its stdout.
pub trait CommandRunner: Send + Sync {
    fn run(&self, args: &[String]) -> Result<String>;
}

/// Runs the real `git` binary against a working tree.
///
/// The pager is disabled, paths are not quoted and log output is forced
/// to UTF-8. Invalid bytes in stdout are replaced rather than rejected.
pub struct GitCommand {
    root: PathBuf,
}

impl GitCommand {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CommandRunner for GitCommand {
    fn run(&self, args: &[String]) -> Result<String> {
        debug!(args = ?args, root = %self.root.display(), "running git");
        let output = Command::new("git")
            .arg("--no-pager")
            .args(["-c", "core.quotepath=off"])
            .args(["-c", "i18n.logOutputEncoding=UTF-8"])
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .env("GIT_PAGER", "")
            .env("PAGER", "")
            .output()
            .map_err(Error::GitUnavailable)?;

        if !output.status.success() {
            return Err(Error::GitFailed {
                command: args.first().cloned().unwrap_or_default(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Find the working-tree root of the repository containing `path`.
pub fn discover_root(path: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(path).map_err(|e| Error::NotARepository {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| Error::BareRepository(repo.path().to_path_buf()))?;
    Ok(workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
