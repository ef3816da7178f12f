use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a git repository (or any parent): {path}: {message}")]
    NotARepository { path: PathBuf, message: String },

    #[error("bare repositories are not supported: {0}")]
    BareRepository(PathBuf),

    #[error("failed to run git: {0}")]
    GitUnavailable(#[source] std::io::Error),

    #[error("git {command} failed ({status}): {stderr}")]
    GitFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("metric {id} failed: {message}")]
    Metric { id: String, message: String },

    #[error("metric {0} received a result it did not produce")]
    ResultType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
