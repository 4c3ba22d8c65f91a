//! Error types for todoist-rotation.

use crate::model::TaskId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unexpected response from {endpoint}: HTTP {status}: {body}")]
    Transport {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task {task_id}: {kind}: {detail}")]
    DataInconsistency {
        task_id: TaskId,
        kind: Inconsistency,
        detail: String,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn inconsistency(
        task_id: TaskId,
        kind: Inconsistency,
        detail: impl Into<String>,
    ) -> Self {
        Error::DataInconsistency {
            task_id,
            kind,
            detail: detail.into(),
        }
    }
}

/// Why a single task was left out of the update batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inconsistency {
    /// Completion activity names a task the snapshot doesn't contain.
    TaskMissing,
    /// The task was edited after it was completed.
    ContentChanged,
    /// Note body doesn't start with the `ROTATION:` line.
    MissingHeader,
    /// Note has a header but no candidate lines.
    EmptyRotation,
    /// The completed content isn't one of the candidates.
    ContentNotInRotation,
}

impl Inconsistency {
    pub fn as_str(self) -> &'static str {
        match self {
            Inconsistency::TaskMissing => "task_missing",
            Inconsistency::ContentChanged => "content_changed",
            Inconsistency::MissingHeader => "missing_header",
            Inconsistency::EmptyRotation => "empty_rotation",
            Inconsistency::ContentNotInRotation => "content_not_in_rotation",
        }
    }
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
