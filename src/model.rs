//! Core data model.
//!
//! Tasks and notes are owned by Todoist; this crate only reads the fields it
//! needs to decide whether a completed task should move on to the next entry
//! of its rotation.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// Newtype for Todoist item IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Current state of a task as returned by the sync endpoint.
///
/// Only `id` and `content` are read; everything else the service sends is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Note
// ---------------------------------------------------------------------------

/// A comment attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    /// The task this note belongs to.
    pub item_id: TaskId,
    pub content: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_archived: bool,
}

impl Note {
    /// Still visible to the user (neither deleted nor archived).
    pub fn is_active(&self) -> bool {
        !self.is_deleted && !self.is_archived
    }
}

/// Todoist sends `0`/`1` for boolean flags on older API versions and
/// `true`/`false` on newer ones.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Null(()),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
        Flag::Null(()) => false,
    })
}

// ---------------------------------------------------------------------------
// Completion + Update
// ---------------------------------------------------------------------------

/// What a task said at the moment it was marked done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRecord {
    pub task_id: TaskId,
    pub completed_content: String,
}

impl CompletionRecord {
    pub fn new(task_id: impl Into<TaskId>, completed_content: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            completed_content: completed_content.into(),
        }
    }
}

/// New content to write to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub task_id: TaskId,
    pub content: String,
}

impl std::fmt::Display for TaskUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> [{}]", self.task_id, self.content)
    }
}
