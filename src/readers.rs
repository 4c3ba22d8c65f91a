//! The three read stages: completions, task snapshot, rotation notes.

use crate::api::{ActivityEntry, TodoistApi};
use crate::error::Result;
use crate::model::{CompletionRecord, Note, Task, TaskId};
use crate::rotation;
use std::collections::{HashMap, HashSet};

/// Completed items from the activity log, one record per task.
pub async fn read_completions<A: TodoistApi>(api: &A) -> Result<Vec<CompletionRecord>> {
    let entries = api.activity().await?;
    Ok(completions_from_activity(&entries))
}

/// Keep `item`/`completed` events, first one per task id.
///
/// An id counts as seen even when its entry carries no content, so a later
/// duplicate with content is still ignored.
pub fn completions_from_activity(entries: &[ActivityEntry]) -> Vec<CompletionRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for entry in entries {
        if !entry.is_item_completion() || !seen.insert(entry.object_id) {
            continue;
        }
        let Some(content) = entry.content() else {
            tracing::debug!(task_id = %entry.object_id, "completion without content");
            continue;
        };
        records.push(CompletionRecord::new(entry.object_id, content));
    }

    records
}

/// Current state of every task, keyed by id.
pub async fn read_tasks_by_id<A: TodoistApi>(api: &A) -> Result<HashMap<TaskId, Task>> {
    let items = api.items().await?;
    Ok(index_tasks(items))
}

/// Later duplicates overwrite earlier ones.
pub fn index_tasks(items: Vec<Task>) -> HashMap<TaskId, Task> {
    items.into_iter().map(|task| (task.id, task)).collect()
}

/// Active rotation notes, keyed by the task they belong to.
pub async fn read_rotation_notes<A: TodoistApi>(api: &A) -> Result<HashMap<TaskId, Note>> {
    let notes = api.notes().await?;
    Ok(index_rotation_notes(notes))
}

/// Drop deleted, archived and non-rotation notes.
///
/// If a task has several rotation notes the last one in feed order wins.
pub fn index_rotation_notes(notes: Vec<Note>) -> HashMap<TaskId, Note> {
    let mut by_task = HashMap::new();

    for note in notes {
        if !note.is_active() || !rotation::is_rotation_note(&note.content) {
            continue;
        }
        if let Some(previous) = by_task.insert(note.item_id, note) {
            tracing::debug!(
                task_id = %previous.item_id,
                replaced_note = previous.id,
                "task has more than one rotation note"
            );
        }
    }

    by_task
}
