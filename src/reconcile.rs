//! Cross-references completions, the task snapshot and rotation notes.
//!
//! Everything here is pure. Per-task problems are logged and the task is left
//! out of the batch; they never fail the run.

use crate::error::{Error, Inconsistency, Result};
use crate::model::{CompletionRecord, Note, Task, TaskId, TaskUpdate};
use crate::rotation;
use crate::telemetry::metrics;
use opentelemetry::KeyValue;
use std::collections::HashMap;

/// Verify a completed task still reads the way it did when it was completed.
pub fn check_unchanged(record: &CompletionRecord, tasks: &HashMap<TaskId, Task>) -> Result<()> {
    let task = tasks.get(&record.task_id).ok_or_else(|| {
        Error::inconsistency(
            record.task_id,
            Inconsistency::TaskMissing,
            "found completion activity but no task with that id",
        )
    })?;

    if task.content != record.completed_content {
        return Err(Error::inconsistency(
            record.task_id,
            Inconsistency::ContentChanged,
            format!(
                "content changed from [{}] to [{}] since it was completed",
                record.completed_content, task.content
            ),
        ));
    }

    Ok(())
}

/// Drop completions whose task has vanished or been edited since.
pub fn filter_changed_since_completion(
    records: Vec<CompletionRecord>,
    tasks: &HashMap<TaskId, Task>,
) -> Vec<CompletionRecord> {
    records
        .into_iter()
        .filter(|record| match check_unchanged(record, tasks) {
            Ok(()) => true,
            Err(e) => {
                report_skip(&e);
                false
            }
        })
        .collect()
}

/// Next content for one completion, or `None` if the task has no rotation.
pub fn plan_update(record: &CompletionRecord, note: Option<&Note>) -> Result<Option<TaskUpdate>> {
    let Some(note) = note else {
        return Ok(None);
    };

    let rotation = rotation::parse_rotation(record.task_id, &note.content)?;
    let content = rotation::next_content(record.task_id, &record.completed_content, &rotation)?;

    Ok(Some(TaskUpdate {
        task_id: record.task_id,
        content,
    }))
}

/// Updates for every completion whose task carries a usable rotation.
///
/// Output keeps the order of `records`.
pub fn build_task_updates(
    records: &[CompletionRecord],
    notes: &HashMap<TaskId, Note>,
) -> Vec<TaskUpdate> {
    records
        .iter()
        .filter_map(
            |record| match plan_update(record, notes.get(&record.task_id)) {
                Ok(update) => update,
                Err(e) => {
                    report_skip(&e);
                    None
                }
            },
        )
        .collect()
}

/// Both reconciliation steps in one go.
pub fn reconcile(
    records: Vec<CompletionRecord>,
    tasks: &HashMap<TaskId, Task>,
    notes: &HashMap<TaskId, Note>,
) -> Vec<TaskUpdate> {
    let unchanged = filter_changed_since_completion(records, tasks);
    build_task_updates(&unchanged, notes)
}

fn report_skip(err: &Error) {
    tracing::warn!(error = %err, "skipping task");
    if let Error::DataInconsistency { kind, .. } = err {
        metrics::tasks_skipped().add(1, &[KeyValue::new("reason", kind.as_str())]);
    }
}
