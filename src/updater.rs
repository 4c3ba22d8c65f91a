//! Submits planned task updates as one sync write.

use crate::api::{SyncCommand, TodoistApi, is_ok_status};
use crate::error::Result;
use crate::model::{TaskId, TaskUpdate};
use crate::telemetry::metrics;

/// Outcome of a sync write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteReport {
    /// Commands sent.
    pub submitted: usize,
    /// Commands the service acknowledged with `"ok"`.
    pub succeeded: usize,
    /// Commands that didn't come back `"ok"`, with whatever status was sent.
    pub failed: Vec<CommandFailure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandFailure {
    pub task_id: TaskId,
    pub status: serde_json::Value,
}

/// One `item_update` per update, each with its own UUID.
pub fn build_update_commands(updates: &[TaskUpdate]) -> Vec<SyncCommand> {
    updates
        .iter()
        .map(|update| SyncCommand::item_update(update.task_id, update.content.clone()))
        .collect()
}

/// Write all updates in a single batch.
///
/// Makes no call at all when `updates` is empty. A non-200 response fails;
/// individual commands the service rejects are only logged and reported.
pub async fn write_updates<A: TodoistApi>(api: &A, updates: &[TaskUpdate]) -> Result<WriteReport> {
    if updates.is_empty() {
        return Ok(WriteReport::default());
    }

    let commands = build_update_commands(updates);
    let response = api.write_commands(&commands).await?;
    metrics::updates_submitted().add(commands.len() as u64, &[]);

    let mut report = WriteReport {
        submitted: commands.len(),
        ..WriteReport::default()
    };

    for command in &commands {
        let status = response
            .status_of(&command.uuid())
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        if is_ok_status(&status) {
            report.succeeded += 1;
        } else {
            tracing::warn!(
                task_id = %command.task_id(),
                uuid = %command.uuid(),
                %status,
                "an update failed"
            );
            metrics::command_failures().add(1, &[]);
            report.failed.push(CommandFailure {
                task_id: command.task_id(),
                status,
            });
        }
    }

    Ok(report)
}
