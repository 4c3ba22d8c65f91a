//! One rotation run: read, reconcile, write.

use crate::api::TodoistApi;
use crate::error::Result;
use crate::model::TaskUpdate;
use crate::telemetry::{metrics, run as spans};
use crate::updater::{self, WriteReport};
use crate::{readers, reconcile};
use tracing::Instrument as _;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Plan updates but don't write them.
    pub dry_run: bool,
}

/// What a run saw and did.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub completions: usize,
    pub unchanged: usize,
    pub rotation_notes: usize,
    pub updates: Vec<TaskUpdate>,
    /// `None` on a dry run or when there was nothing to write.
    pub write: Option<WriteReport>,
}

/// Execute every stage in order, awaiting each remote call, the final write
/// included.
pub async fn run<A: TodoistApi>(api: &A, options: RunOptions) -> Result<RunSummary> {
    let span = spans::start_run_span(options.dry_run);
    run_stages(api, options, &span).instrument(span.clone()).await
}

async fn run_stages<A: TodoistApi>(
    api: &A,
    options: RunOptions,
    run_span: &tracing::Span,
) -> Result<RunSummary> {
    let completions = readers::read_completions(api)
        .instrument(spans::start_stage_span("activity"))
        .await?;
    metrics::completions_read().add(completions.len() as u64, &[]);

    let tasks = readers::read_tasks_by_id(api)
        .instrument(spans::start_stage_span("items"))
        .await?;

    let completions_read = completions.len();
    let unchanged = reconcile::filter_changed_since_completion(completions, &tasks);

    let notes = readers::read_rotation_notes(api)
        .instrument(spans::start_stage_span("notes"))
        .await?;

    let updates = reconcile::build_task_updates(&unchanged, &notes);
    spans::record_planned(run_span, updates.len());

    let mut summary = RunSummary {
        completions: completions_read,
        unchanged: unchanged.len(),
        rotation_notes: notes.len(),
        updates,
        write: None,
    };

    if summary.updates.is_empty() {
        tracing::info!(completions = completions_read, "no rotations due");
        return Ok(summary);
    }

    for update in &summary.updates {
        tracing::info!(task_id = %update.task_id, content = %update.content, "planned update");
    }

    if options.dry_run {
        return Ok(summary);
    }

    let report = updater::write_updates(api, &summary.updates)
        .instrument(spans::start_stage_span("write"))
        .await?;
    tracing::info!(
        submitted = report.submitted,
        succeeded = report.succeeded,
        failed = report.failed.len(),
        "updates written"
    );
    summary.write = Some(report);

    Ok(summary)
}
