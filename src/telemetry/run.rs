//! Span helpers for a rotation run and its stages.

use tracing::Span;

/// Start the span covering a whole run.
///
/// `rotation.planned` is declared empty and filled by [`record_planned`]
/// once reconciliation is done.
pub fn start_run_span(dry_run: bool) -> Span {
    tracing::info_span!(
        "rotation.run",
        "rotation.dry_run" = dry_run,
        "rotation.planned" = tracing::field::Empty,
    )
}

/// Start a span for one remote stage ("activity", "items", "notes", "write").
pub fn start_stage_span(stage: &'static str) -> Span {
    tracing::info_span!("rotation.stage", "rotation.stage" = stage)
}

/// Record how many updates reconciliation produced.
pub fn record_planned(span: &Span, planned: usize) {
    span.record("rotation.planned", planned as u64);
}
