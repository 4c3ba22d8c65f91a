//! Metric instrument factories for todoist-rotation.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! Without an OTLP endpoint the global provider is a no-op.

use opentelemetry::metrics::{Counter, Meter};

fn meter() -> Meter {
    opentelemetry::global::meter("todoist-rotation")
}

/// Counter: completion records read from the activity log.
pub fn completions_read() -> Counter<u64> {
    meter()
        .u64_counter("rotation.completions.read")
        .with_description("Completion records read from the activity log")
        .build()
}

/// Counter: tasks left out of the update batch.
/// Labels: `reason`.
pub fn tasks_skipped() -> Counter<u64> {
    meter()
        .u64_counter("rotation.tasks.skipped")
        .with_description("Tasks excluded from the update batch")
        .build()
}

/// Counter: update commands sent to the sync endpoint.
pub fn updates_submitted() -> Counter<u64> {
    meter()
        .u64_counter("rotation.updates.submitted")
        .with_description("Update commands submitted")
        .build()
}

/// Counter: update commands the service did not acknowledge.
pub fn command_failures() -> Counter<u64> {
    meter()
        .u64_counter("rotation.updates.failed")
        .with_description("Update commands reported as failed")
        .build()
}
