//! # todoist-rotation
//!
//! Rotates recurring Todoist task text. A task with a `ROTATION:` note cycles
//! through the note's lines: each time it is completed, its content is
//! rewritten to the line after the one it was completed with.
//!
//! A run reads the activity log, the item snapshot and the notes, reconciles
//! them, and submits the resulting updates in one sync write.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod readers;
pub mod reconcile;
pub mod rotation;
pub mod telemetry;
pub mod updater;
