//! Rotation notes and the advancement rule.
//!
//! A rotation note is a task comment of the form
//!
//! ```text
//! ROTATION:
//! Water the ferns
//! Water the cacti
//! Water the orchids
//! ```
//!
//! Each time the task is completed its content moves to the line after the
//! one it was completed with, wrapping from the last line back to the first.

use crate::error::{Error, Inconsistency, Result};
use crate::model::{Note, TaskId};

/// First line of every rotation note.
pub const SENTINEL: &str = "ROTATION:";

/// Does this note claim to be a rotation note?
///
/// Only the exact `ROTATION:` line followed by a newline counts.
pub fn is_rotation_note(content: &str) -> bool {
    content
        .strip_prefix(SENTINEL)
        .is_some_and(|rest| rest.starts_with('\n'))
}

/// Ordered, non-empty list of contents a task cycles through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    entries: Vec<String>,
}

impl Rotation {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry that follows `current`, wrapping to the first entry after
    /// the last. `None` if `current` isn't in the rotation.
    ///
    /// `current` is trimmed the same way entries are. When it appears more
    /// than once, its first occurrence decides.
    pub fn next_after(&self, current: &str) -> Option<&str> {
        let current = current.trim();
        let index = self.entries.iter().position(|entry| entry == current)?;
        let next = (index + 1) % self.entries.len();
        Some(&self.entries[next])
    }
}

/// Parse a note body into a [`Rotation`].
///
/// The first line must be exactly [`SENTINEL`]. Remaining lines are trimmed
/// and blank ones dropped.
pub fn parse_rotation(task_id: TaskId, content: &str) -> Result<Rotation> {
    let mut lines = content.split('\n');
    if lines.next() != Some(SENTINEL) {
        return Err(Error::inconsistency(
            task_id,
            Inconsistency::MissingHeader,
            format!("note does not start with {SENTINEL:?}: {content:?}"),
        ));
    }

    let entries: Vec<String> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        return Err(Error::inconsistency(
            task_id,
            Inconsistency::EmptyRotation,
            format!("note has no entries: {content:?}"),
        ));
    }

    Ok(Rotation { entries })
}

/// Parse the rotation carried by a note, attributed to the note's task.
pub fn parse_rotation_note(note: &Note) -> Result<Rotation> {
    parse_rotation(note.item_id, &note.content)
}

/// Next content for a task completed with `completed`.
pub fn next_content(task_id: TaskId, completed: &str, rotation: &Rotation) -> Result<String> {
    rotation
        .next_after(completed)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::inconsistency(
                task_id,
                Inconsistency::ContentNotInRotation,
                format!(
                    "cannot find most recent content [{completed}] in rotation {:?}",
                    rotation.entries
                ),
            )
        })
}
