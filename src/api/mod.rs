//! Todoist API surface used by the rotation pipeline.
//!
//! [`TodoistApi`] is the seam between the pipeline and the network. The
//! readers and the updater only ever talk to this trait; [`http::HttpApi`]
//! is the production implementation.

pub mod http;

use crate::error::Result;
use crate::model::{Note, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Remote calls the pipeline makes, one per stage.
///
/// Implementations return [`crate::error::Error::Transport`] when the service
/// answers with a non-200 status.
#[allow(async_fn_in_trait)]
pub trait TodoistApi {
    /// Recent activity log entries, in the order the service returns them.
    async fn activity(&self) -> Result<Vec<ActivityEntry>>;

    /// Full snapshot of all items (`sync_token = "*"`).
    async fn items(&self) -> Result<Vec<Task>>;

    /// Full snapshot of all notes (`sync_token = "*"`).
    async fn notes(&self) -> Result<Vec<Note>>;

    /// Submit a batch of commands in a single sync write.
    async fn write_commands(&self, commands: &[SyncCommand]) -> Result<WriteResponse>;
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// One entry of the activity log.
///
/// Only the fields needed to spot item completions are typed; `extra_data`
/// varies by event and is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(default)]
    pub object_type: String,
    #[serde(default)]
    pub event_type: String,
    pub object_id: TaskId,
    #[serde(default)]
    pub extra_data: Option<serde_json::Value>,
}

impl ActivityEntry {
    /// An item was marked done.
    pub fn is_item_completion(&self) -> bool {
        self.object_type == "item" && self.event_type == "completed"
    }

    /// Content recorded with the event, if it is a non-empty string.
    pub fn content(&self) -> Option<&str> {
        self.extra_data
            .as_ref()
            .and_then(|extra| extra.get("content"))
            .and_then(serde_json::Value::as_str)
            .filter(|content| !content.is_empty())
    }
}

/// Decode an activity feed entry by entry.
///
/// Entries that don't fit [`ActivityEntry`] (say, an event whose object id
/// isn't numeric) are dropped so one odd event can't sink the whole feed.
pub fn decode_activity(values: Vec<serde_json::Value>) -> Vec<ActivityEntry> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping undecodable activity entry");
                None
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sync
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotesResponse {
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// A write command for the sync endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncCommand {
    ItemUpdate { uuid: Uuid, args: ItemUpdateArgs },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemUpdateArgs {
    pub id: TaskId,
    pub content: String,
}

impl SyncCommand {
    /// An `item_update` with a freshly generated correlation UUID.
    pub fn item_update(id: TaskId, content: impl Into<String>) -> Self {
        SyncCommand::ItemUpdate {
            uuid: Uuid::new_v4(),
            args: ItemUpdateArgs {
                id,
                content: content.into(),
            },
        }
    }

    pub fn uuid(&self) -> Uuid {
        match self {
            SyncCommand::ItemUpdate { uuid, .. } => *uuid,
        }
    }

    pub fn task_id(&self) -> TaskId {
        match self {
            SyncCommand::ItemUpdate { args, .. } => args.id,
        }
    }
}

/// Body of a sync write response.
///
/// `sync_status` maps each command UUID to `"ok"` or an error object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteResponse {
    #[serde(default)]
    pub sync_status: BTreeMap<String, serde_json::Value>,
}

impl WriteResponse {
    /// Status reported for a command, if the service mentioned it.
    pub fn status_of(&self, uuid: &Uuid) -> Option<&serde_json::Value> {
        self.sync_status.get(&uuid.to_string())
    }
}

/// A sync status counts as success only when it is the literal string `"ok"`.
pub fn is_ok_status(status: &serde_json::Value) -> bool {
    status.as_str() == Some("ok")
}
