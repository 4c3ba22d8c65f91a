//! In-memory `TodoistApi` for driving the pipeline without a network.

#![allow(dead_code)]

use serde_json::{Value, json};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use todoist_rotation::api::{ActivityEntry, SyncCommand, TodoistApi, WriteResponse};
use todoist_rotation::error::{Error, Result};
use todoist_rotation::model::{Note, Task, TaskId};

#[derive(Default)]
pub struct FakeApi {
    pub activity: Vec<ActivityEntry>,
    pub items: Vec<Task>,
    pub notes: Vec<Note>,
    /// Tasks whose update commands come back with an error status.
    pub rejected: HashSet<TaskId>,
    /// Fail the activity call with a transport error.
    pub activity_status: Option<u16>,
    pub calls: Mutex<Vec<&'static str>>,
    pub written: Mutex<Vec<SyncCommand>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(mut self, id: i64, content: &str) -> Self {
        self.activity.push(completion(id, content));
        self
    }

    pub fn task(mut self, id: i64, content: &str) -> Self {
        self.items.push(task(id, content));
        self
    }

    pub fn note(mut self, item_id: i64, content: &str) -> Self {
        let id = self.notes.len() as i64 + 100;
        self.notes.push(note(id, item_id, content));
        self
    }

    pub fn reject(mut self, id: i64) -> Self {
        self.rejected.insert(TaskId(id));
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn written(&self) -> Vec<SyncCommand> {
        self.written.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl TodoistApi for FakeApi {
    async fn activity(&self) -> Result<Vec<ActivityEntry>> {
        self.record("activity");
        if let Some(status) = self.activity_status {
            return Err(Error::Transport {
                endpoint: "activity/get".to_string(),
                status,
                body: String::new(),
            });
        }
        Ok(self.activity.clone())
    }

    async fn items(&self) -> Result<Vec<Task>> {
        self.record("items");
        Ok(self.items.clone())
    }

    async fn notes(&self) -> Result<Vec<Note>> {
        self.record("notes");
        Ok(self.notes.clone())
    }

    async fn write_commands(&self, commands: &[SyncCommand]) -> Result<WriteResponse> {
        self.record("write");
        self.written.lock().unwrap().extend_from_slice(commands);

        let sync_status: BTreeMap<String, Value> = commands
            .iter()
            .map(|command| {
                let status = if self.rejected.contains(&command.task_id()) {
                    json!({"error_code": 20, "error": "Item not found"})
                } else {
                    json!("ok")
                };
                (command.uuid().to_string(), status)
            })
            .collect();

        Ok(WriteResponse { sync_status })
    }
}

pub fn completion(id: i64, content: &str) -> ActivityEntry {
    activity_entry(json!({
        "object_type": "item",
        "event_type": "completed",
        "object_id": id,
        "extra_data": {"content": content},
    }))
}

pub fn activity_entry(value: Value) -> ActivityEntry {
    serde_json::from_value(value).unwrap()
}

pub fn task(id: i64, content: &str) -> Task {
    Task {
        id: TaskId(id),
        content: content.to_string(),
    }
}

pub fn note(id: i64, item_id: i64, content: &str) -> Note {
    Note {
        id,
        item_id: TaskId(item_id),
        content: content.to_string(),
        is_deleted: false,
        is_archived: false,
    }
}
