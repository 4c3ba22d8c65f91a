//! Activity, item and note readers.

mod common;

use common::{FakeApi, activity_entry, completion, note, task};
use serde_json::json;
use todoist_rotation::model::{CompletionRecord, Note, TaskId};
use todoist_rotation::readers;

#[test]
fn duplicate_completions_keep_first_occurrence() {
    let entries = vec![completion(1, "A"), completion(2, "X"), completion(1, "B")];
    let records = readers::completions_from_activity(&entries);
    assert_eq!(
        records,
        vec![CompletionRecord::new(1, "A"), CompletionRecord::new(2, "X")]
    );
}

#[test]
fn non_completion_events_are_ignored() {
    let entries = vec![
        activity_entry(json!({
            "object_type": "item",
            "event_type": "updated",
            "object_id": 1,
            "extra_data": {"content": "A"},
        })),
        activity_entry(json!({
            "object_type": "note",
            "event_type": "completed",
            "object_id": 2,
            "extra_data": {"content": "B"},
        })),
        completion(3, "C"),
    ];
    let records = readers::completions_from_activity(&entries);
    assert_eq!(records, vec![CompletionRecord::new(3, "C")]);
}

#[test]
fn completion_without_content_is_skipped_but_still_seen() {
    let entries = vec![
        activity_entry(json!({
            "object_type": "item",
            "event_type": "completed",
            "object_id": 1,
        })),
        completion(1, "A"),
        activity_entry(json!({
            "object_type": "item",
            "event_type": "completed",
            "object_id": 2,
            "extra_data": {"content": ""},
        })),
        activity_entry(json!({
            "object_type": "item",
            "event_type": "completed",
            "object_id": 3,
            "extra_data": null,
        })),
    ];
    assert!(readers::completions_from_activity(&entries).is_empty());
}

#[test]
fn task_index_is_last_write_wins() {
    let index = readers::index_tasks(vec![task(1, "old"), task(2, "B"), task(1, "new")]);
    assert_eq!(index.len(), 2);
    assert_eq!(index[&TaskId(1)].content, "new");
}

#[test]
fn rotation_notes_exclude_inactive_and_plain_notes() {
    let mut deleted = note(1, 10, "ROTATION:\nA");
    deleted.is_deleted = true;
    let mut archived = note(2, 11, "ROTATION:\nA");
    archived.is_archived = true;

    let index = readers::index_rotation_notes(vec![
        deleted,
        archived,
        note(3, 12, "remember to buy soil"),
        note(4, 13, "ROTATION:\nA\nB"),
    ]);

    assert_eq!(index.len(), 1);
    assert_eq!(index[&TaskId(13)].id, 4);
}

#[test]
fn last_rotation_note_for_a_task_wins() {
    let index = readers::index_rotation_notes(vec![
        note(1, 10, "ROTATION:\nA\nB"),
        note(2, 10, "ROTATION:\nC\nD"),
    ]);
    assert_eq!(index[&TaskId(10)].id, 2);
}

#[test]
fn note_flags_accept_integers_and_booleans() {
    let notes: Vec<Note> = serde_json::from_value(json!([
        {"id": 1, "item_id": 10, "content": "ROTATION:\nA", "is_deleted": 1, "is_archived": 0},
        {"id": 2, "item_id": 11, "content": "ROTATION:\nA", "is_deleted": false, "is_archived": true},
        {"id": 3, "item_id": 12, "content": "ROTATION:\nA"},
    ]))
    .unwrap();

    assert!(notes[0].is_deleted && !notes[0].is_archived);
    assert!(!notes[1].is_deleted && notes[1].is_archived);
    assert!(notes[2].is_active());
}

#[tokio::test]
async fn readers_call_their_endpoints() {
    let api = FakeApi::new()
        .completed(1, "A")
        .task(1, "A")
        .note(1, "ROTATION:\nA\nB");

    let completions = readers::read_completions(&api).await.unwrap();
    let tasks = readers::read_tasks_by_id(&api).await.unwrap();
    let notes = readers::read_rotation_notes(&api).await.unwrap();

    assert_eq!(completions.len(), 1);
    assert!(tasks.contains_key(&TaskId(1)));
    assert!(notes.contains_key(&TaskId(1)));
    assert_eq!(api.calls(), vec!["activity", "items", "notes"]);
}

#[test]
fn odd_activity_entries_do_not_hide_completions() {
    let entries = todoist_rotation::api::decode_activity(vec![
        json!({"object_type": "item", "event_type": "completed", "object_id": 1,
               "extra_data": {"content": "A"}}),
        json!({"object_type": "project", "event_type": "updated", "object_id": 2,
               "extra_data": {"content": {"x": 1}}}),
        json!({"object_type": "item", "event_type": "completed", "object_id": 3,
               "extra_data": {"content": ["not", "text"]}}),
        json!({"object_type": "note", "event_type": "added", "object_id": "n-4"}),
        json!({"event_type": "completed", "object_id": 5}),
        json!({"object_type": "item", "event_type": "completed", "object_id": 6,
               "extra_data": {"content": "F"}}),
    ]);

    assert_eq!(entries.len(), 5);
    let records = readers::completions_from_activity(&entries);
    assert_eq!(
        records,
        vec![CompletionRecord::new(1, "A"), CompletionRecord::new(6, "F")]
    );
}
