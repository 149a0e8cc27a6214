//! The shared task record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use super::fields::{FieldError, TaskFields};
use super::identity::{ArenaName, SharedTaskId};

/// A task that can be shared in an arena.
///
/// `uuid`, `entry` and `modified` are store-local system fields: the store
/// assigns them and refreshes `modified` on save. Arena membership is the
/// pair (`arena`, `shared_id`); detaching clears both but never deletes
/// the task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharedTask {
    uuid: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    entry: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    modified: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arena: Option<ArenaName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shared_id: Option<SharedTaskId>,
    #[serde(default)]
    fields: TaskFields,
}

impl SharedTask {
    /// A fresh, unattached task with a new store-local identity.
    pub fn new(description: &str) -> Self {
        let mut fields = TaskFields::default();
        fields.insert_raw("description", Value::String(description.to_string()));
        Self {
            uuid: Uuid::new_v4(),
            entry: OffsetDateTime::now_utc(),
            modified: None,
            arena: None,
            shared_id: None,
            fields,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn entry(&self) -> OffsetDateTime {
        self.entry
    }

    pub fn modified(&self) -> Option<OffsetDateTime> {
        self.modified
    }

    /// Explicit modification time if present, else creation time.
    pub fn last_modified(&self) -> OffsetDateTime {
        self.modified.unwrap_or(self.entry)
    }

    pub fn arena(&self) -> Option<&ArenaName> {
        self.arena.as_ref()
    }

    pub fn shared_id(&self) -> Option<SharedTaskId> {
        self.shared_id
    }

    pub fn fields(&self) -> &TaskFields {
        &self.fields
    }

    pub fn description(&self) -> &str {
        self.fields
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn set_field(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        self.fields.set(field, value)
    }

    pub fn differing_fields(&self, other: &SharedTask) -> Vec<&'static str> {
        self.fields.differing(&other.fields)
    }

    pub fn copy_editable_from(&mut self, other: &SharedTask) {
        self.fields.copy_from(&other.fields);
    }

    /// Put the task into an arena, assigning a fresh shared id iff it has
    /// never been shared before. Ids are assigned exactly once and never
    /// reassigned, even when the task moves between arenas.
    pub fn attach(&mut self, arena: ArenaName) {
        self.arena = Some(arena);
        if self.shared_id.is_none() {
            self.shared_id = Some(SharedTaskId::generate());
        }
    }

    /// Clear arena membership. The underlying task stays in its store.
    pub fn detach(&mut self) {
        self.arena = None;
        self.shared_id = None;
    }

    /// Take over another record's membership verbatim: same arena, same
    /// shared id. Used when a task is first copied to the other replica.
    pub fn inherit_membership(&mut self, other: &SharedTask) {
        self.arena = other.arena.clone();
        self.shared_id = other.shared_id;
    }

    pub(crate) fn touch(&mut self, at: OffsetDateTime) {
        self.modified = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    fn task(value: serde_json::Value) -> SharedTask {
        serde_json::from_value(value).expect("task fixture")
    }

    #[test]
    fn attach_assigns_an_id_exactly_once() {
        let mut t = SharedTask::new("paint walls");
        assert!(t.shared_id().is_none());

        t.attach(ArenaName::new("work").expect("name"));
        let id = t.shared_id().expect("assigned");

        t.attach(ArenaName::new("home").expect("name"));
        assert_eq!(t.shared_id(), Some(id));
        assert_eq!(t.arena().map(ArenaName::as_str), Some("home"));
    }

    #[test]
    fn detach_clears_membership_only() {
        let mut t = SharedTask::new("clean floor");
        t.attach(ArenaName::new("work").expect("name"));
        t.detach();
        assert!(t.arena().is_none());
        assert!(t.shared_id().is_none());
        assert_eq!(t.description(), "clean floor");
    }

    #[test]
    fn last_modified_falls_back_to_entry() {
        let t = task(json!({
            "uuid": "1f0e41f3-8e6f-4a52-9d1b-0a52a4e32f11",
            "entry": "2026-01-02T03:04:05Z",
            "fields": {"description": "x"}
        }));
        assert_eq!(t.last_modified(), datetime!(2026-01-02 03:04:05 UTC));

        let t = task(json!({
            "uuid": "1f0e41f3-8e6f-4a52-9d1b-0a52a4e32f11",
            "entry": "2026-01-02T03:04:05Z",
            "modified": "2026-02-03T00:00:00Z",
            "fields": {"description": "x"}
        }));
        assert_eq!(t.last_modified(), datetime!(2026-02-03 00:00:00 UTC));
    }

    #[test]
    fn serde_roundtrip_preserves_membership() {
        let mut t = SharedTask::new("water plants");
        t.attach(ArenaName::new("garden").expect("name"));
        t.set_field("priority", json!("H")).expect("set");

        let encoded = serde_json::to_string(&t).expect("encode");
        let decoded: SharedTask = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(t, decoded);
    }
}
