//! The sync executor: apply the final action list against both stores.

use tracing::warn;

use super::plan::{Action, SyncCandidate};
use crate::core::SharedTask;
use crate::store::{StoreError, TaskStore};

/// What a pass actually did, for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub uploaded: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SyncOutcome {
    pub fn changed(&self) -> usize {
        self.uploaded + self.downloaded
    }
}

/// Execute each candidate's resolved action, in list order.
///
/// Candidates are independent: a persistence failure is reported for that
/// one task and the rest of the batch continues. There is no rollback of
/// candidates already applied.
pub fn carry_out(
    candidates: Vec<SyncCandidate>,
    local: &mut dyn TaskStore,
    remote: &mut dyn TaskStore,
) -> SyncOutcome {
    let mut outcome = SyncOutcome::default();
    for candidate in candidates {
        let action = match candidate.action() {
            Some(Action::Skip) | None => {
                outcome.skipped += 1;
                continue;
            }
            Some(action) => action,
        };
        // Upload writes into the remote store, download into the local one.
        let (src, dst, store): (_, _, &mut dyn TaskStore) = match action {
            Action::Upload => (candidate.local(), candidate.remote(), &mut *remote),
            Action::Download => (candidate.remote(), candidate.local(), &mut *local),
            Action::Skip => continue,
        };
        let Some(src) = src else {
            warn!(
                task = %candidate.description(),
                action = action.as_str(),
                "candidate has no source side, nothing to copy"
            );
            outcome.failed += 1;
            continue;
        };
        match transfer(src, dst, store) {
            Ok(()) => match action {
                Action::Upload => outcome.uploaded += 1,
                Action::Download => outcome.downloaded += 1,
                Action::Skip => {}
            },
            Err(err) => {
                warn!(task = %src.description(), "sync action failed: {err}");
                outcome.failed += 1;
            }
        }
    }
    outcome
}

/// Copy one record across: update the existing destination record's
/// editable fields, or create it with the source's membership (the shared
/// id propagates verbatim, never regenerated).
fn transfer(
    src: &SharedTask,
    dst: Option<&SharedTask>,
    store: &mut dyn TaskStore,
) -> Result<(), StoreError> {
    match dst {
        Some(existing) => {
            let mut updated = existing.clone();
            updated.copy_editable_from(src);
            store.save(&updated)
        }
        None => {
            let mut created = store.add(src)?;
            created.inherit_membership(src);
            store.save(&created)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ArenaName;
    use crate::store::FileStore;
    use crate::sync::plan::{build_sync_list, resolve};
    use crate::sync::review::{BulkAccept, review};
    use serde_json::json;

    fn arena_query(store: &FileStore) -> Vec<SharedTask> {
        store.query("arena:work").expect("query")
    }

    fn seeded_stores(dir: &tempfile::TempDir) -> (FileStore, FileStore) {
        let mut local = FileStore::open(dir.path().join("local.json")).expect("open");
        let mut remote = FileStore::open(dir.path().join("remote.json")).expect("open");

        let name = ArenaName::new("work").expect("name");
        let mut a = SharedTask::new("paint walls");
        a.attach(name.clone());
        local.save(&a).expect("save");

        let mut c = SharedTask::new("paint ceiling");
        c.attach(name);
        remote.save(&c).expect("save");

        (local, remote)
    }

    #[test]
    fn one_sided_candidates_create_records_with_the_same_shared_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (mut local, mut remote) = seeded_stores(&dir);

        let candidates = resolve(
            build_sync_list(&arena_query(&local), &arena_query(&remote)).expect("diff"),
        );
        let reviewed = review(candidates, &mut BulkAccept).expect("review");
        let outcome = carry_out(reviewed, &mut local, &mut remote);

        assert_eq!(outcome.uploaded, 1);
        assert_eq!(outcome.downloaded, 1);
        assert_eq!(outcome.failed, 0);

        let local_tasks = arena_query(&local);
        let remote_tasks = arena_query(&remote);
        assert_eq!(local_tasks.len(), 2);
        assert_eq!(remote_tasks.len(), 2);
        for ltask in &local_tasks {
            let rtask = remote_tasks
                .iter()
                .find(|r| r.shared_id() == ltask.shared_id())
                .expect("counterpart");
            assert!(ltask.differing_fields(rtask).is_empty());
            assert_ne!(ltask.uuid(), rtask.uuid());
        }
    }

    #[test]
    fn skip_leaves_both_stores_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (mut local, mut remote) = seeded_stores(&dir);

        let mut candidates = resolve(
            build_sync_list(&arena_query(&local), &arena_query(&remote)).expect("diff"),
        );
        for candidate in &mut candidates {
            candidate.set_action(crate::sync::Action::Skip);
        }
        let outcome = carry_out(candidates, &mut local, &mut remote);

        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.changed(), 0);
        assert_eq!(arena_query(&local).len(), 1);
        assert_eq!(arena_query(&remote).len(), 1);
    }

    #[test]
    fn one_failed_save_does_not_stop_the_batch() {
        struct RejectingStore;
        impl TaskStore for RejectingStore {
            fn query(&self, _pattern: &str) -> Result<Vec<SharedTask>, StoreError> {
                Ok(Vec::new())
            }
            fn add(&mut self, template: &SharedTask) -> Result<SharedTask, StoreError> {
                let mut task = SharedTask::new("");
                task.copy_editable_from(template);
                Ok(task)
            }
            fn save(&mut self, _task: &SharedTask) -> Result<(), StoreError> {
                Err(StoreError::Write {
                    path: "rejecting".into(),
                    reason: "disk full".into(),
                })
            }
        }

        let dir = tempfile::tempdir().expect("tempdir");
        let (mut local, _remote) = seeded_stores(&dir);
        let mut rejecting = RejectingStore;

        // Both candidates are uploads into the rejecting remote.
        let name = ArenaName::new("work").expect("name");
        let mut b = SharedTask::new("clean floor");
        b.attach(name);
        local.save(&b).expect("save");

        let candidates =
            resolve(build_sync_list(&arena_query(&local), &[]).expect("diff"));
        let reviewed = review(candidates, &mut BulkAccept).expect("review");
        let outcome = carry_out(reviewed, &mut local, &mut rejecting);

        assert_eq!(outcome.failed, 2);
        assert_eq!(outcome.uploaded, 0);
    }

    #[test]
    fn conflict_resolution_converges_the_pair() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut local = FileStore::open(dir.path().join("local.json")).expect("open");
        let mut remote = FileStore::open(dir.path().join("remote.json")).expect("open");

        let shared_id = "7c9a0dbd-8a2c-44d5-9a2e-0d9a3c1b2f10";
        let older: SharedTask = serde_json::from_value(json!({
            "uuid": "00000000-0000-4000-8000-000000000001",
            "entry": "2026-01-01T00:00:00Z",
            "modified": "2026-01-02T00:00:00Z",
            "arena": "work",
            "shared_id": shared_id,
            "fields": {"description": "clean floor"}
        }))
        .expect("task");
        let newer: SharedTask = serde_json::from_value(json!({
            "uuid": "00000000-0000-4000-8000-000000000002",
            "entry": "2026-01-01T00:00:00Z",
            "modified": "2026-01-03T00:00:00Z",
            "arena": "work",
            "shared_id": shared_id,
            "fields": {"description": "clean floor", "priority": "H"}
        }))
        .expect("task");

        // The stores re-stamp `modified` on save, so diff over the raw
        // records and only apply against the stores.
        let candidates = resolve(
            build_sync_list(std::slice::from_ref(&older), std::slice::from_ref(&newer))
                .expect("diff"),
        );
        let reviewed = review(candidates, &mut BulkAccept).expect("review");
        let outcome = carry_out(reviewed, &mut local, &mut remote);

        assert_eq!(outcome.downloaded, 1);
        let local_tasks = local.query("arena:work").expect("query");
        assert_eq!(local_tasks.len(), 1);
        assert_eq!(local_tasks[0].fields().get("priority"), Some(&json!("H")));
    }
}
