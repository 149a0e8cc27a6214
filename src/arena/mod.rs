//! Arena definitions and membership operations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{ArenaName, SharedTask};
use crate::store::{FileStore, StoreError, TaskStore};

mod registry;

pub use registry::{ArenaRegistry, RegistryError, RegistryStatus};

/// A named collection shared between exactly two replicas, identified by
/// their store locators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    name: ArenaName,
    local_data: PathBuf,
    remote_data: PathBuf,
}

impl Arena {
    pub fn new(name: ArenaName, local_data: PathBuf, remote_data: PathBuf) -> Self {
        Self {
            name,
            local_data,
            remote_data,
        }
    }

    pub fn name(&self) -> &ArenaName {
        &self.name
    }

    pub fn local_data(&self) -> &Path {
        &self.local_data
    }

    pub fn remote_data(&self) -> &Path {
        &self.remote_data
    }

    pub fn open_local(&self) -> Result<FileStore, StoreError> {
        FileStore::open(&self.local_data)
    }

    pub fn open_remote(&self) -> Result<FileStore, StoreError> {
        FileStore::open(&self.remote_data)
    }
}

/// Attach every task matching the pattern to the arena and persist it.
/// Tasks shared for the first time get their shared id here.
pub fn share_matching(
    arena: &ArenaName,
    store: &mut dyn TaskStore,
    pattern: &str,
) -> crate::Result<Vec<SharedTask>> {
    let mut shared = Vec::new();
    for mut task in store.query(pattern)? {
        task.attach(arena.clone());
        store.save(&task)?;
        shared.push(task);
    }
    Ok(shared)
}

/// Detach every task of the arena matching the pattern. Membership is
/// cleared; the tasks stay in the store.
pub fn withdraw_matching(
    arena: &ArenaName,
    store: &mut dyn TaskStore,
    pattern: &str,
) -> crate::Result<Vec<SharedTask>> {
    let scoped = if pattern.trim().is_empty() {
        format!("arena:{arena}")
    } else {
        format!("arena:{arena} {pattern}")
    };
    let mut withdrawn = Vec::new();
    for mut task in store.query(&scoped)? {
        task.detach();
        store.save(&task)?;
        withdrawn.push(task);
    }
    Ok(withdrawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_name(name: &str) -> ArenaName {
        ArenaName::new(name).expect("name")
    }

    #[test]
    fn share_assigns_ids_and_withdraw_clears_them() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::open(dir.path().join("local.json")).expect("open");
        store.save(&SharedTask::new("paint walls")).expect("save");
        store.save(&SharedTask::new("clean floor")).expect("save");

        let name = arena_name("home");
        let shared = share_matching(&name, &mut store, "paint").expect("share");
        assert_eq!(shared.len(), 1);
        assert!(shared[0].shared_id().is_some());

        let in_arena = store.query("arena:home").expect("query");
        assert_eq!(in_arena.len(), 1);

        let withdrawn = withdraw_matching(&name, &mut store, "").expect("withdraw");
        assert_eq!(withdrawn.len(), 1);
        assert!(store.query("arena:home").expect("query").is_empty());
        assert_eq!(store.query("").expect("query").len(), 2);
    }

    #[test]
    fn share_keeps_an_existing_shared_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::open(dir.path().join("local.json")).expect("open");

        let mut task = SharedTask::new("water plants");
        task.attach(arena_name("garden"));
        let id = task.shared_id().expect("assigned");
        store.save(&task).expect("save");

        let moved = share_matching(&arena_name("home"), &mut store, "water").expect("share");
        assert_eq!(moved[0].shared_id(), Some(id));
        assert_eq!(moved[0].arena().map(ArenaName::as_str), Some("home"));
    }
}
