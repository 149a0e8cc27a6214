//! The task store seam.
//!
//! Each replica of an arena is a task store reachable through a locator
//! path. The sync engine only ever sees the `TaskStore` trait and takes
//! every store as an explicit handle; there is no process-wide default.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::SharedTask;

mod file;

pub use file::FileStore;

/// Store-level failures, named by locator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("failed to read store {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("store {} is not valid JSON: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("failed to write store {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

/// One replica's task store.
pub trait TaskStore {
    /// Filtered read. Tokens of the pattern are ANDed: `arena:<name>`
    /// matches membership, `<field>:<value>` matches an editable field's
    /// textual value, a bare token substring-matches the description.
    /// The empty pattern matches every task.
    fn query(&self, pattern: &str) -> Result<Vec<SharedTask>, StoreError>;

    /// New record handle with the template's editable fields copied and
    /// fresh store-local system fields. Not persisted until saved.
    fn add(&mut self, template: &SharedTask) -> Result<SharedTask, StoreError>;

    /// Upsert by store-local uuid and persist.
    fn save(&mut self, task: &SharedTask) -> Result<(), StoreError>;
}
