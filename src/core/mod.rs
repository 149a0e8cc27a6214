//! Core domain types.
//!
//! - identity: ArenaName, SharedTaskId
//! - fields: the editable/read-only field sets and the field map
//! - task: SharedTask, the record shared between replicas

pub mod fields;
pub mod identity;
pub mod task;

pub use fields::{EDITABLE_FIELDS, FieldError, READ_ONLY_FIELDS, TaskFields};
pub use identity::{ArenaName, InvalidId, InvalidName, SharedTaskId};
pub use task::SharedTask;
