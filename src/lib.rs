//! Shared task arenas on top of independent task stores.
//!
//! An arena is a named collection of tasks shared between exactly two
//! replicas (a local and a remote task store). Module hierarchy follows
//! type dependency order:
//! - core: identity atoms, the editable field set, the shared task record
//! - store: the task store seam plus the file-backed implementation
//! - arena: arena definitions and the persisted registry
//! - sync: reconciliation plan, review, and execution
//! - cli: the `ta` binary surface

#![forbid(unsafe_code)]

pub mod arena;
pub mod cli;
pub mod core;
mod error;
pub mod paths;
pub mod store;
pub mod sync;
pub mod telemetry;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{ArenaName, SharedTask, SharedTaskId, TaskFields};
