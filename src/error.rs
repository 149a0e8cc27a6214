use thiserror::Error;

use crate::arena::RegistryError;
use crate::core::fields::FieldError;
use crate::core::identity::{InvalidId, InvalidName};
use crate::store::StoreError;

/// Crate-level convenience error.
///
/// A thin wrapper over the per-module errors plus the invalid-input
/// conditions the sync engine can raise itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A record reached the reconciliation engine without a shared id.
    #[error("task `{description}` has no shared id; attach it to an arena before syncing")]
    MissingSharedId { description: String },

    #[error("arena `{name}` not found")]
    ArenaNotFound { name: String },

    #[error("arena `{name}` already exists")]
    ArenaExists { name: String },

    #[error(transparent)]
    InvalidName(#[from] InvalidName),

    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("input/output failed: {0}")]
    Io(#[from] std::io::Error),
}
