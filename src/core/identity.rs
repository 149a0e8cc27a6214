//! Identity atoms.
//!
//! ArenaName: the name of a shared collection
//! SharedTaskId: cross-replica task identity, assigned once at attach time

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Invalid arena name.
#[derive(Debug, Error, Clone)]
#[error("arena name `{raw}` is invalid: {reason}")]
pub struct InvalidName {
    pub raw: String,
    pub reason: String,
}

/// Invalid shared task id.
#[derive(Debug, Error, Clone)]
#[error("shared task id `{raw}` is invalid: {reason}")]
pub struct InvalidId {
    pub raw: String,
    pub reason: String,
}

/// Arena name - non-empty string after trimming.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArenaName(String);

impl ArenaName {
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidName> {
        let s = s.into();
        if s.trim().is_empty() {
            Err(InvalidName {
                raw: s,
                reason: "empty".into(),
            })
        } else {
            Ok(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ArenaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArenaName({:?})", self.0)
    }
}

impl fmt::Display for ArenaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ArenaName {
    type Error = InvalidName;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        ArenaName::new(s)
    }
}

impl From<ArenaName> for String {
    fn from(name: ArenaName) -> String {
        name.0
    }
}

/// Cross-replica task identity.
///
/// Assigned once when a task is first attached to an arena and carried
/// verbatim to the other replica; two records are the same logical task
/// iff their ids are equal, regardless of content.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedTaskId(Uuid);

impl SharedTaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse_str(s: &str) -> Result<Self, InvalidId> {
        Uuid::parse_str(s).map(Self).map_err(|err| InvalidId {
            raw: s.to_string(),
            reason: err.to_string(),
        })
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for SharedTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedTaskId({})", self.0)
    }
}

impl fmt::Display for SharedTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
