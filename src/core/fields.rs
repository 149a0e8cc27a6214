//! The task field model.
//!
//! A task carries a map of editable fields (free-form JSON scalars or
//! arrays, keyed by a fixed name set) plus read-only system fields owned
//! by the store. Reconciliation compares and copies editable fields only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fields the sync engine may compare and write, in canonical order.
pub const EDITABLE_FIELDS: &[&str] = &[
    "annotations",
    "depends",
    "description",
    "due",
    "end",
    "imask",
    "mask",
    "parent",
    "priority",
    "project",
    "recur",
    "scheduled",
    "start",
    "status",
    "tags",
    "until",
    "wait",
];

/// Fields owned by the store; never written through the field map.
pub const READ_ONLY_FIELDS: &[&str] = &["entry", "id", "modified", "urgency", "uuid"];

/// Attempt to write a field the sync core must not touch, or one that
/// does not exist at all.
#[derive(Debug, Error, Clone)]
pub enum FieldError {
    #[error("field `{field}` is read-only")]
    ReadOnly { field: String },
    #[error("field `{field}` is not a task field")]
    Unknown { field: String },
}

/// The editable field map of one task.
///
/// Unset and empty are the same state: writing null or an empty string
/// clears the entry, so two maps compare equal regardless of which
/// representation of "no value" they hold.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskFields(BTreeMap<String, Value>);

impl TaskFields {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        if READ_ONLY_FIELDS.contains(&field) {
            return Err(FieldError::ReadOnly {
                field: field.to_string(),
            });
        }
        if !EDITABLE_FIELDS.contains(&field) {
            return Err(FieldError::Unknown {
                field: field.to_string(),
            });
        }
        self.insert_raw(field, value);
        Ok(())
    }

    pub(crate) fn insert_raw(&mut self, field: &str, value: Value) {
        if is_unset(&value) {
            self.0.remove(field);
        } else {
            self.0.insert(field.to_string(), value);
        }
    }

    /// Names of editable fields whose values differ between the two maps,
    /// in canonical field order.
    pub fn differing(&self, other: &TaskFields) -> Vec<&'static str> {
        EDITABLE_FIELDS
            .iter()
            .copied()
            .filter(|field| self.get(field) != other.get(field))
            .collect()
    }

    /// Overwrite every editable field with the other map's value,
    /// clearing fields the other map does not carry.
    pub fn copy_from(&mut self, other: &TaskFields) {
        for field in EDITABLE_FIELDS {
            match other.get(field) {
                Some(value) => {
                    self.0.insert((*field).to_string(), value.clone());
                }
                None => {
                    self.0.remove(*field);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
