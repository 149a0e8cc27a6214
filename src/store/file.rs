//! File-backed task store: one JSON document per replica locator.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use time::OffsetDateTime;

use super::{StoreError, TaskStore};
use crate::core::fields::EDITABLE_FIELDS;
use crate::core::{ArenaName, SharedTask};

/// A task store persisted as a single JSON array of tasks.
///
/// A missing file is an empty store; the file is only created on the
/// first save. Every save rewrites the whole document atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    tasks: Vec<SharedTask>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                tasks: Vec::new(),
            });
        }
        let contents = fs::read_to_string(&path).map_err(|err| StoreError::Read {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        if contents.trim().is_empty() {
            return Ok(Self {
                path,
                tasks: Vec::new(),
            });
        }
        let tasks = serde_json::from_str(&contents).map_err(|err| StoreError::Parse {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        Ok(Self { path, tasks })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[SharedTask] {
        &self.tasks
    }

    fn flush(&self) -> Result<(), StoreError> {
        let write_error = |reason: String| StoreError::Write {
            path: self.path.clone(),
            reason,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|err| write_error(err.to_string()))?;
        let contents = serde_json::to_string_pretty(&self.tasks)
            .map_err(|err| write_error(err.to_string()))?;
        let temp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|err| write_error(err.to_string()))?;
        fs::write(temp.path(), contents.as_bytes()).map_err(|err| write_error(err.to_string()))?;
        temp.persist(&self.path)
            .map_err(|err| write_error(err.to_string()))?;
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn query(&self, pattern: &str) -> Result<Vec<SharedTask>, StoreError> {
        Ok(self
            .tasks
            .iter()
            .filter(|task| matches(task, pattern))
            .cloned()
            .collect())
    }

    fn add(&mut self, template: &SharedTask) -> Result<SharedTask, StoreError> {
        let mut task = SharedTask::new("");
        task.copy_editable_from(template);
        Ok(task)
    }

    fn save(&mut self, task: &SharedTask) -> Result<(), StoreError> {
        let mut stored = task.clone();
        stored.touch(OffsetDateTime::now_utc());
        match self.tasks.iter_mut().find(|t| t.uuid() == task.uuid()) {
            Some(slot) => *slot = stored,
            None => self.tasks.push(stored),
        }
        self.flush()
    }
}

fn matches(task: &SharedTask, pattern: &str) -> bool {
    pattern.split_whitespace().all(|token| {
        match token.split_once(':') {
            Some(("arena", value)) => {
                if value.is_empty() {
                    task.arena().is_none()
                } else {
                    task.arena().map(ArenaName::as_str) == Some(value)
                }
            }
            Some((field, value)) if EDITABLE_FIELDS.contains(&field) => {
                field_text(task, field) == value
            }
            Some(_) => false,
            None => task.description().contains(token),
        }
    })
}

fn field_text(task: &SharedTask, field: &str) -> String {
    match task.fields().get(field) {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}
