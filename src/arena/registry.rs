//! The persisted arena registry.
//!
//! A single JSON file maps arena names to their two store locators. It is
//! read wholesale at load and rewritten wholesale on every mutation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Arena;
use crate::core::ArenaName;
use crate::{Error, Result};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("failed to read registry {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("failed to write registry {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

/// How the registry file was brought up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryStatus {
    /// Existing file parsed cleanly.
    Loaded,
    /// No file; a new empty one was created.
    Created,
    /// File existed but was unreadable as a registry; treated as empty.
    /// Its contents are overwritten on the next mutation.
    Corrupt,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryDoc {
    arenas: Vec<Arena>,
}

#[derive(Debug)]
pub struct ArenaRegistry {
    path: PathBuf,
    arenas: Vec<Arena>,
}

impl ArenaRegistry {
    pub fn load(path: impl Into<PathBuf>) -> Result<(Self, RegistryStatus)> {
        let path = path.into();
        if !path.exists() {
            let registry = Self {
                path,
                arenas: Vec::new(),
            };
            registry.save()?;
            return Ok((registry, RegistryStatus::Created));
        }

        let contents = fs::read_to_string(&path).map_err(|err| RegistryError::Read {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        match serde_json::from_str::<RegistryDoc>(&contents) {
            Ok(doc) => Ok((
                Self {
                    path,
                    arenas: doc.arenas,
                },
                RegistryStatus::Loaded,
            )),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    "registry is empty or corrupt, starting with no arenas: {err}"
                );
                Ok((
                    Self {
                        path,
                        arenas: Vec::new(),
                    },
                    RegistryStatus::Corrupt,
                ))
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let write_error = |reason: String| RegistryError::Write {
            path: self.path.clone(),
            reason,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|err| write_error(err.to_string()))?;
        let doc = RegistryDoc {
            arenas: self.arenas.clone(),
        };
        let contents =
            serde_json::to_string_pretty(&doc).map_err(|err| write_error(err.to_string()))?;
        let temp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|err| write_error(err.to_string()))?;
        fs::write(temp.path(), contents.as_bytes())
            .map_err(|err| write_error(err.to_string()))?;
        temp.persist(&self.path)
            .map_err(|err| write_error(err.to_string()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn arenas(&self) -> &[Arena] {
        &self.arenas
    }

    pub fn find(&self, name: &str) -> Option<&Arena> {
        self.arenas.iter().find(|a| a.name().as_str() == name)
    }

    pub fn create(
        &mut self,
        name: ArenaName,
        local_data: PathBuf,
        remote_data: PathBuf,
    ) -> Result<()> {
        if self.find(name.as_str()).is_some() {
            return Err(Error::ArenaExists {
                name: name.to_string(),
            });
        }
        self.arenas.push(Arena::new(name, local_data, remote_data));
        self.save()
    }

    pub fn delete(&mut self, name: &str) -> Result<Arena> {
        let index = self
            .arenas
            .iter()
            .position(|a| a.name().as_str() == name)
            .ok_or_else(|| Error::ArenaNotFound {
                name: name.to_string(),
            })?;
        let arena = self.arenas.remove(index);
        self.save()?;
        Ok(arena)
    }
}
