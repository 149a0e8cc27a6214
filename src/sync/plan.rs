//! The reconciliation plan: diff two replicas and resolve conflicts.

use crate::core::SharedTask;
use crate::{Error, Result};

/// The engine's default suggestion for a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Upload,
    Download,
    Conflict,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Upload => "UPLOAD",
            Disposition::Download => "DOWNLOAD",
            Disposition::Conflict => "CONFLICT",
        }
    }
}

/// The final, possibly overridden, action to execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Upload,
    Download,
    Skip,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Upload => "UPLOAD",
            Action::Download => "DOWNLOAD",
            Action::Skip => "SKIP",
        }
    }
}

/// One proposed reconciliation action, keyed by a shared id that exists
/// on at least one side.
#[derive(Clone, Debug)]
pub struct SyncCandidate {
    local: Option<SharedTask>,
    remote: Option<SharedTask>,
    fields: Vec<&'static str>,
    disposition: Disposition,
    action: Option<Action>,
}

impl SyncCandidate {
    fn conflict(local: SharedTask, remote: SharedTask, fields: Vec<&'static str>) -> Self {
        Self {
            local: Some(local),
            remote: Some(remote),
            fields,
            disposition: Disposition::Conflict,
            action: None,
        }
    }

    fn upload(local: SharedTask) -> Self {
        Self {
            local: Some(local),
            remote: None,
            fields: Vec::new(),
            disposition: Disposition::Upload,
            action: None,
        }
    }

    fn download(remote: SharedTask) -> Self {
        Self {
            local: None,
            remote: Some(remote),
            fields: Vec::new(),
            disposition: Disposition::Download,
            action: None,
        }
    }

    pub fn local(&self) -> Option<&SharedTask> {
        self.local.as_ref()
    }

    pub fn remote(&self) -> Option<&SharedTask> {
        self.remote.as_ref()
    }

    /// Differing editable field names; non-empty only for conflict-derived
    /// candidates.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub(crate) fn set_action(&mut self, action: Action) {
        self.action = Some(action);
    }

    /// Whichever side exists; for conflicts the local description.
    pub fn description(&self) -> &str {
        self.local
            .as_ref()
            .or(self.remote.as_ref())
            .map(SharedTask::description)
            .unwrap_or("")
    }
}

/// Diff two replicas of an arena into an ordered candidate list.
///
/// Pairs are matched by shared id. A pair with identical editable fields
/// is already in sync and produces no candidate. Local-only and conflict
/// candidates come first (in local input order), then remote-only
/// candidates (in remote input order).
///
/// Every record must already carry a shared id; ids are assigned at
/// attach time, never here. A record without one fails the whole call.
pub fn build_sync_list(
    local: &[SharedTask],
    remote: &[SharedTask],
) -> Result<Vec<SyncCandidate>> {
    for task in local.iter().chain(remote.iter()) {
        if task.shared_id().is_none() {
            return Err(Error::MissingSharedId {
                description: task.description().to_string(),
            });
        }
    }

    let mut candidates = Vec::new();
    for ltask in local {
        match remote.iter().find(|r| r.shared_id() == ltask.shared_id()) {
            Some(rtask) => {
                let fields = ltask.differing_fields(rtask);
                if !fields.is_empty() {
                    candidates.push(SyncCandidate::conflict(
                        ltask.clone(),
                        rtask.clone(),
                        fields,
                    ));
                }
            }
            None => candidates.push(SyncCandidate::upload(ltask.clone())),
        }
    }
    for rtask in remote {
        if !local.iter().any(|l| l.shared_id() == rtask.shared_id()) {
            candidates.push(SyncCandidate::download(rtask.clone()));
        }
    }
    Ok(candidates)
}

/// Replace every CONFLICT disposition by the last-modified heuristic:
/// the younger side wins, ties favor local (UPLOAD). A conflict with no
/// differing fields is dropped from the list entirely.
pub fn resolve(candidates: Vec<SyncCandidate>) -> Vec<SyncCandidate> {
    let mut resolved = Vec::with_capacity(candidates.len());
    for mut candidate in candidates {
        if candidate.disposition == Disposition::Conflict {
            if candidate.fields.is_empty() {
                continue;
            }
            let (Some(ltask), Some(rtask)) = (&candidate.local, &candidate.remote) else {
                continue;
            };
            candidate.disposition = if ltask.last_modified() >= rtask.last_modified() {
                Disposition::Upload
            } else {
                Disposition::Download
            };
        }
        resolved.push(candidate);
    }
    resolved
}
