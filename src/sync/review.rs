//! The decision layer: let an external actor accept, override, or cancel
//! the proposed actions.

use super::plan::{Action, Disposition, SyncCandidate};
use crate::Result;

/// The single upfront choice over the whole candidate list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewMode {
    /// Every candidate's action becomes its resolved disposition.
    AcceptAll,
    /// Decide candidate by candidate, in list order.
    Manual,
    /// Abort the pass with no actions.
    Cancel,
}

/// One manual decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManualChoice {
    Upload,
    Download,
    Skip,
    /// Abort the remaining review and discard every decision already
    /// made in this pass.
    CancelAll,
}

/// The reviewing actor: an interactive prompt or a programmatic policy.
///
/// `review` drives it strictly sequentially; each call blocks the pass
/// until a decision comes back.
pub trait SyncReviewer {
    fn choose_mode(&mut self, candidates: &[SyncCandidate]) -> Result<ReviewMode>;
    fn choose_action(&mut self, candidate: &SyncCandidate) -> Result<ManualChoice>;
}

/// Accepts every suggestion without interaction.
#[derive(Clone, Copy, Debug, Default)]
pub struct BulkAccept;

impl SyncReviewer for BulkAccept {
    fn choose_mode(&mut self, _candidates: &[SyncCandidate]) -> Result<ReviewMode> {
        Ok(ReviewMode::AcceptAll)
    }

    fn choose_action(&mut self, _candidate: &SyncCandidate) -> Result<ManualChoice> {
        Ok(ManualChoice::Skip)
    }
}

/// Reduce the proposal list to the final action list.
///
/// Returns the empty list on cancellation; an empty input short-circuits
/// without consulting the reviewer (the caller reports "in sync").
pub fn review(
    mut candidates: Vec<SyncCandidate>,
    reviewer: &mut dyn SyncReviewer,
) -> Result<Vec<SyncCandidate>> {
    if candidates.is_empty() {
        return Ok(candidates);
    }
    match reviewer.choose_mode(&candidates)? {
        ReviewMode::AcceptAll => {
            for candidate in &mut candidates {
                candidate.set_action(accepted_action(candidate.disposition()));
            }
            Ok(candidates)
        }
        ReviewMode::Manual => {
            for index in 0..candidates.len() {
                let choice = reviewer.choose_action(&candidates[index])?;
                let action = match choice {
                    ManualChoice::Upload => Action::Upload,
                    ManualChoice::Download => Action::Download,
                    ManualChoice::Skip => Action::Skip,
                    ManualChoice::CancelAll => return Ok(Vec::new()),
                };
                candidates[index].set_action(action);
            }
            Ok(candidates)
        }
        ReviewMode::Cancel => Ok(Vec::new()),
    }
}

fn accepted_action(disposition: Disposition) -> Action {
    match disposition {
        Disposition::Upload => Action::Upload,
        Disposition::Download => Action::Download,
        // unresolved conflicts are never applied
        Disposition::Conflict => Action::Skip,
    }
}
