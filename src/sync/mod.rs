//! Reconciliation of one arena across its two replicas.
//!
//! A sync pass is three strictly sequential stages:
//! plan (diff + default resolution) -> review (accept/override/cancel) ->
//! apply (execute against the stores). Candidates live only for the pass.

pub mod apply;
pub mod plan;
pub mod review;

pub use apply::{SyncOutcome, carry_out};
pub use plan::{Action, Disposition, SyncCandidate, build_sync_list, resolve};
pub use review::{BulkAccept, ManualChoice, ReviewMode, SyncReviewer, review};
