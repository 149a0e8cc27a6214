use clap::Args;

use super::common::{load_registry, require_arena};
use crate::cli::CliCtx;
use crate::cli::render::{InteractiveReviewer, preview_table, print_line};
use crate::store::TaskStore;
use crate::sync::{BulkAccept, build_sync_list, carry_out, resolve, review};
use crate::Result;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Arena to reconcile.
    #[arg(value_name = "ARENA")]
    pub arena: String,

    /// Accept every suggested action without prompting.
    #[arg(long)]
    pub all: bool,
}

pub fn handle(ctx: &CliCtx, args: SyncArgs) -> Result<()> {
    let registry = load_registry(ctx)?;
    let arena = require_arena(&registry, &args.arena)?;
    let mut local = arena.open_local()?;
    let mut remote = arena.open_remote()?;

    let pattern = format!("arena:{}", arena.name());
    let local_tasks = local.query(&pattern)?;
    let remote_tasks = remote.query(&pattern)?;
    tracing::debug!(
        arena = %arena.name(),
        local = local_tasks.len(),
        remote = remote_tasks.len(),
        "replicas queried"
    );

    let candidates = resolve(build_sync_list(&local_tasks, &remote_tasks)?);
    if candidates.is_empty() {
        return print_line(&format!("Arena {} is in sync.", arena.name()));
    }
    tracing::info!(
        arena = %arena.name(),
        candidates = candidates.len(),
        "sync plan ready"
    );

    print_line(&format!(
        "Suggesting the following sync operations on {}...",
        arena.name()
    ))?;
    let reviewed = if args.all {
        print_line(&preview_table(&candidates))?;
        review(candidates, &mut BulkAccept)?
    } else {
        let mut reviewer = InteractiveReviewer::new(std::io::stdin().lock(), std::io::stdout());
        review(candidates, &mut reviewer)?
    };
    if reviewed.is_empty() {
        return print_line("Sync canceled.");
    }

    let outcome = carry_out(reviewed, &mut local, &mut remote);
    print_line(&format!(
        "{} uploaded, {} downloaded, {} skipped.",
        outcome.uploaded, outcome.downloaded, outcome.skipped
    ))?;
    if outcome.failed > 0 {
        print_line(&format!(
            "{} action(s) failed; rerun sync to retry.",
            outcome.failed
        ))?;
    }
    print_line("Sync complete.")
}
