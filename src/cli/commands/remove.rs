use clap::Args;

use super::common::{load_registry, require_arena};
use crate::arena::withdraw_matching;
use crate::cli::CliCtx;
use crate::cli::render::print_line;
use crate::Result;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Arena to withdraw the tasks from.
    #[arg(value_name = "ARENA")]
    pub arena: String,

    /// Task filter tokens (default: every task of the arena).
    #[arg(value_name = "FILTER")]
    pub filter: Vec<String>,
}

pub fn handle(ctx: &CliCtx, args: RemoveArgs) -> Result<()> {
    let registry = load_registry(ctx)?;
    let arena = require_arena(&registry, &args.arena)?;
    let mut local = arena.open_local()?;
    let withdrawn = withdraw_matching(arena.name(), &mut local, &args.filter.join(" "))?;
    tracing::info!(arena = %arena.name(), count = withdrawn.len(), "tasks detached");
    print_line(&format!(
        "{} task(s) removed from {}.",
        withdrawn.len(),
        arena.name()
    ))
}
