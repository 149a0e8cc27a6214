use clap::Args;

use super::common::{load_registry, require_arena};
use crate::arena::share_matching;
use crate::cli::CliCtx;
use crate::cli::render::print_line;
use crate::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Arena to share the tasks in.
    #[arg(value_name = "ARENA")]
    pub arena: String,

    /// Task filter tokens (default: every task in the local store).
    #[arg(value_name = "FILTER")]
    pub filter: Vec<String>,
}

pub fn handle(ctx: &CliCtx, args: AddArgs) -> Result<()> {
    let registry = load_registry(ctx)?;
    let arena = require_arena(&registry, &args.arena)?;
    let mut local = arena.open_local()?;
    let shared = share_matching(arena.name(), &mut local, &args.filter.join(" "))?;
    tracing::info!(arena = %arena.name(), count = shared.len(), "tasks attached");
    print_line(&format!("{} task(s) added to {}.", shared.len(), arena.name()))
}
