use clap::Args;

use super::common::{load_registry, require_arena};
use crate::arena::withdraw_matching;
use crate::cli::CliCtx;
use crate::cli::render::print_line;
use crate::Result;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Arena to delete.
    #[arg(value_name = "ARENA")]
    pub arena: String,
}

pub fn handle(ctx: &CliCtx, args: DeleteArgs) -> Result<()> {
    let mut registry = load_registry(ctx)?;
    let arena = require_arena(&registry, &args.arena)?.clone();

    // Detaching is best-effort: an unreachable local store must not make
    // the arena undeletable.
    let detach = arena
        .open_local()
        .map_err(crate::Error::from)
        .and_then(|mut store| withdraw_matching(arena.name(), &mut store, ""));
    if let Err(err) = detach {
        tracing::warn!(arena = %arena.name(), "could not detach local tasks: {err}");
    }

    registry.delete(arena.name().as_str())?;
    print_line(&format!("Arena {} deleted.", arena.name()))
}
