use super::common::load_registry;
use crate::cli::CliCtx;
use crate::cli::render::print_line;
use crate::Result;

pub fn handle(ctx: &CliCtx) -> Result<()> {
    let registry = load_registry(ctx)?;
    if registry.arenas().is_empty() {
        return print_line("No arenas configured.");
    }
    print_line("The following arenas are available:")?;
    for arena in registry.arenas() {
        print_line(&format!("arena : {}", arena.name()))?;
        print_line(&format!("local : {}", arena.local_data().display()))?;
        print_line(&format!("remote: {}", arena.remote_data().display()))?;
    }
    Ok(())
}
