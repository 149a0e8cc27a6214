use crate::arena::{Arena, ArenaRegistry, RegistryStatus};
use crate::cli::CliCtx;
use crate::cli::render::print_line;
use crate::{Error, Result};

/// Bring up the registry and report how it came up.
pub fn load_registry(ctx: &CliCtx) -> Result<ArenaRegistry> {
    let (registry, status) = ArenaRegistry::load(&ctx.registry_path)?;
    match status {
        RegistryStatus::Loaded => print_line("Arenas loaded.")?,
        RegistryStatus::Created => print_line(&format!(
            "New arena registry created at {}.",
            registry.path().display()
        ))?,
        RegistryStatus::Corrupt => print_line(&format!(
            "Warning: registry file {} is empty or corrupt.",
            registry.path().display()
        ))?,
    }
    Ok(registry)
}

pub fn require_arena<'a>(registry: &'a ArenaRegistry, name: &str) -> Result<&'a Arena> {
    registry.find(name).ok_or_else(|| Error::ArenaNotFound {
        name: name.to_string(),
    })
}
