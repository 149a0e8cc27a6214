use std::path::PathBuf;

use clap::Args;

use super::common::load_registry;
use crate::cli::CliCtx;
use crate::cli::render::print_line;
use crate::core::ArenaName;
use crate::Result;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Arena name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Local replica store location.
    #[arg(value_name = "LOCAL")]
    pub local_data: PathBuf,

    /// Remote replica store location.
    #[arg(value_name = "REMOTE")]
    pub remote_data: PathBuf,
}

pub fn handle(ctx: &CliCtx, args: CreateArgs) -> Result<()> {
    let mut registry = load_registry(ctx)?;
    let name = ArenaName::new(args.name)?;
    registry.create(name.clone(), args.local_data, args.remote_data)?;
    tracing::info!(arena = %name, "arena created");
    print_line(&format!("Arena {name} created."))
}
