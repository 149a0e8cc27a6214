//! The `ta` command-line surface.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

pub mod commands;
pub mod render;

#[derive(Parser, Debug)]
#[command(
    name = "ta",
    version,
    about = "Share task arenas between two task stores and reconcile them on demand",
    infer_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Arena registry file (default: TA_CONFIG or the user config dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new arena.
    Create(commands::create::CreateArgs),

    /// Delete an arena, detaching its local tasks first.
    Delete(commands::delete::DeleteArgs),

    /// List configured arenas.
    #[command(alias = "ls")]
    List,

    /// Attach local tasks matching a filter to an arena.
    Add(commands::add::AddArgs),

    /// Detach local tasks matching a filter from an arena.
    Remove(commands::remove::RemoveArgs),

    /// Reconcile an arena's local and remote replicas.
    Sync(commands::sync::SyncArgs),
}

/// Execution context shared by every command.
pub struct CliCtx {
    pub registry_path: PathBuf,
}

pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::parse_from(args)
}

pub fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Create(_) => "create",
        Command::Delete(_) => "delete",
        Command::List => "list",
        Command::Add(_) => "add",
        Command::Remove(_) => "remove",
        Command::Sync(_) => "sync",
    }
}

pub fn run(cli: Cli) -> crate::Result<()> {
    let ctx = CliCtx {
        registry_path: cli.config.unwrap_or_else(crate::paths::registry_path),
    };
    match cli.command {
        Command::Create(args) => commands::create::handle(&ctx, args),
        Command::Delete(args) => commands::delete::handle(&ctx, args),
        Command::List => commands::list::handle(&ctx),
        Command::Add(args) => commands::add::handle(&ctx, args),
        Command::Remove(args) => commands::remove::handle(&ctx, args),
        Command::Sync(args) => commands::sync::handle(&ctx, args),
    }
}
