//! macspace: group macOS applications into workspaces and open them together.
//!
//! # Usage
//!
//! ```text
//! macspace create <name> [--apps "Code,Terminal"]
//! macspace list
//! macspace show <name>
//! macspace delete <name>
//! macspace add <name> --apps "Safari,Notes"
//! macspace remove <name> --apps "Notes"
//! macspace open <name>
//! macspace apps
//! ```
//!
//! Workspaces live in `~/.macspace/workspaces.json` unless `--store` or
//! `MACSPACE_STORE` names another file.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use commands::{
    manage::{AddArgs, CreateArgs, DeleteArgs, RemoveArgs},
    open::OpenArgs,
    view::ShowArgs,
};
use macspace_core::Store;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "macspace",
    version,
    about = "macspace - workspace manager for macOS",
    long_about = None,
)]
struct Cli {
    /// Workspace store file (defaults to ~/.macspace/workspaces.json).
    #[arg(long, global = true, env = "MACSPACE_STORE", value_name = "PATH")]
    store: Option<PathBuf>,

    /// Log discovery and launch details to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a workspace.
    Create(CreateArgs),

    /// List all workspaces.
    List,

    /// Show a workspace and its apps.
    Show(ShowArgs),

    /// Delete a workspace.
    Delete(DeleteArgs),

    /// Add apps to a workspace.
    Add(AddArgs),

    /// Remove apps from a workspace.
    Remove(RemoveArgs),

    /// Open all apps in a workspace.
    Open(OpenArgs),

    /// List installed macOS apps detected.
    Apps,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help().context("failed to print help")?;
        return Ok(());
    };

    let store = match cli.store {
        Some(path) => Store::new(path),
        None => Store::default_location().context("failed to locate workspace store")?,
    };
    tracing::debug!(path = %store.path().display(), "using workspace store");

    match command {
        Commands::Create(args) => args.run(&store),
        Commands::List => commands::view::list(&store),
        Commands::Show(args) => args.run(&store),
        Commands::Delete(args) => args.run(&store),
        Commands::Add(args) => args.run(&store),
        Commands::Remove(args) => args.run(&store),
        Commands::Open(args) => args.run(&store),
        Commands::Apps => commands::apps::run(),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
