//! `macspace create|delete|add|remove`: commands that change the store.
//!
//! Each loads the store, applies one registry operation, and saves only when
//! that operation changed the document.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use macspace_core::{registry, Store, WorkspaceError};

use super::{discovery, load, print_bullets, save};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Workspace name.
    pub name: String,

    /// Comma-separated list of app names to add.
    #[arg(long, value_name = "CSV")]
    pub apps: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Workspace name.
    pub name: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Workspace name.
    pub name: String,

    /// Comma-separated app names to add.
    #[arg(long, value_name = "CSV")]
    pub apps: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Workspace name.
    pub name: String,

    /// Comma-separated app names to remove.
    #[arg(long, value_name = "CSV")]
    pub apps: String,
}

impl CreateArgs {
    pub fn run(self, store: &Store) -> Result<()> {
        let mut doc = load(store)?;
        let added = match registry::create(&mut doc, &self.name, self.apps.as_deref()) {
            Ok(workspace) => workspace.apps.clone(),
            Err(WorkspaceError::AlreadyExists { name }) => {
                println!("Workspace '{name}' already exists.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        save(store, &doc)?;
        println!("{} Created workspace '{}'.", "✓".green(), self.name);

        // Discovery is display-only here; the workspace is already saved.
        let installed = discovery().list_installed_apps();
        println!("Installed apps detected on this Mac:");
        if installed.is_empty() {
            println!("  (No apps found in /Applications or ~/Applications)");
        } else {
            print_bullets(&installed);
        }

        if !added.is_empty() {
            println!("\nAdded apps to workspace:");
            print_bullets(&added);
        }
        Ok(())
    }
}

impl DeleteArgs {
    pub fn run(self, store: &Store) -> Result<()> {
        let mut doc = load(store)?;
        match registry::delete(&mut doc, &self.name) {
            Ok(_) => {
                save(store, &doc)?;
                println!("{} Deleted workspace '{}'.", "✓".green(), self.name);
            }
            Err(WorkspaceError::NotFound { name }) => println!("Workspace '{name}' not found."),
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

impl AddArgs {
    pub fn run(self, store: &Store) -> Result<()> {
        let mut doc = load(store)?;
        let added = match registry::add_apps(&mut doc, &self.name, &self.apps) {
            Ok(added) => added,
            Err(WorkspaceError::NotFound { name }) => {
                println!("Workspace '{name}' not found. Create it first.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if added.is_empty() {
            println!("No new apps were added (they may already exist in workspace).");
            return Ok(());
        }
        save(store, &doc)?;
        println!("Added: {}", added.join(", "));
        Ok(())
    }
}

impl RemoveArgs {
    pub fn run(self, store: &Store) -> Result<()> {
        let mut doc = load(store)?;
        match registry::remove_apps(&mut doc, &self.name, &self.apps) {
            Ok(removed) => {
                save(store, &doc)?;
                println!("Removed: {}", removed.join(", "));
            }
            Err(WorkspaceError::NotFound { name }) => println!("Workspace '{name}' not found."),
            Err(WorkspaceError::NoMatchingApps { name }) => {
                println!("No matching apps found in workspace '{name}'.");
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}
