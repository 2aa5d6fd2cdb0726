//! `macspace list` and `macspace show <name>`: read-only, never write.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use macspace_core::{registry, Store};

use super::{load, print_bullets};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Workspace name.
    pub name: String,
}

pub fn list(store: &Store) -> Result<()> {
    let doc = load(store)?;
    let summaries = registry::list(&doc);
    if summaries.is_empty() {
        println!("No workspaces. Create one with: macspace create NAME");
        return Ok(());
    }
    for s in summaries {
        println!("- {} ({} apps)", s.name, s.app_count);
    }
    Ok(())
}

impl ShowArgs {
    pub fn run(self, store: &Store) -> Result<()> {
        let doc = load(store)?;
        let Ok(workspace) = registry::show(&doc, &self.name) else {
            println!("Workspace '{}' not found.", self.name);
            return Ok(());
        };

        println!("Workspace: {}", workspace.name.to_string().bold());
        if workspace.apps.is_empty() {
            println!("  (no apps added)");
        } else {
            print_bullets(&workspace.apps);
        }
        Ok(())
    }
}
