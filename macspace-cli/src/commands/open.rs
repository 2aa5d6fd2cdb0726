//! `macspace open <name>`: launch every app in a workspace.

use std::collections::BTreeSet;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use macspace_core::{registry, Store};
use macspace_launcher::{open_all, LaunchAttempt, OpenLauncher, Presence};

use super::{discovery, load};

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Workspace name.
    pub name: String,
}

impl OpenArgs {
    pub fn run(self, store: &Store) -> Result<()> {
        let doc = load(store)?;
        let Ok(workspace) = registry::show(&doc, &self.name) else {
            println!("Workspace '{}' not found.", self.name);
            return Ok(());
        };
        if workspace.apps.is_empty() {
            println!("Workspace '{}' has no apps to open.", workspace.name);
            return Ok(());
        }

        println!("Opening workspace '{}' apps...", workspace.name);
        let installed: BTreeSet<String> = discovery().list_installed_apps().into_iter().collect();
        let attempts = open_all(
            &workspace.apps,
            &installed,
            &OpenLauncher::default(),
            print_attempt,
        );

        let failed = attempts.iter().filter(|a| !a.succeeded()).count();
        if failed > 0 {
            println!(
                "{}",
                format!("{failed} of {} apps could not be opened.", attempts.len()).yellow()
            );
        }
        Ok(())
    }
}

fn print_attempt(attempt: &LaunchAttempt) {
    let app = &attempt.app;
    match attempt.presence {
        Presence::Installed => println!("  Opening {app} ..."),
        Presence::Unlisted => {
            println!("  Attempting to open {app} (not found in standard locations)...")
        }
    }
    if attempt.succeeded() {
        return;
    }
    let line = match attempt.presence {
        Presence::Installed => format!("    Failed to open {app} (open command error)."),
        Presence::Unlisted => format!("    Could not open {app}. Is the app name correct?"),
    };
    println!("{}", line.red());
}
