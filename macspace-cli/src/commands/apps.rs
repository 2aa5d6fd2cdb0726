//! `macspace apps`

use anyhow::Result;

use super::{discovery, print_bullets};

pub fn run() -> Result<()> {
    let apps = discovery().list_installed_apps();
    if apps.is_empty() {
        println!("No applications detected in /Applications or ~/Applications.");
        return Ok(());
    }
    println!("Installed applications ({}):", apps.len());
    print_bullets(&apps);
    Ok(())
}
