pub mod apps;
pub mod manage;
pub mod open;
pub mod view;

use anyhow::{Context, Result};

use macspace_core::{Document, Store};
use macspace_discovery::Discovery;

/// Discovery over `/Applications`, `~/Applications` and Spotlight.
///
/// A missing home directory only drops `~/Applications` from the scan.
pub(crate) fn discovery() -> Discovery {
    let home = dirs::home_dir();
    if home.is_none() {
        tracing::debug!("home directory unknown; scanning /Applications only");
    }
    Discovery::system(home.as_deref())
}

/// One `  - item` line per entry.
pub(crate) fn print_bullets<S: AsRef<str>>(items: &[S]) {
    for item in items {
        println!("  - {}", item.as_ref());
    }
}

pub(crate) fn load(store: &Store) -> Result<Document> {
    store
        .load()
        .with_context(|| format!("failed to load workspaces from {}", store.path().display()))
}

pub(crate) fn save(store: &Store, doc: &Document) -> Result<()> {
    store
        .save(doc)
        .with_context(|| format!("failed to save workspaces to {}", store.path().display()))
}
