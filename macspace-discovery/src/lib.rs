//! Installed-application discovery for `macspace`.
//!
//! [`Discovery::list_installed_apps`] scans application directories for
//! `*.app` bundles, then merges results from an [`AppSearch`] capability
//! (Spotlight's `mdfind` on macOS). The search is advisory: any failure is
//! logged and the directory scan is returned on its own.

mod search;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub use search::{
    AppSearch, MdfindSearch, NoSearch, SearchError, StaticSearch, DEFAULT_SEARCH_TIMEOUT,
};

/// Extension marking an application bundle.
pub const APP_BUNDLE_EXT: &str = "app";

/// Where installed applications are looked for.
pub struct Discovery {
    app_dirs: Vec<PathBuf>,
    search: Box<dyn AppSearch>,
}

impl Discovery {
    pub fn new(app_dirs: Vec<PathBuf>, search: Box<dyn AppSearch>) -> Self {
        Self { app_dirs, search }
    }

    /// `/Applications` and `<home>/Applications`, plus `mdfind` on macOS.
    /// Without a home directory only `/Applications` is scanned.
    pub fn system(home: Option<&Path>) -> Self {
        Self::new(default_app_dirs(home), default_search())
    }

    pub fn app_dirs(&self) -> &[PathBuf] {
        &self.app_dirs
    }

    /// Names of installed applications, deduplicated and sorted
    /// case-insensitively.
    pub fn list_installed_apps(&self) -> Vec<String> {
        let mut apps = BTreeSet::new();
        for dir in &self.app_dirs {
            scan_app_dir(dir, &mut apps);
        }

        match self.search.search() {
            Ok(paths) => {
                let before = apps.len();
                apps.extend(paths.iter().filter_map(|p| app_bundle_name(p)));
                tracing::debug!(found = apps.len() - before, "merged app search results");
            }
            Err(err) => {
                tracing::debug!(error = %err, "app search unavailable; using directory scan only");
            }
        }

        sort_case_insensitive(apps)
    }
}

pub fn default_app_dirs(home: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/Applications")];
    dirs.extend(home.map(|h| h.join("Applications")));
    dirs
}

#[cfg(target_os = "macos")]
fn default_search() -> Box<dyn AppSearch> {
    Box::new(MdfindSearch::default())
}

#[cfg(not(target_os = "macos"))]
fn default_search() -> Box<dyn AppSearch> {
    Box::new(NoSearch)
}

/// Bundle name without the `.app` suffix, or `None` for anything else.
pub fn app_bundle_name(path: &Path) -> Option<String> {
    if path.extension()? != APP_BUNDLE_EXT {
        return None;
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}

/// Non-recursive scan; a missing or unreadable directory adds nothing.
fn scan_app_dir(dir: &Path, apps: &mut BTreeSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "skipping application directory");
            return;
        }
    };
    apps.extend(
        entries
            .filter_map(|e| e.ok())
            .filter_map(|e| app_bundle_name(&e.path())),
    );
}

fn sort_case_insensitive(apps: BTreeSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = apps.into_iter().collect();
    // BTreeSet order is the tiebreak for names differing only in case.
    sorted.sort_by_cached_key(|a| a.to_lowercase());
    sorted
}
