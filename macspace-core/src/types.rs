//! Domain types for the macspace store.
//!
//! The on-disk shape is `{ "workspaces": [ { "name": ..., "apps": [...] } ] }`.
//! Newtypes serialize as their inner string, so the JSON stays plain.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed, case-sensitive workspace name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceName(pub String);

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WorkspaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for WorkspaceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A named, ordered group of application display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: WorkspaceName,
    /// Application display names as passed to `open -a`. No duplicates.
    pub apps: Vec<String>,
}

impl Workspace {
    pub fn new(name: impl Into<WorkspaceName>) -> Self {
        Self {
            name: name.into(),
            apps: Vec::new(),
        }
    }

    pub fn contains(&self, app: &str) -> bool {
        self.apps.iter().any(|a| a == app)
    }
}

/// Root of the persisted store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Document {
    pub workspaces: Vec<Workspace>,
}

/// Read-only row returned by [`crate::registry::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSummary {
    pub name: WorkspaceName,
    pub app_count: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
