//! macspace core library: domain types, store persistence, registry operations.
//!
//! - [`types`]: [`Workspace`], [`Document`], newtypes
//! - [`error`]: [`StoreError`], [`WorkspaceError`]
//! - [`store`]: load / save / ensure of the JSON store file
//! - [`registry`]: in-memory create / delete / add / remove / list

pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{StoreError, WorkspaceError};
pub use store::Store;
pub use types::{Document, Workspace, WorkspaceName, WorkspaceSummary};
