//! In-memory workspace operations over a loaded [`Document`].
//!
//! Nothing here touches the filesystem. Callers load through
//! [`crate::Store`], apply one operation, and save only when it mutated.
//! Expected conditions (missing workspace, duplicate name) come back as
//! [`WorkspaceError`] with the document left untouched.

use crate::error::WorkspaceError;
use crate::types::{Document, Workspace, WorkspaceName, WorkspaceSummary};

/// Split a comma-separated app list, trimming entries and dropping empty ones.
pub fn parse_app_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_owned)
        .collect()
}

/// First workspace whose name matches exactly.
pub fn find<'a>(doc: &'a Document, name: &str) -> Option<&'a Workspace> {
    doc.workspaces.iter().find(|w| w.name == *name)
}

fn find_mut<'a>(doc: &'a mut Document, name: &str) -> Result<&'a mut Workspace, WorkspaceError> {
    doc.workspaces
        .iter_mut()
        .find(|w| w.name == *name)
        .ok_or_else(|| not_found(name))
}

/// Append a new workspace seeded with the apps in `apps_csv`.
///
/// Repeated entries in the input keep their first occurrence only.
pub fn create<'a>(
    doc: &'a mut Document,
    name: &str,
    apps_csv: Option<&str>,
) -> Result<&'a Workspace, WorkspaceError> {
    if find(doc, name).is_some() {
        return Err(WorkspaceError::AlreadyExists {
            name: WorkspaceName::from(name),
        });
    }

    let mut workspace = Workspace::new(name);
    for app in apps_csv.map(parse_app_list).unwrap_or_default() {
        if !workspace.contains(&app) {
            workspace.apps.push(app);
        }
    }

    doc.workspaces.push(workspace);
    Ok(doc.workspaces.last().expect("just pushed"))
}

/// Remove and return the named workspace.
pub fn delete(doc: &mut Document, name: &str) -> Result<Workspace, WorkspaceError> {
    let idx = doc
        .workspaces
        .iter()
        .position(|w| w.name == *name)
        .ok_or_else(|| not_found(name))?;
    Ok(doc.workspaces.remove(idx))
}

/// Append every app from `apps_csv` not already in the workspace.
///
/// Returns the apps actually added, in input order. An empty result means
/// the document is unchanged.
pub fn add_apps(
    doc: &mut Document,
    name: &str,
    apps_csv: &str,
) -> Result<Vec<String>, WorkspaceError> {
    let workspace = find_mut(doc, name)?;
    let mut added = Vec::new();
    for app in parse_app_list(apps_csv) {
        if !workspace.contains(&app) {
            workspace.apps.push(app.clone());
            added.push(app);
        }
    }
    Ok(added)
}

/// Remove every app from `apps_csv` that is in the workspace.
///
/// Returns the apps removed. [`WorkspaceError::NoMatchingApps`] when none of
/// them were present.
pub fn remove_apps(
    doc: &mut Document,
    name: &str,
    apps_csv: &str,
) -> Result<Vec<String>, WorkspaceError> {
    let workspace = find_mut(doc, name)?;
    let mut removed = Vec::new();
    for app in parse_app_list(apps_csv) {
        if let Some(idx) = workspace.apps.iter().position(|a| *a == app) {
            removed.push(workspace.apps.remove(idx));
        }
    }
    if removed.is_empty() {
        return Err(WorkspaceError::NoMatchingApps {
            name: WorkspaceName::from(name),
        });
    }
    Ok(removed)
}

/// Name and app count of every workspace, in stored order.
pub fn list(doc: &Document) -> Vec<WorkspaceSummary> {
    doc.workspaces
        .iter()
        .map(|w| WorkspaceSummary {
            name: w.name.clone(),
            app_count: w.apps.len(),
        })
        .collect()
}

/// Like [`find`], but reports a missing workspace as an error.
pub fn show<'a>(doc: &'a Document, name: &str) -> Result<&'a Workspace, WorkspaceError> {
    find(doc, name).ok_or_else(|| not_found(name))
}

fn not_found(name: &str) -> WorkspaceError {
    WorkspaceError::NotFound {
        name: WorkspaceName::from(name),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(name: &str, apps: &[&str]) -> Document {
        let mut doc = Document::default();
        create(&mut doc, name, Some(apps.join(",").as_str())).expect("create");
        doc
    }

    #[test]
    fn parse_trims_and_drops_empty_entries() {
        assert_eq!(
            parse_app_list(" Code , ,Terminal,, Safari "),
            vec!["Code", "Terminal", "Safari"]
        );
        assert!(parse_app_list("").is_empty());
        assert!(parse_app_list(" , ").is_empty());
    }

    #[test]
    fn create_without_apps() {
        let mut doc = Document::default();
        let ws = create(&mut doc, "Empty", None).expect("create");
        assert!(ws.apps.is_empty());
        assert_eq!(doc.workspaces.len(), 1);
    }

    #[test]
    fn create_drops_repeated_input_apps() {
        let doc = doc_with("Dev", &["Code", "Terminal", "Code"]);
        assert_eq!(find(&doc, "Dev").unwrap().apps, vec!["Code", "Terminal"]);
    }

    #[test]
    fn create_duplicate_name_is_rejected() {
        let mut doc = doc_with("Dev", &["Code"]);
        let before = doc.clone();
        let err = create(&mut doc, "Dev", Some("Safari")).unwrap_err();
        assert_eq!(err, WorkspaceError::AlreadyExists { name: "Dev".into() });
        assert_eq!(doc, before);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut doc = doc_with("Dev", &[]);
        create(&mut doc, "dev", None).expect("distinct name");
        assert!(find(&doc, "DEV").is_none());
        assert_eq!(list(&doc).len(), 2);
    }

    #[test]
    fn delete_removes_only_named_workspace() {
        let mut doc = doc_with("Dev", &["Code"]);
        create(&mut doc, "Music", Some("Spotify")).expect("create");
        let gone = delete(&mut doc, "Dev").expect("delete");
        assert_eq!(gone.name, WorkspaceName::from("Dev"));
        assert_eq!(
            list(&doc),
            vec![WorkspaceSummary {
                name: "Music".into(),
                app_count: 1,
            }]
        );
    }

    #[test]
    fn delete_missing_reports_not_found() {
        let mut doc = Document::default();
        let err = delete(&mut doc, "Nope").unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound { .. }));
    }

    #[test]
    fn add_skips_existing_and_keeps_input_order() {
        let mut doc = doc_with("Dev", &["Code"]);
        let added = add_apps(&mut doc, "Dev", "Safari,Code,Notes,Safari").expect("add");
        assert_eq!(added, vec!["Safari", "Notes"]);
        assert_eq!(find(&doc, "Dev").unwrap().apps, vec!["Code", "Safari", "Notes"]);
    }

    #[test]
    fn add_to_missing_workspace() {
        let mut doc = Document::default();
        let err = add_apps(&mut doc, "Dev", "Code").unwrap_err();
        assert_eq!(err, WorkspaceError::NotFound { name: "Dev".into() });
    }

    #[test]
    fn remove_reports_removed_apps() {
        let mut doc = doc_with("Dev", &["Code", "Terminal", "Safari"]);
        let removed = remove_apps(&mut doc, "Dev", "Safari, Ghost ,Code").expect("remove");
        assert_eq!(removed, vec!["Safari", "Code"]);
        assert_eq!(find(&doc, "Dev").unwrap().apps, vec!["Terminal"]);
    }

    #[test]
    fn remove_distinguishes_missing_workspace_from_no_match() {
        let mut doc = doc_with("Dev", &["Code"]);
        assert!(matches!(
            remove_apps(&mut doc, "Other", "Code").unwrap_err(),
            WorkspaceError::NotFound { .. }
        ));
        assert!(matches!(
            remove_apps(&mut doc, "Dev", "Ghost").unwrap_err(),
            WorkspaceError::NoMatchingApps { .. }
        ));
        assert_eq!(find(&doc, "Dev").unwrap().apps, vec!["Code"]);
    }

    #[test]
    fn show_missing() {
        let doc = Document::default();
        assert!(show(&doc, "Dev").is_err());
    }
}
