//! Store error-message, atomic-write-safety, and round-trip integration tests.

use std::fs;

use assert_fs::prelude::*;
use macspace_core::{registry, Document, Store, StoreError, Workspace, WorkspaceName};
use predicates::prelude::predicate;
use rstest::rstest;

fn ws(name: &str, apps: &[&str]) -> Workspace {
    Workspace {
        name: WorkspaceName::from(name),
        apps: apps.iter().map(|a| a.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_creates_store_on_first_access() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::at_home(home.path());
    let doc = store.load().expect("load");
    assert!(doc.workspaces.is_empty());
    home.child(".macspace/workspaces.json")
        .assert(predicate::str::contains("\"workspaces\""));
}

#[test]
fn load_corrupt_json_returns_parse_error_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".macspace/workspaces.json")
        .write_str("{ \"workspaces\": [ { \"name\": ")
        .expect("write");

    let err = Store::at_home(home.path()).load().unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("workspaces.json"), "must contain file path, got: {msg}");
}

#[test]
fn load_wrong_shape_returns_parse_error() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".macspace/workspaces.json")
        .write_str("[\"this is a list, not a document\"]")
        .expect("write");

    let err = Store::at_home(home.path()).load().unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got: {err}");
}

#[test]
fn corrupt_store_is_not_repaired() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let file = home.child(".macspace/workspaces.json");
    file.write_str("not json").expect("write");

    let store = Store::at_home(home.path());
    assert!(store.load().is_err());
    assert!(store.load().is_err());
    file.assert("not json");
}

#[test]
fn reads_hand_written_store() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".macspace/workspaces.json")
        .write_str(r#"{"workspaces": [{"name": "Dev", "apps": ["Code", "Terminal"]}]}"#)
        .expect("write");

    let doc = Store::at_home(home.path()).load().expect("load");
    assert_eq!(doc.workspaces, vec![ws("Dev", &["Code", "Terminal"])]);
}

// ---------------------------------------------------------------------------
// 2. Atomic write safety
// ---------------------------------------------------------------------------

#[test]
fn leftover_tmp_does_not_affect_load() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::at_home(home.path());
    let doc = Document {
        workspaces: vec![ws("Dev", &["Code"])],
    };
    store.save(&doc).expect("save");

    // Simulate crash: .tmp written but process died before rename
    let tmp = store.path().with_file_name("workspaces.json.tmp");
    fs::write(&tmp, b"CRASH - INCOMPLETE WRITE").expect("write crash tmp");

    assert_eq!(store.load().expect("load"), doc);

    store.save(&doc).expect("save over orphan");
    assert!(!tmp.exists(), ".tmp orphan is consumed by the next save");
}

#[test]
fn explicit_path_store_creates_parent_dirs() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::new(dir.path().join("nested/deeper/spaces.json"));
    store.save(&Document::default()).expect("save");
    dir.child("nested/deeper/spaces.json").assert(predicate::path::is_file());
}

// ---------------------------------------------------------------------------
// 3. Round trips
// ---------------------------------------------------------------------------

#[rstest]
#[case::empty(vec![])]
#[case::one(vec![ws("Dev", &["Code", "Terminal"])])]
#[case::no_apps(vec![ws("Empty", &[])])]
#[case::many(vec![
    ws("Dev", &["Code", "Terminal", "Docker"]),
    ws("Music", &["Spotify"]),
    ws("Écriture-执笔", &["Pages", "Microsoft Word"]),
    ws("Idle", &[]),
])]
fn save_then_load_is_identity(#[case] workspaces: Vec<Workspace>) {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::at_home(home.path());
    let doc = Document { workspaces };

    store.save(&doc).expect("save");
    let loaded = store.load().expect("load");
    assert_eq!(loaded, doc);

    let bytes = fs::read(store.path()).expect("read");
    store.save(&loaded).expect("save again");
    assert_eq!(fs::read(store.path()).expect("read again"), bytes);
}

// ---------------------------------------------------------------------------
// 4. Load → mutate → save workflows
// ---------------------------------------------------------------------------

#[test]
fn duplicate_create_leaves_stored_document_unchanged() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::at_home(home.path());

    let mut doc = store.load().expect("load");
    registry::create(&mut doc, "Dev", Some("Code,Terminal")).expect("create");
    store.save(&doc).expect("save");

    let before = store.load().expect("load before");
    let mut doc = store.load().expect("load");
    assert!(registry::create(&mut doc, "Dev", Some("Safari")).is_err());
    assert_eq!(doc, before);
    assert_eq!(store.load().expect("load after"), before);
}

#[test]
fn add_then_remove_restores_app_list() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::at_home(home.path());

    let mut doc = store.load().expect("load");
    registry::create(&mut doc, "Dev", Some("Code,Terminal")).expect("create");
    store.save(&doc).expect("save");
    let original = registry::show(&doc, "Dev").expect("show").apps.clone();

    let mut doc = store.load().expect("load");
    let added = registry::add_apps(&mut doc, "Dev", "Safari,Notes").expect("add");
    assert_eq!(added, vec!["Safari", "Notes"]);
    store.save(&doc).expect("save");

    let mut doc = store.load().expect("load");
    let removed = registry::remove_apps(&mut doc, "Dev", "Safari,Notes").expect("remove");
    assert_eq!(removed, vec!["Safari", "Notes"]);
    store.save(&doc).expect("save");

    let doc = store.load().expect("load");
    assert_eq!(registry::show(&doc, "Dev").expect("show").apps, original);
}

#[test]
fn list_counts_match_created_workspaces() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let store = Store::at_home(home.path());
    assert!(registry::list(&store.load().expect("load")).is_empty());

    let mut doc = store.load().expect("load");
    for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
        let apps: Vec<String> = (0..i).map(|n| format!("App{n}")).collect();
        registry::create(&mut doc, name, Some(apps.join(",").as_str())).expect("create");
    }
    store.save(&doc).expect("save");

    let summaries = registry::list(&store.load().expect("load"));
    assert_eq!(summaries.len(), 4);
    for (i, summary) in summaries.iter().enumerate() {
        assert_eq!(summary.app_count, i);
    }
    assert_eq!(summaries[2].name, WorkspaceName::from("C"));
}

#[test]
fn no_workspace_ever_holds_duplicate_apps() {
    let mut doc = Document::default();
    registry::create(&mut doc, "Dev", Some("Code,Code,Terminal")).expect("create");
    registry::add_apps(&mut doc, "Dev", "Terminal,Safari,Safari,Code").expect("add");

    for w in &doc.workspaces {
        let mut seen = std::collections::HashSet::new();
        assert!(w.apps.iter().all(|a| seen.insert(a)), "duplicate in {:?}", w.apps);
    }
}
