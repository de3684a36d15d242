use std::fs;
use todolist_core::{JsonFileStore, Priority, Project, StateStore, StoreError, Todo};

#[test]
fn load_missing_file_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("todo_projects.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("todo_projects.json"));

    let mut project = Project::new("chores");
    project.add_todo(Todo::new("laundry", "whites only", "2026-09-02", Priority::Medium));
    let state = vec![project];

    store.save(&state).unwrap();
    let loaded = store.load().unwrap().expect("state should exist after save");
    assert_eq!(loaded, state);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/data/todo_projects.json");
    let store = JsonFileStore::new(&path);

    store.save(&[Project::new("only")]).unwrap();
    assert!(path.exists());
}

#[test]
fn load_corrupt_document_returns_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_projects.json");
    fs::write(&path, "{ not json ]").unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}

#[test]
fn stored_document_is_a_json_array_of_projects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_projects.json");
    let store = JsonFileStore::new(&path);

    store.save(&[Project::new("a"), Project::new("b")]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let projects = value.as_array().expect("top-level value should be an array");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["name"], "a");
    assert_eq!(projects[0]["todos"], serde_json::json!([]));
}
