use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tasklist_core::task::Task;
use tempfile::tempdir;

fn run_in(data_dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let mut argv: Vec<OsString> = vec![
        "tasklist".into(),
        "--tasklistrc".into(),
        "/dev/null".into(),
        "--data".into(),
        data_dir.as_os_str().to_os_string(),
    ];
    argv.extend(args.iter().map(OsString::from));
    tasklist_core::run(argv)
}

fn stored_ids(data_dir: &Path) -> Vec<u64> {
    let raw = fs::read_to_string(data_dir.join("tasks.data")).expect("read tasks.data");
    let tasks: Vec<Task> = serde_json::from_str(&raw).expect("parse tasks.data");
    tasks.iter().map(|t| t.id).collect()
}

#[test]
fn default_command_lists_and_seeds() {
    let temp = tempdir().expect("tempdir");
    run_in(temp.path(), &[]).expect("list by default");

    assert_eq!(stored_ids(temp.path()), vec![1, 2, 3]);
    assert_eq!(
        fs::read_to_string(temp.path().join("taskIdCounter.data")).expect("read counter"),
        "4"
    );
}

#[test]
fn blank_add_fails_and_writes_nothing() {
    let temp = tempdir().expect("tempdir");
    run_in(temp.path(), &["list"]).expect("seed via list");

    let tasks_before = fs::read_to_string(temp.path().join("tasks.data")).expect("read tasks");
    let counter_before =
        fs::read_to_string(temp.path().join("taskIdCounter.data")).expect("read counter");

    let err = run_in(temp.path(), &["add", "   "]).expect_err("blank add must fail");
    assert!(err.to_string().contains("Task cannot be empty!"));

    assert_eq!(
        fs::read_to_string(temp.path().join("tasks.data")).expect("read tasks"),
        tasks_before
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("taskIdCounter.data")).expect("read counter"),
        counter_before
    );
}

#[test]
fn add_then_delete_persists_ids() {
    let temp = tempdir().expect("tempdir");
    run_in(temp.path(), &["add", "Buy", "milk"]).expect("add");
    run_in(temp.path(), &["delete", "2"]).expect("delete");

    assert_eq!(stored_ids(temp.path()), vec![1, 3, 4]);
}

#[test]
fn theme_toggle_writes_theme_key() {
    let temp = tempdir().expect("tempdir");
    run_in(temp.path(), &["--rc", "theme.prefer=light", "theme", "toggle"])
        .expect("toggle theme");

    assert_eq!(
        fs::read_to_string(temp.path().join("theme.data")).expect("read theme"),
        "dark"
    );
}
