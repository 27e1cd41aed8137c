use tasklist_core::datastore::FileStore;
use tasklist_core::input::{Action, Outcome, Session};
use tasklist_core::repository::TaskRepository;
use tasklist_core::store::{KeyValueStore, TaskStore};
use tasklist_core::task::{Task, Theme};
use tempfile::tempdir;

#[test]
fn file_store_seeds_then_round_trips() {
    let temp = tempdir().expect("tempdir");
    let mut store = TaskStore::new(FileStore::open(temp.path()).expect("open datastore"));

    let seeded = store.load();
    assert_eq!(seeded.tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(
        seeded.tasks.iter().map(|t| t.completed).collect::<Vec<_>>(),
        vec![false, true, false]
    );
    assert_eq!(seeded.next_id, 4);
    assert!(temp.path().join("tasks.data").exists());

    let tasks = vec![
        Task::new_active(10, "Renew passport".to_string()),
        Task {
            id: 11,
            text: "Fix bike".to_string(),
            completed: true,
        },
    ];
    store.save(&tasks, 12);

    let mut reopened = TaskStore::new(FileStore::open(temp.path()).expect("reopen"));
    let loaded = reopened.load();
    assert_eq!(loaded.tasks, tasks);
    assert_eq!(loaded.next_id, 12);
}

#[test]
fn add_then_delete_seeded_completed_task() {
    let temp = tempdir().expect("tempdir");
    let store = FileStore::open(temp.path()).expect("open datastore");
    let mut repo = TaskRepository::open(TaskStore::new(store));

    repo.add_task("Buy milk").expect("add task");
    assert_eq!(repo.delete_task(2), 1);

    assert_eq!(repo.active_count(), 3);
    assert_eq!(
        repo.list_tasks().iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![1, 3, 4]
    );
}

#[test]
fn session_survives_restart_with_theme() {
    let temp = tempdir().expect("tempdir");
    let mut alerts: Vec<String> = Vec::new();

    {
        let store = FileStore::open(temp.path()).expect("open datastore");
        let mut session = Session::start(store, false, None::<Theme>);
        assert_eq!(
            session.dispatch(Action::Submit("Stretch".to_string()), &mut alerts),
            Outcome::TaskAdded { id: 4 }
        );
        session.dispatch(Action::Toggle(4), &mut alerts);
        session.dispatch(Action::ToggleTheme, &mut alerts);
    }

    let store = FileStore::open(temp.path()).expect("reopen datastore");
    assert_eq!(store.get_item("theme").expect("read theme").as_deref(), Some("dark"));

    let session = Session::start(store, false, None::<Theme>);
    assert_eq!(session.theme(), Theme::Dark);
    let view = session.view();
    assert_eq!(view.rows().len(), 4);
    assert!(view.rows()[3].completed);
    assert_eq!(view.active_count, 2);
    assert!(alerts.is_empty());
}
