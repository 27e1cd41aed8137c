use thiserror::Error;
use tracing::{debug, info, warn};

use crate::store::{KeyValueStore, TaskStore};
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("no task ids left to assign")]
    IdsExhausted,
}

/// Ordered in-memory task collection plus the id counter.
///
/// Every mutation is written through to the [`TaskStore`] before returning.
/// Ids come from a counter that only grows, so a deleted id is never handed
/// out again.
#[derive(Debug)]
pub struct TaskRepository<S> {
    store: TaskStore<S>,
    tasks: Vec<Task>,
    next_id: u64,
}

impl<S: KeyValueStore> TaskRepository<S> {
    #[tracing::instrument(skip(store))]
    pub fn open(mut store: TaskStore<S>) -> Self {
        let snapshot = store.load();
        info!(
            count = snapshot.tasks.len(),
            next_id = snapshot.next_id,
            "opened task repository"
        );
        Self {
            store,
            tasks: snapshot.tasks,
            next_id: snapshot.next_id,
        }
    }

    #[tracing::instrument(skip(self, text))]
    pub fn add_task(&mut self, text: &str) -> Result<&Task, RepositoryError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("rejected empty task text");
            return Err(RepositoryError::EmptyText);
        }

        let id = self.next_id;
        let Some(next_id) = id.checked_add(1) else {
            warn!(id, "task id counter exhausted");
            return Err(RepositoryError::IdsExhausted);
        };
        self.next_id = next_id;
        self.tasks.push(Task::new_active(id, text.to_string()));
        self.persist();

        debug!(id, count = self.tasks.len(), "task added");
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flips the first task with `id` and returns its new state.
    #[tracing::instrument(skip(self))]
    pub fn toggle_task(&mut self, id: u64) -> Option<bool> {
        let toggled = self.tasks.iter_mut().find(|task| task.id == id).map(|task| {
            task.completed = !task.completed;
            task.completed
        });
        self.persist();

        debug!(?toggled, "toggle handled");
        toggled
    }

    /// Drops every task with `id`; returns how many were removed.
    #[tracing::instrument(skip(self))]
    pub fn delete_task(&mut self, id: u64) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.persist();

        let removed = before - self.tasks.len();
        debug!(removed, "delete handled");
        removed
    }

    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_count(&self) -> usize {
        active_count(&self.tasks)
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore<S> {
        &mut self.store
    }

    fn persist(&mut self) {
        self.store.save(&self.tasks, self.next_id);
    }
}

pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{COUNTER_KEY, MemoryStore, TASKS_KEY};

    fn seeded() -> TaskRepository<MemoryStore> {
        TaskRepository::open(TaskStore::new(MemoryStore::new()))
    }

    fn empty() -> TaskRepository<MemoryStore> {
        TaskRepository::open(TaskStore::new(MemoryStore::with_items([
            (TASKS_KEY, "[]"),
            (COUNTER_KEY, "1"),
        ])))
    }

    #[test]
    fn add_appends_active_task_and_advances_counter() {
        let mut repo = seeded();
        let task = repo.add_task("  Buy milk ").expect("add").clone();

        assert_eq!(task, Task::new_active(4, "Buy milk".to_string()));
        assert_eq!(repo.list_tasks().len(), 4);
        assert_eq!(repo.list_tasks().last(), Some(&task));
        assert_eq!(repo.next_id(), 5);
        assert_eq!(repo.store().backend().raw(COUNTER_KEY), Some("5"));
    }

    #[test]
    fn add_grows_by_exactly_one_for_varied_text() {
        let mut repo = empty();
        for (n, text) in ["a", "x y", "日本語", "<b>bold</b>", "\ttabbed\t"].iter().enumerate() {
            let before = repo.list_tasks().len();
            let task = repo.add_task(text).expect("add").clone();
            assert_eq!(repo.list_tasks().len(), before + 1);
            assert!(!task.completed);
            assert_eq!(task.id, n as u64 + 1);
        }
    }

    #[test]
    fn blank_text_is_rejected_without_state_change() {
        let mut repo = seeded();
        let before = repo.list_tasks().to_vec();

        for text in ["", "   ", "\n\t "] {
            assert_eq!(repo.add_task(text), Err(RepositoryError::EmptyText));
        }
        assert_eq!(repo.list_tasks(), before.as_slice());
        assert_eq!(repo.next_id(), 4);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut repo = seeded();
        for task in repo.list_tasks().to_vec() {
            assert_eq!(repo.toggle_task(task.id), Some(!task.completed));
            assert_eq!(repo.toggle_task(task.id), Some(task.completed));
        }
        assert_eq!(repo.list_tasks(), crate::task::seed_tasks().as_slice());
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut repo = seeded();
        let before = repo.list_tasks().to_vec();

        assert_eq!(repo.toggle_task(99), None);
        assert_eq!(repo.delete_task(99), 0);
        assert_eq!(repo.list_tasks(), before.as_slice());
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut repo = empty();
        let first = repo.add_task("one").expect("add").id;
        assert_eq!(repo.delete_task(first), 1);

        let second = repo.add_task("two").expect("add").id;
        assert_ne!(first, second);
        assert_eq!(second, 2);
    }

    #[test]
    fn mutations_survive_reopen() {
        let mut repo = seeded();
        repo.add_task("Buy milk").expect("add");
        repo.toggle_task(1);
        repo.delete_task(3);

        let backend = repo.store().backend().clone();
        let reopened = TaskRepository::open(TaskStore::new(backend));
        assert_eq!(reopened.list_tasks(), repo.list_tasks());
        assert_eq!(reopened.next_id(), 5);
    }

    #[test]
    fn exhausted_counter_refuses_new_ids() {
        let mut repo = TaskRepository::open(TaskStore::new(MemoryStore::with_items([
            (TASKS_KEY, "[]"),
            (COUNTER_KEY, "18446744073709551615"),
        ])));

        assert_eq!(repo.add_task("x"), Err(RepositoryError::IdsExhausted));
        assert!(repo.list_tasks().is_empty());
        assert_eq!(repo.next_id(), u64::MAX);
    }

    #[test]
    fn active_count_skips_completed() {
        let tasks = [false, true, false]
            .into_iter()
            .enumerate()
            .map(|(i, completed)| Task {
                id: i as u64 + 1,
                text: format!("t{i}"),
                completed,
            })
            .collect::<Vec<_>>();
        assert_eq!(active_count(&tasks), 2);
    }
}
