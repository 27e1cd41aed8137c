use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, anyhow};
use tracing::{debug, info, warn};

use crate::task::{SEED_NEXT_ID, Task, Theme, seed_tasks};

pub const TASKS_KEY: &str = "tasks";
pub const COUNTER_KEY: &str = "taskIdCounter";
pub const THEME_KEY: &str = "theme";

/// String-valued persistence backend, in the shape of browser `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub next_id: u64,
}

impl Snapshot {
    pub fn seed() -> Self {
        Self {
            tasks: seed_tasks(),
            next_id: SEED_NEXT_ID,
        }
    }
}

/// Maps the task list, id counter and theme onto their fixed keys.
///
/// Writes are best-effort: a failing backend is logged and otherwise
/// ignored, matching what a full or disabled `localStorage` does.
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    backend: S,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    #[tracing::instrument(skip(self, tasks))]
    pub fn save(&mut self, tasks: &[Task], next_id: u64) {
        debug!(count = tasks.len(), next_id, "saving tasks");

        let encoded = match serde_json::to_string(tasks) {
            Ok(encoded) => encoded,
            Err(error) => {
                warn!(%error, "failed encoding tasks; skipping save");
                return;
            }
        };

        self.write(TASKS_KEY, &encoded);
        self.write(COUNTER_KEY, &next_id.to_string());
    }

    #[tracing::instrument(skip(self))]
    pub fn load(&mut self) -> Snapshot {
        let raw_tasks = self.read(TASKS_KEY);
        let raw_counter = self.read(COUNTER_KEY);

        let Some(raw_tasks) = raw_tasks.filter(|raw| !raw.trim().is_empty()) else {
            info!("no stored tasks; seeding defaults");
            return self.persist_seed();
        };

        let tasks = match decode_tasks(&raw_tasks) {
            Ok(tasks) => tasks,
            Err(error) => {
                warn!(error = %format!("{error:#}"), "stored tasks are malformed; seeding defaults");
                return self.persist_seed();
            }
        };

        let next_id = raw_counter
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or_else(|| {
                debug!(raw = ?raw_counter, "counter missing or malformed; resetting to 1");
                1
            });
        let next_id = next_id.max(min_next_id(&tasks));

        debug!(count = tasks.len(), next_id, "loaded tasks");
        Snapshot { tasks, next_id }
    }

    #[tracing::instrument(skip(self))]
    pub fn load_theme(&self) -> Option<Theme> {
        let raw = self.read(THEME_KEY)?;
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(error) => {
                warn!(%error, "ignoring stored theme");
                None
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn save_theme(&mut self, theme: Theme) {
        self.write(THEME_KEY, theme.storage_value());
    }

    fn persist_seed(&mut self) -> Snapshot {
        let seed = Snapshot::seed();
        self.save(&seed.tasks, seed.next_id);
        seed
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, error = %format!("{error:#}"), "storage read failed; treating as absent");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(error) = self.backend.set_item(key, value) {
            warn!(key, error = %format!("{error:#}"), "storage write failed");
        }
    }
}

fn decode_tasks(raw: &str) -> anyhow::Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(raw).context("tasks are not a task array")?;

    if tasks.iter().any(|task| task.id == u64::MAX) {
        return Err(anyhow!("task id {} leaves no room for the counter", u64::MAX));
    }

    let mut seen = BTreeSet::new();
    if let Some(dup) = tasks.iter().find(|task| !seen.insert(task.id)) {
        return Err(anyhow!("duplicate task id {}", dup.id));
    }

    Ok(tasks)
}

fn min_next_id(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(1, |max| max.checked_add(1).unwrap_or(u64::MAX))
}
