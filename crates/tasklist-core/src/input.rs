use tracing::{debug, warn};

use crate::repository::{RepositoryError, TaskRepository};
use crate::store::{KeyValueStore, TaskStore};
use crate::task::Theme;
use crate::theme::{ThemeController, ThemeSurface};
use crate::view::{TaskListView, project};

/// Blocking user notification for rejected input.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    Toggle(u64),
    Delete(u64),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TaskAdded { id: u64 },
    Rejected(RepositoryError),
    Toggled { id: u64, completed: Option<bool> },
    Deleted { id: u64, removed: usize },
    ThemeChanged(Theme),
}

impl Outcome {
    /// Whether the text input should be cleared and refocused.
    pub fn clears_input(&self) -> bool {
        matches!(self, Self::TaskAdded { .. })
    }
}

pub fn alert_message(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::EmptyText => "Task cannot be empty!",
        RepositoryError::IdsExhausted => "No more tasks can be added.",
    }
}

/// Everything one running frontend owns: the repository, the theme state and
/// the surface the theme is applied to. Built once at startup and dropped on
/// exit.
#[derive(Debug)]
pub struct Session<S, T> {
    repository: TaskRepository<S>,
    theme: ThemeController,
    surface: T,
}

impl<S: KeyValueStore, T: ThemeSurface> Session<S, T> {
    #[tracing::instrument(skip(backend, surface))]
    pub fn start(backend: S, prefers_dark: bool, mut surface: T) -> Self {
        let store = TaskStore::new(backend);
        let theme = ThemeController::load_theme(&store, prefers_dark, &mut surface);
        let repository = TaskRepository::open(store);

        Self {
            repository,
            theme,
            surface,
        }
    }

    #[tracing::instrument(skip(self, notifier))]
    pub fn dispatch(&mut self, action: Action, notifier: &mut impl Notifier) -> Outcome {
        let outcome = match action {
            Action::Submit(text) => match self.repository.add_task(&text) {
                Ok(task) => Outcome::TaskAdded { id: task.id },
                Err(error) => {
                    warn!(%error, "input rejected");
                    notifier.alert(alert_message(&error));
                    Outcome::Rejected(error)
                }
            },
            Action::Toggle(id) => Outcome::Toggled {
                id,
                completed: self.repository.toggle_task(id),
            },
            Action::Delete(id) => Outcome::Deleted {
                id,
                removed: self.repository.delete_task(id),
            },
            Action::ToggleTheme => Outcome::ThemeChanged(
                self.theme
                    .toggle_theme(self.repository.store_mut(), &mut self.surface),
            ),
        };

        debug!(?outcome, "action dispatched");
        outcome
    }

    pub fn view(&self) -> TaskListView {
        project(self.repository.list_tasks())
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repository
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, THEME_KEY};

    fn session() -> Session<MemoryStore, Option<Theme>> {
        Session::start(MemoryStore::new(), false, None)
    }

    #[test]
    fn submit_adds_and_asks_for_input_reset() {
        let mut session = session();
        let mut alerts: Vec<String> = Vec::new();

        let outcome = session.dispatch(Action::Submit("Buy milk".to_string()), &mut alerts);
        assert_eq!(outcome, Outcome::TaskAdded { id: 4 });
        assert!(outcome.clears_input());
        assert!(alerts.is_empty());
        assert_eq!(session.view().active_count, 3);
    }

    #[test]
    fn blank_submit_alerts_and_keeps_state() {
        let mut session = session();
        let mut alerts: Vec<String> = Vec::new();
        let before = session.view();

        let outcome = session.dispatch(Action::Submit("   ".to_string()), &mut alerts);
        assert_eq!(outcome, Outcome::Rejected(RepositoryError::EmptyText));
        assert!(!outcome.clears_input());
        assert_eq!(alerts, vec!["Task cannot be empty!".to_string()]);
        assert_eq!(session.view(), before);
    }

    #[test]
    fn toggle_and_delete_route_to_repository() {
        let mut session = session();
        let mut alerts: Vec<String> = Vec::new();

        assert_eq!(
            session.dispatch(Action::Toggle(2), &mut alerts),
            Outcome::Toggled {
                id: 2,
                completed: Some(false)
            }
        );
        assert_eq!(
            session.dispatch(Action::Delete(1), &mut alerts),
            Outcome::Deleted { id: 1, removed: 1 }
        );
        let ids: Vec<u64> = session.view().rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn theme_toggle_reaches_surface_and_store() {
        let mut session = session();
        let mut alerts: Vec<String> = Vec::new();
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.surface(), &Some(Theme::Light));

        let outcome = session.dispatch(Action::ToggleTheme, &mut alerts);
        assert_eq!(outcome, Outcome::ThemeChanged(Theme::Dark));
        assert_eq!(session.surface(), &Some(Theme::Dark));
        assert_eq!(
            session.repository().store().backend().raw(THEME_KEY),
            Some("dark")
        );
    }
}
