use tracing::{debug, info};

use crate::store::{KeyValueStore, TaskStore};
use crate::task::Theme;

/// Where an applied theme becomes visible.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

impl ThemeSurface for Option<Theme> {
    fn apply(&mut self, theme: Theme) {
        *self = Some(theme);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    /// Applies the stored theme, or the environment preference when none is
    /// stored. The preference fallback is not written back.
    #[tracing::instrument(skip(store, surface))]
    pub fn load_theme<S: KeyValueStore>(
        store: &TaskStore<S>,
        prefers_dark: bool,
        surface: &mut impl ThemeSurface,
    ) -> Self {
        let current = match store.load_theme() {
            Some(saved) => {
                debug!(theme = %saved, "using stored theme");
                saved
            }
            None => {
                let derived = Theme::from_preference(prefers_dark);
                debug!(theme = %derived, "no stored theme; using environment preference");
                derived
            }
        };

        surface.apply(current);
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    #[tracing::instrument(skip(self, store, surface))]
    pub fn toggle_theme<S: KeyValueStore>(
        &mut self,
        store: &mut TaskStore<S>,
        surface: &mut impl ThemeSurface,
    ) -> Theme {
        self.current = self.current.next();
        surface.apply(self.current);
        store.save_theme(self.current);

        info!(theme = %self.current, "theme toggled");
        self.current
    }
}
