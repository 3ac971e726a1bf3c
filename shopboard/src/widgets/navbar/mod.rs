mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{NavbarEffect, NavbarEvent, NavbarIntent};
use iced::Task;
pub(crate) use model::NavbarViewModel;
use shopboard_core::{NavigationSnapshot, ThemeMode, Viewport};
use state::NavbarState;

/// Read-only context for building the navbar view model.
pub(crate) struct NavbarCtx<'a> {
    pub(crate) viewport: &'a Viewport,
    pub(crate) navigation: &'a NavigationSnapshot,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) right_sidebar_open: bool,
}

/// Top bar widget owning its panel and search state.
pub(crate) struct NavbarWidget {
    state: NavbarState,
}

impl NavbarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: NavbarState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: NavbarIntent) -> Task<NavbarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &'a self,
        ctx: &NavbarCtx<'_>,
    ) -> NavbarViewModel<'a> {
        NavbarViewModel {
            breadcrumb: ctx.navigation.active_view.title(),
            show_search: ctx.viewport.is_wide(),
            compact: ctx.viewport.is_compact(),
            search: self.state.search(),
            is_dark: ctx.theme_mode == ThemeMode::Dark,
            favorites_open: self.state.is_favorites_open(),
            history_open: self.state.is_history_open(),
            right_sidebar_open: ctx.right_sidebar_open,
            history: self.state.history(),
        }
    }

    pub(crate) fn has_open_panel(&self) -> bool {
        self.state.has_open_panel()
    }
}
