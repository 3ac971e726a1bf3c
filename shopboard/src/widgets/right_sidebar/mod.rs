mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{RightSidebarEvent, RightSidebarIntent};
use iced::Task;
pub(crate) use model::{Feeds, RightSidebarViewModel};
use shopboard_core::Viewport;
use state::RightSidebarState;

/// Notifications, activities and contacts panel on the right edge.
pub(crate) struct RightSidebarWidget {
    state: RightSidebarState,
}

impl RightSidebarWidget {
    pub(crate) fn new(feeds: Feeds, viewport: &Viewport) -> Self {
        Self {
            state: RightSidebarState::new(feeds, viewport),
        }
    }

    /// Reduce an intent event into state updates.
    pub(crate) fn reduce(
        &mut self,
        event: RightSidebarIntent,
    ) -> Task<RightSidebarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> RightSidebarViewModel<'_> {
        let layout = self.state.layout();
        let feeds = self.state.feeds();
        RightSidebarViewModel {
            mode: layout.mode(),
            open: layout.is_open(),
            width: layout.docked_width(),
            overlay_sheet: layout.is_overlay_sheet(),
            notifications: &feeds.notifications,
            activities: &feeds.activities,
            contacts: &feeds.contacts,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.layout().is_open()
    }
}
