mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{
    LeftSidebarEffect, LeftSidebarEvent, LeftSidebarIntent,
};
use iced::Task;
pub(crate) use model::LeftSidebarViewModel;
use shopboard_core::navigation::MenuSection;
use shopboard_core::{
    LayoutState, NavigationSnapshot, SidebarPresentation, Viewport,
};
use state::LeftSidebarState;

/// Left navigation sidebar owning its layout and menu state.
pub(crate) struct LeftSidebarWidget {
    state: LeftSidebarState,
}

impl LeftSidebarWidget {
    pub(crate) fn new(menu: Vec<MenuSection>, viewport: &Viewport) -> Self {
        Self {
            state: LeftSidebarState::new(menu, viewport),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: LeftSidebarIntent,
    ) -> Task<LeftSidebarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &'a self,
        navigation: &'a NavigationSnapshot,
    ) -> LeftSidebarViewModel<'a> {
        LeftSidebarViewModel {
            presentation: self.state.layout().presentation(),
            visible: self.is_open(),
            menu: self.state.menu(),
            expanded: self.state.expanded(),
            active_menu_item: &navigation.active_menu_item,
            active_sub_menu_item: &navigation.active_sub_menu_item,
            tab: self.state.tab(),
        }
    }

    fn layout_state(&self) -> LayoutState {
        self.state.layout().state()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.layout_state().sidebar_visible
    }

    fn is_drawer_mode(&self) -> bool {
        self.layout_state().is_drawer_mode
    }

    /// Whether Escape would close the sidebar.
    pub(crate) fn can_escape(&self) -> bool {
        self.is_open() && self.is_drawer_mode()
    }

    /// Whether a press outside the sidebar should close it.
    pub(crate) fn click_away_enabled(&self) -> bool {
        self.state.layout().click_away_enabled()
    }

    pub(crate) fn shows_hamburger(&self) -> bool {
        self.state.layout().shows_hamburger()
    }

    pub(crate) fn presentation(&self) -> SidebarPresentation {
        self.state.layout().presentation()
    }
}
