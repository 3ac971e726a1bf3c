use iced::Task;

use super::event::{NavbarEffect, NavbarEvent, NavbarIntent};
use super::model::navigate_to;
use super::state::NavbarState;

/// Reduce a navbar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut NavbarState,
    event: NavbarIntent,
) -> Task<NavbarEvent> {
    match event {
        NavbarIntent::MenuPressed => effect(NavbarEffect::ToggleLeftSidebar),
        NavbarIntent::FavoritesPressed => {
            state.toggle_favorites();
            Task::none()
        },
        NavbarIntent::HistoryPressed => {
            state.toggle_history();
            Task::none()
        },
        NavbarIntent::ThemePressed => effect(NavbarEffect::ToggleTheme),
        NavbarIntent::NotificationsPressed
        | NavbarIntent::SecondaryMenuPressed => {
            effect(NavbarEffect::ToggleRightSidebar)
        },
        NavbarIntent::SearchChanged(value) => {
            state.set_search(value);
            Task::none()
        },
        NavbarIntent::PanelEntrySelected(view) => {
            state.close_panels();
            effect(NavbarEffect::Navigate(navigate_to(view)))
        },
        NavbarIntent::ClosePanels => {
            state.close_panels();
            Task::none()
        },
        NavbarIntent::Visited(view) => {
            state.record_visit(view);
            Task::none()
        },
    }
}

fn effect(effect: NavbarEffect) -> Task<NavbarEvent> {
    Task::done(NavbarEvent::Effect(effect))
}
