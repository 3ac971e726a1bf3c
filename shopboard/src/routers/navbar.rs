use iced::Task;

use crate::app::{App, AppEvent, AppFlowEvent};
use crate::widgets::navbar::{NavbarEffect, NavbarEvent, NavbarIntent};

/// Route a navbar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavbarEvent) -> Task<AppEvent> {
    match event {
        NavbarEvent::Intent(event) => route_intent_event(app, event),
        NavbarEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent_event(app: &mut App, event: NavbarIntent) -> Task<AppEvent> {
    app.widgets.navbar.reduce(event).map(AppEvent::Navbar)
}

fn route_effect_event(event: NavbarEffect) -> Task<AppEvent> {
    use NavbarEffect as E;

    let flow = match event {
        E::ToggleLeftSidebar => AppFlowEvent::ToggleLeftSidebar,
        E::ToggleRightSidebar => AppFlowEvent::ToggleRightSidebar,
        E::ToggleTheme => AppFlowEvent::ToggleTheme,
        E::Navigate(intent) => AppFlowEvent::Navigate(intent),
    };
    Task::done(AppEvent::Flow(flow))
}
