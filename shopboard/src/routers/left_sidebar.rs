use iced::Task;

use crate::app::{App, AppEvent, AppFlowEvent};
use crate::widgets::left_sidebar::{
    LeftSidebarEffect, LeftSidebarEvent, LeftSidebarIntent,
};

/// Route a left sidebar event through widget reduction or app
/// orchestration.
pub(crate) fn route(app: &mut App, event: LeftSidebarEvent) -> Task<AppEvent> {
    match event {
        LeftSidebarEvent::Intent(event) => route_intent_event(app, event),
        LeftSidebarEvent::Effect(effect) => route_effect_event(effect),
    }
}

/// Reduce an intent directly (used by flow and window routers).
pub(crate) fn route_intent_event(
    app: &mut App,
    event: LeftSidebarIntent,
) -> Task<AppEvent> {
    app.widgets
        .left_sidebar
        .reduce(event)
        .map(AppEvent::LeftSidebar)
}

fn route_effect_event(event: LeftSidebarEffect) -> Task<AppEvent> {
    match event {
        LeftSidebarEffect::Navigate(intent) => {
            Task::done(AppEvent::Flow(AppFlowEvent::Navigate(intent)))
        },
    }
}
