use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::right_sidebar::{RightSidebarEvent, RightSidebarIntent};

/// Route a right sidebar event through widget reduction.
pub(crate) fn route(
    app: &mut App,
    event: RightSidebarEvent,
) -> Task<AppEvent> {
    match event {
        RightSidebarEvent::Intent(event) => route_intent_event(app, event),
    }
}

/// Reduce an intent directly (used by flow and window routers).
pub(crate) fn route_intent_event(
    app: &mut App,
    event: RightSidebarIntent,
) -> Task<AppEvent> {
    app.widgets
        .right_sidebar
        .reduce(event)
        .map(AppEvent::RightSidebar)
}
