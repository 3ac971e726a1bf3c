use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::dashboard::{DashboardEvent, DashboardIntent};

/// Route a dashboard event through widget reduction.
pub(crate) fn route(app: &mut App, event: DashboardEvent) -> Task<AppEvent> {
    match event {
        DashboardEvent::Intent(event) => route_intent_event(app, event),
    }
}

pub(crate) fn route_intent_event(
    app: &mut App,
    event: DashboardIntent,
) -> Task<AppEvent> {
    app.widgets.dashboard.reduce(event).map(AppEvent::Dashboard)
}
