use std::time::Instant;

use iced::Task;
use shopboard_core::{ActiveView, NavigationIntent};

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::dashboard::DashboardIntent;
use crate::widgets::navbar::{NavbarEvent, NavbarIntent};

/// Apply a navigation request and notify the widgets that track it.
///
/// Entering the dashboard replays its counter animation; every view change
/// is recorded in the navbar history.
pub(crate) fn navigate(
    app: &mut App,
    intent: NavigationIntent,
) -> Task<AppEvent> {
    let previous = app.state.navigation.active_view;
    if !app.state.navigation.apply(intent) {
        return Task::none();
    }

    let current = app.state.navigation.active_view;
    if current == previous {
        return Task::none();
    }
    log::info!("view changed to {}", current.title());

    let mut tasks = vec![routers::navbar::route(
        app,
        NavbarEvent::Intent(NavbarIntent::Visited(current)),
    )];
    if current == ActiveView::Dashboard {
        tasks.push(routers::dashboard::route_intent_event(
            app,
            DashboardIntent::Restart(Instant::now()),
        ));
    }
    Task::batch(tasks)
}
