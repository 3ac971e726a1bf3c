use iced::{Point, Task, touch};

use crate::app::{App, AppEvent};
use crate::routers::left_sidebar;
use crate::widgets::left_sidebar::LeftSidebarIntent;
use crate::widgets::navbar::model::NAVBAR_HEIGHT;

/// Track a touch drag and turn completed swipes into drawer intents.
pub(crate) fn handle_touch(
    app: &mut App,
    event: touch::Event,
) -> Task<AppEvent> {
    match event {
        touch::Event::FingerPressed { position, .. } => {
            app.state.swipe.start(position.x);
            press_at(app, position)
        },
        touch::Event::FingerMoved { position, .. } => {
            app.state.swipe.move_to(position.x);
            Task::none()
        },
        touch::Event::FingerLifted { position, .. } => {
            app.state.swipe.move_to(position.x);
            let drawer_open = app.widgets.left_sidebar.is_open();
            match app.state.swipe.end(&app.state.viewport, drawer_open) {
                Some(intent) => left_sidebar::route_intent_event(
                    app,
                    LeftSidebarIntent::Swipe(intent),
                ),
                None => Task::none(),
            }
        },
        touch::Event::FingerLost { .. } => {
            app.state.swipe.cancel();
            Task::none()
        },
    }
}

/// Remember the pointer position while click-away is armed.
pub(crate) fn handle_pointer_moved(
    app: &mut App,
    position: Point,
) -> Task<AppEvent> {
    app.state.pointer = Some(position);
    Task::none()
}

pub(crate) fn handle_pointer_pressed(app: &mut App) -> Task<AppEvent> {
    match app.state.pointer {
        Some(position) => press_at(app, position),
        None => Task::none(),
    }
}

/// The drawer is laid out below the navbar.
fn press_at(app: &mut App, position: Point) -> Task<AppEvent> {
    if !app.widgets.left_sidebar.click_away_enabled() {
        return Task::none();
    }
    left_sidebar::route_intent_event(
        app,
        LeftSidebarIntent::PointerDown {
            position,
            top: NAVBAR_HEIGHT,
        },
    )
}
