use iced::keyboard::{self, key};
use iced::{Task, window};

use super::{App, AppEvent, AppFlowEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Navbar widget
        AppEvent::Navbar(event) => routers::navbar::route(app, event),
        // Left sidebar widget
        AppEvent::LeftSidebar(event) => {
            routers::left_sidebar::route(app, event)
        },
        // Right sidebar widget
        AppEvent::RightSidebar(event) => {
            routers::right_sidebar::route(app, event)
        },
        // Dashboard widget
        AppEvent::Dashboard(event) => routers::dashboard::route(app, event),
        // Orders widget
        AppEvent::Orders(event) => routers::orders::route(app, event),
        // Cross-widget flows
        AppEvent::Flow(flow) => routers::flow::route(app, flow),
        // Direct operations
        AppEvent::ResizeTick(now) => {
            routers::window::handle_resize_tick(app, now)
        },
        AppEvent::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => routers::flow::route(app, AppFlowEvent::Escape),
        AppEvent::Keyboard(_) => Task::none(),
        AppEvent::Window(window::Event::Opened { size, .. }) => {
            routers::window::handle_opened(app, size)
        },
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
        AppEvent::Touch(event) => routers::gesture::handle_touch(app, event),
        AppEvent::PointerMoved(position) => {
            routers::gesture::handle_pointer_moved(app, position)
        },
        AppEvent::PointerPressed => {
            routers::gesture::handle_pointer_pressed(app)
        },
    }
}
