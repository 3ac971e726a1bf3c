use iced::Task;
use shopboard_core::ActiveView;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::left_sidebar::LeftSidebarIntent;
use crate::widgets::navbar::{NavbarEvent, NavbarIntent};
use crate::widgets::orders::OrdersIntent;
use crate::widgets::right_sidebar::RightSidebarIntent;

pub(crate) fn toggle_theme(app: &mut App) -> Task<AppEvent> {
    let mode = app.theme_manager.mode().toggle();
    app.theme_manager.set_mode(mode);
    log::info!("theme set to {mode:?}");
    Task::none()
}

pub(crate) fn toggle_left_sidebar(app: &mut App) -> Task<AppEvent> {
    routers::left_sidebar::route_intent_event(app, LeftSidebarIntent::Toggle)
}

pub(crate) fn toggle_right_sidebar(app: &mut App) -> Task<AppEvent> {
    routers::right_sidebar::route_intent_event(
        app,
        RightSidebarIntent::Toggle,
    )
}

/// Close the topmost dismissable layer.
///
/// Order modals win over navbar panels, which win over the left drawer;
/// the right sidebar only sees Escape when nothing else consumed it.
pub(crate) fn escape(app: &mut App) -> Task<AppEvent> {
    let orders_visible =
        app.state.navigation.active_view == ActiveView::Orders;

    if orders_visible && app.widgets.orders.has_modal() {
        routers::orders::route_intent_event(app, OrdersIntent::Escape)
    } else if app.widgets.navbar.has_open_panel() {
        routers::navbar::route(
            app,
            NavbarEvent::Intent(NavbarIntent::ClosePanels),
        )
    } else if app.widgets.left_sidebar.can_escape() {
        routers::left_sidebar::route_intent_event(
            app,
            LeftSidebarIntent::Escape,
        )
    } else {
        routers::right_sidebar::route_intent_event(
            app,
            RightSidebarIntent::Escape,
        )
    }
}
