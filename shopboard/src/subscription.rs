use iced::event::{self, Event};
use iced::{Subscription, mouse, window};
use shopboard_core::ActiveView;
use shopboard_core::metric::frame_interval;

use super::RESIZE_TICK;
use crate::app::{App, AppEvent};
use crate::widgets::dashboard::{
    DashboardEvent, DashboardIntent, LIVE_UPDATE_INTERVAL,
};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);
    let touch_subs = event::listen_with(|event, _status, _id| match event {
        Event::Touch(event) => Some(AppEvent::Touch(event)),
        _ => None,
    });

    let mut subs = vec![win_subs, key_subs, touch_subs];

    // Pointer tracking for click-away while the drawer is open
    if app.widgets.left_sidebar.click_away_enabled() {
        subs.push(event::listen_with(|event, _status, _id| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(AppEvent::PointerMoved(position))
            },
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(AppEvent::PointerPressed)
            },
            _ => None,
        }));
    }

    // Resize debounce tick
    if app.state.resize.is_pending() {
        subs.push(iced::time::every(RESIZE_TICK).map(AppEvent::ResizeTick));
    }

    if app.state.navigation.active_view == ActiveView::Dashboard {
        // Live metric refresh
        subs.push(iced::time::every(LIVE_UPDATE_INTERVAL).map(|now| {
            AppEvent::Dashboard(DashboardEvent::Intent(
                DashboardIntent::LiveUpdate(now),
            ))
        }));

        // Counter animation frames
        if app.widgets.dashboard.is_animating() {
            subs.push(iced::time::every(frame_interval()).map(|now| {
                AppEvent::Dashboard(DashboardEvent::Intent(
                    DashboardIntent::Tick(now),
                ))
            }));
        }
    }

    Subscription::batch(subs)
}
