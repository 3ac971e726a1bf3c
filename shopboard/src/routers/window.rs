use std::time::Instant;

use iced::{Size, Task};
use shopboard_core::WindowSize;

use crate::app::{App, AppEvent};
use crate::routers::{left_sidebar, right_sidebar};
use crate::widgets::left_sidebar::LeftSidebarIntent;
use crate::widgets::right_sidebar::RightSidebarIntent;

/// Apply the first window size without waiting for the quiet period.
pub(crate) fn handle_opened(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.resize.cancel();
    apply_window_size(app, WindowSize::from_logical(size.width, size.height))
}

/// Queue a resize; the viewport settles on a later tick.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.resize.push(
        WindowSize::from_logical(size.width, size.height),
        Instant::now(),
    );
    Task::none()
}

/// Release the pending size once the window stopped resizing.
pub(crate) fn handle_resize_tick(
    app: &mut App,
    now: Instant,
) -> Task<AppEvent> {
    match app.state.resize.poll(now) {
        Some(size) => apply_window_size(app, size),
        None => Task::none(),
    }
}

fn apply_window_size(app: &mut App, size: WindowSize) -> Task<AppEvent> {
    let viewport = app.state.apply_window_size(size);
    log::debug!(
        "viewport {}x{} classified as {:?}",
        viewport.width,
        viewport.height,
        viewport.class()
    );

    Task::batch([
        left_sidebar::route_intent_event(
            app,
            LeftSidebarIntent::ViewportChanged(viewport),
        ),
        right_sidebar::route_intent_event(
            app,
            RightSidebarIntent::ViewportChanged(viewport),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::Size;
    use shopboard_core::ViewportClass;

    use super::{handle_resize, handle_resize_tick};
    use crate::app::App;

    #[test]
    fn given_resize_storm_when_quiet_period_passes_then_last_size_applies() {
        let mut app = App::for_tests();
        let _task = handle_resize(&mut app, Size::new(900.0, 700.0));
        let _task = handle_resize(&mut app, Size::new(400.0, 700.0));

        let _task = handle_resize_tick(&mut app, Instant::now());
        assert_eq!(app.state.viewport.class(), ViewportClass::Desktop);

        let later = Instant::now() + Duration::from_millis(500);
        let _task = handle_resize_tick(&mut app, later);

        assert!(!app.state.resize.is_pending());
        assert_eq!(app.state.viewport.width, 400);
        assert!(!app.widgets.left_sidebar.is_open());
        assert!(app.widgets.left_sidebar.shows_hamburger());
    }
}
