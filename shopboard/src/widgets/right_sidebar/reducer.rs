use iced::Task;

use super::event::{RightSidebarEvent, RightSidebarIntent};
use super::state::RightSidebarState;

/// Reduce a right sidebar intent into state updates.
pub(crate) fn reduce(
    state: &mut RightSidebarState,
    event: RightSidebarIntent,
) -> Task<RightSidebarEvent> {
    let layout = state.layout_mut();
    match event {
        RightSidebarIntent::ViewportChanged(viewport) => {
            layout.recompute(&viewport);
        },
        RightSidebarIntent::Toggle => {
            layout.toggle();
            log::debug!("right sidebar open={}", layout.is_open());
        },
        RightSidebarIntent::Close => {
            layout.close();
        },
        RightSidebarIntent::Escape => {
            layout.escape();
        },
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use shopboard_core::{Breakpoints, RightSidebarMode, Viewport};

    use crate::widgets::right_sidebar::{
        Feeds, RightSidebarIntent, RightSidebarWidget,
    };

    fn viewport(width: u32) -> Viewport {
        Viewport::from_size(width, 800, &Breakpoints::default())
    }

    fn widget(width: u32) -> RightSidebarWidget {
        RightSidebarWidget::new(Feeds::default(), &viewport(width))
    }

    #[test]
    fn given_wide_viewport_when_created_then_sidebar_starts_open() {
        let widget = widget(1200);
        assert!(widget.is_open());
        assert_eq!(widget.vm().mode, RightSidebarMode::Full);
        assert_eq!(widget.vm().width, 240.0);
    }

    #[test]
    fn given_phone_viewport_when_created_then_sidebar_starts_closed() {
        let widget = widget(400);
        assert!(!widget.is_open());
        assert_eq!(widget.vm().width, 0.0);
    }

    #[test]
    fn given_hidden_mode_when_toggled_open_then_overlay_sheet_is_used() {
        let mut widget = widget(400);
        let _task = widget.reduce(RightSidebarIntent::Toggle);
        assert!(widget.vm().overlay_sheet);
    }

    #[test]
    fn given_open_sidebar_when_viewport_changes_then_open_flag_is_kept() {
        let mut widget = widget(1200);
        let _task =
            widget.reduce(RightSidebarIntent::ViewportChanged(viewport(900)));
        assert!(widget.is_open());
        assert_eq!(widget.vm().mode, RightSidebarMode::Compact);
        assert_eq!(widget.vm().width, 220.0);
    }

    #[test]
    fn given_open_sidebar_when_escape_pressed_then_it_closes() {
        let mut widget = widget(1200);
        let _task = widget.reduce(RightSidebarIntent::Escape);
        assert!(!widget.is_open());
    }
}
