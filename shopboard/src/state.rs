use iced::Point;
use shopboard_core::{
    NavigationSnapshot, ResizeDebouncer, SwipeTracker, Viewport, WindowSize,
};

/// Window, navigation and gesture state owned by the app root.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) viewport: Viewport,
    pub(crate) resize: ResizeDebouncer,
    pub(crate) navigation: NavigationSnapshot,
    pub(crate) swipe: SwipeTracker,
    /// Last pointer position, tracked only while click-away is armed.
    pub(crate) pointer: Option<Point>,
}

impl State {
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            resize: ResizeDebouncer::default(),
            navigation: NavigationSnapshot::default(),
            swipe: SwipeTracker::new(),
            pointer: None,
        }
    }

    /// Reclassify the viewport for a settled window size.
    pub(crate) fn apply_window_size(&mut self, size: WindowSize) -> Viewport {
        let breakpoints = *self.viewport.breakpoints();
        self.viewport =
            Viewport::from_size(size.width, size.height, &breakpoints);
        self.viewport
    }
}
