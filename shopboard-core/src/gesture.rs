use crate::viewport::Viewport;

/// Minimum horizontal travel for a drag to count as a swipe.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;
/// Opening swipes must start within this distance of the left edge.
pub const EDGE_ORIGIN_THRESHOLD: f32 = 50.0;

/// Drawer intent produced by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    OpenDrawer,
    CloseDrawer,
}

/// Tracks one horizontal touch drag for the left drawer.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn move_to(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the gesture and resolve it against the drawer state.
    ///
    /// Returns `None` for non-mobile viewports, incomplete gestures and
    /// swipes that would not change the drawer.
    pub fn end(
        &mut self,
        viewport: &Viewport,
        drawer_open: bool,
    ) -> Option<SwipeIntent> {
        let start = self.start_x.take();
        let end = self.end_x.take();

        if !viewport.is_mobile {
            return None;
        }
        let (start, end) = (start?, end?);

        let distance = start - end;
        if distance > MIN_SWIPE_DISTANCE && drawer_open {
            Some(SwipeIntent::CloseDrawer)
        } else if distance < -MIN_SWIPE_DISTANCE
            && start < EDGE_ORIGIN_THRESHOLD
            && !drawer_open
        {
            Some(SwipeIntent::OpenDrawer)
        } else {
            None
        }
    }
}
