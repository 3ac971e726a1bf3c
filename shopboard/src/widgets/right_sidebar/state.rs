use shopboard_core::{RightSidebarLayout, Viewport};

use super::model::Feeds;

#[derive(Debug)]
pub(super) struct RightSidebarState {
    layout: RightSidebarLayout,
    feeds: Feeds,
}

impl RightSidebarState {
    pub(super) fn new(feeds: Feeds, viewport: &Viewport) -> Self {
        Self {
            layout: RightSidebarLayout::new(viewport),
            feeds,
        }
    }

    pub(super) fn layout(&self) -> &RightSidebarLayout {
        &self.layout
    }

    pub(super) fn layout_mut(&mut self) -> &mut RightSidebarLayout {
        &mut self.layout
    }

    pub(super) fn feeds(&self) -> &Feeds {
        &self.feeds
    }
}
