use shopboard_core::RightSidebarMode;
use shopboard_core::fixtures::FeedItem;

/// Width of the overlay sheet shown on narrow viewports.
pub(crate) const OVERLAY_SHEET_WIDTH: f32 = 280.0;

/// Read-only view model for the right sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RightSidebarViewModel<'a> {
    pub(crate) mode: RightSidebarMode,
    pub(crate) open: bool,
    pub(crate) width: f32,
    pub(crate) overlay_sheet: bool,
    pub(crate) notifications: &'a [FeedItem],
    pub(crate) activities: &'a [FeedItem],
    pub(crate) contacts: &'a [FeedItem],
}

impl RightSidebarViewModel<'_> {
    pub(crate) fn is_compact(&self) -> bool {
        self.mode == RightSidebarMode::Compact
    }
}

/// Feed lists shown by the right sidebar.
#[derive(Debug, Clone, Default)]
pub(crate) struct Feeds {
    pub(crate) notifications: Vec<FeedItem>,
    pub(crate) activities: Vec<FeedItem>,
    pub(crate) contacts: Vec<FeedItem>,
}
