use shopboard_core::ActiveView;

use super::model::HISTORY_LIMIT;

/// Panel flags, search text and recently visited views.
#[derive(Debug, Default)]
pub(super) struct NavbarState {
    favorites_open: bool,
    history_open: bool,
    search: String,
    history: Vec<ActiveView>,
}

impl NavbarState {
    pub(super) fn is_favorites_open(&self) -> bool {
        self.favorites_open
    }

    pub(super) fn is_history_open(&self) -> bool {
        self.history_open
    }

    pub(super) fn has_open_panel(&self) -> bool {
        self.favorites_open || self.history_open
    }

    pub(super) fn search(&self) -> &str {
        &self.search
    }

    pub(super) fn history(&self) -> &[ActiveView] {
        &self.history
    }

    pub(super) fn toggle_favorites(&mut self) {
        self.favorites_open = !self.favorites_open;
    }

    pub(super) fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
    }

    /// Close both panels and report whether one was open.
    pub(super) fn close_panels(&mut self) -> bool {
        let was_open = self.has_open_panel();
        self.favorites_open = false;
        self.history_open = false;
        was_open
    }

    pub(super) fn set_search(&mut self, value: String) {
        self.search = value;
    }

    /// Push a visit to the front, skipping repeats of the latest entry.
    pub(super) fn record_visit(&mut self, view: ActiveView) {
        if self.history.first() == Some(&view) {
            return;
        }
        self.history.insert(0, view);
        self.history.truncate(HISTORY_LIMIT);
    }
}
