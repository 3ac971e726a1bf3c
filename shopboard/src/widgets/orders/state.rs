use shopboard_core::orders::{
    FilterState, OrderBook, OrderRecord, SortConfig, page_count, paginate,
};

use super::model::{BulkAction, OrderForm, OrdersSettings, Toast, ToastKind};

/// In-flight bulk action shown as a loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PendingBulk {
    pub(super) generation: u64,
    pub(super) action: BulkAction,
}

/// Order list state: records, view constraints, modals and timers.
#[derive(Debug)]
pub(super) struct OrdersState {
    book: OrderBook,
    settings: OrdersSettings,
    filters: FilterState,
    search_input: String,
    search_generation: u64,
    sort: Option<SortConfig>,
    page: usize,
    show_filters: bool,
    details: Option<String>,
    form: Option<OrderForm>,
    bulk: Option<PendingBulk>,
    bulk_generation: u64,
    toast: Option<Toast>,
    toast_generation: u64,
}

impl OrdersState {
    pub(super) fn new(
        records: Vec<OrderRecord>,
        settings: OrdersSettings,
    ) -> Self {
        Self {
            book: OrderBook::new(records),
            settings,
            filters: FilterState::default(),
            search_input: String::new(),
            search_generation: 0,
            sort: None,
            page: 1,
            show_filters: false,
            details: None,
            form: None,
            bulk: None,
            bulk_generation: 0,
            toast: None,
            toast_generation: 0,
        }
    }

    pub(super) fn book(&self) -> &OrderBook {
        &self.book
    }

    pub(super) fn book_mut(&mut self) -> &mut OrderBook {
        &mut self.book
    }

    pub(super) fn settings(&self) -> &OrdersSettings {
        &self.settings
    }

    pub(super) fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub(super) fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub(super) fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
    }

    /// Filtered and sorted rows across all pages.
    pub(super) fn display_rows(&self) -> Vec<&OrderRecord> {
        self.book.view(&self.filters, self.sort)
    }

    pub(super) fn page_rows(&self) -> Vec<&OrderRecord> {
        let rows = self.display_rows();
        paginate(&rows, self.page, self.settings.page_size).to_vec()
    }

    pub(super) fn page_count(&self) -> usize {
        page_count(self.display_rows().len(), self.settings.page_size)
    }

    pub(super) fn page(&self) -> usize {
        self.page
    }

    pub(super) fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub(super) fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Store typed search text and return the generation that must settle.
    pub(super) fn begin_search(&mut self, value: String) -> u64 {
        self.search_input = value;
        self.search_generation += 1;
        self.search_generation
    }

    /// Commit the typed text when `generation` is still the latest.
    pub(super) fn settle_search(&mut self, generation: u64) -> bool {
        if generation != self.search_generation {
            return false;
        }
        self.filters.search = self.search_input.clone();
        self.page = 1;
        true
    }

    pub(super) fn filters_mut(&mut self) -> &mut FilterState {
        self.page = 1;
        &mut self.filters
    }

    /// Reset every filter and drop any pending search.
    pub(super) fn clear_filters(&mut self) {
        self.filters.clear();
        self.search_input.clear();
        self.search_generation += 1;
        self.page = 1;
    }

    pub(super) fn show_filters(&self) -> bool {
        self.show_filters
    }

    pub(super) fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub(super) fn details(&self) -> Option<&OrderRecord> {
        self.details.as_deref().and_then(|id| self.book.get(id))
    }

    pub(super) fn set_details(&mut self, id: Option<String>) {
        self.details = id;
    }

    pub(super) fn form(&self) -> Option<&OrderForm> {
        self.form.as_ref()
    }

    pub(super) fn form_mut(&mut self) -> Option<&mut OrderForm> {
        self.form.as_mut()
    }

    pub(super) fn set_form(&mut self, form: Option<OrderForm>) {
        self.form = form;
    }

    pub(super) fn bulk(&self) -> Option<PendingBulk> {
        self.bulk
    }

    pub(super) fn begin_bulk(&mut self, action: BulkAction) -> u64 {
        self.bulk_generation += 1;
        self.bulk = Some(PendingBulk {
            generation: self.bulk_generation,
            action,
        });
        self.bulk_generation
    }

    /// Finish the pending bulk action if `generation` matches it.
    pub(super) fn finish_bulk(&mut self, generation: u64) -> bool {
        match self.bulk {
            Some(pending) if pending.generation == generation => {
                self.bulk = None;
                true
            },
            _ => false,
        }
    }

    pub(super) fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Replace the toast and return the generation its timer must match.
    pub(super) fn show_toast(
        &mut self,
        message: String,
        kind: ToastKind,
    ) -> u64 {
        self.toast = Some(Toast { message, kind });
        self.toast_generation += 1;
        self.toast_generation
    }

    pub(super) fn expire_toast(&mut self, generation: u64) -> bool {
        if generation != self.toast_generation {
            return false;
        }
        self.toast = None;
        true
    }

    pub(super) fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}
