pub(crate) mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod services;
mod state;
mod storage;
pub(crate) mod view;

pub(crate) use event::{OrdersEffect, OrdersEvent, OrdersIntent};
use iced::Task;
pub(crate) use model::{OrdersSettings, OrdersViewModel};
pub(crate) use reducer::OrdersCtx;
use shopboard_core::Viewport;
use shopboard_core::orders::{OrderRecord, VISIBLE_PAGE_WINDOW, visible_pages};
use state::OrdersState;

use self::model::ColumnSet;

/// Order list widget: grid, filters, modals, bulk actions and export.
pub(crate) struct OrdersWidget {
    state: OrdersState,
}

impl OrdersWidget {
    pub(crate) fn new(
        records: Vec<OrderRecord>,
        settings: OrdersSettings,
    ) -> Self {
        Self {
            state: OrdersState::new(records, settings),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: OrdersIntent,
        ctx: &OrdersCtx,
    ) -> Task<OrdersEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self, viewport: &Viewport) -> OrdersViewModel<'_> {
        let display = self.state.display_rows();
        let selection = self.state.book().selection();
        let page = self.state.page();
        let page_count = self.state.page_count();

        OrdersViewModel {
            rows: self.state.page_rows(),
            total: display.len(),
            selection,
            all_selected: selection.covers(&display),
            page,
            page_count,
            pages: visible_pages(page, page_count, VISIBLE_PAGE_WINDOW),
            sort: self.state.sort(),
            search: self.state.search_input(),
            filters: self.state.filters(),
            show_filters: self.state.show_filters(),
            loading: self.state.bulk().is_some(),
            details: self.state.details(),
            form: self.state.form(),
            toast: self.state.toast(),
            columns: ColumnSet::for_width(viewport.width),
            compact: viewport.is_compact(),
        }
    }

    /// Whether a details or add-order modal covers the list.
    pub(crate) fn has_modal(&self) -> bool {
        self.state.details().is_some() || self.state.form().is_some()
    }
}
