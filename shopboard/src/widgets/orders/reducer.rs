use std::time::Duration;

use chrono::NaiveDate;
use iced::Task;
use shopboard_core::orders::{OrderField, csv, next_sort};

use super::event::{OrdersEffect, OrdersEvent, OrdersIntent};
use super::model::{BulkAction, OrderForm, ToastKind};
use super::services::apply_bulk_action;
use super::state::OrdersState;
use super::storage::write_export;

const QUICK_ACTIONS_MESSAGE: &str = "Edit functionality coming soon!";
const EXPORT_SUCCESS_MESSAGE: &str = "Orders exported successfully";
const EXPORT_FAILURE_MESSAGE: &str = "Failed to export orders";

/// Runtime context for order list reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrdersCtx {
    /// Local date stamped on new orders and export file names.
    pub(crate) today: NaiveDate,
}

/// Reduce an orders intent into state updates and timer/job tasks.
pub(crate) fn reduce(
    state: &mut OrdersState,
    event: OrdersIntent,
    ctx: &OrdersCtx,
) -> Task<OrdersEvent> {
    match event {
        OrdersIntent::SearchChanged(value) => {
            let generation = state.begin_search(value);
            let delay = state.settings().search_debounce;
            after(delay, move || OrdersEffect::SearchSettled { generation })
        },
        OrdersIntent::SearchSettled { generation } => {
            if !state.settle_search(generation) {
                log::debug!("search generation {generation} superseded");
            }
            Task::none()
        },
        OrdersIntent::ToggleFilters => {
            state.toggle_filters();
            Task::none()
        },
        OrdersIntent::ToggleStatusFilter(status) => {
            state.filters_mut().toggle_status(status);
            Task::none()
        },
        OrdersIntent::ClearFilters => {
            state.clear_filters();
            Task::none()
        },
        OrdersIntent::SortBy(key) => {
            state.set_sort(next_sort(state.sort(), key));
            state.set_page(1);
            log::debug!("orders sort {:?}", state.sort());
            Task::none()
        },
        OrdersIntent::ToggleRow(id) => {
            state.book_mut().selection_mut().toggle(&id);
            Task::none()
        },
        OrdersIntent::ToggleAllVisible => {
            toggle_all_visible(state);
            Task::none()
        },
        OrdersIntent::PageSelected(page) => {
            if (1..=state.page_count()).contains(&page) {
                state.set_page(page);
            }
            Task::none()
        },
        OrdersIntent::PreviousPage => {
            if state.page() > 1 {
                state.set_page(state.page() - 1);
            }
            Task::none()
        },
        OrdersIntent::NextPage => {
            if state.page() < state.page_count() {
                state.set_page(state.page() + 1);
            }
            Task::none()
        },
        OrdersIntent::OpenDetails(id) => {
            state.set_details(Some(id));
            Task::none()
        },
        OrdersIntent::CloseDetails => {
            state.set_details(None);
            Task::none()
        },
        OrdersIntent::QuickActions => {
            toast(state, QUICK_ACTIONS_MESSAGE.to_string(), ToastKind::Info)
        },
        OrdersIntent::OpenForm => {
            state.set_form(Some(OrderForm::default()));
            Task::none()
        },
        OrdersIntent::CancelForm => {
            state.set_form(None);
            Task::none()
        },
        OrdersIntent::FormFieldChanged(field, value) => {
            if let Some(form) = state.form_mut() {
                let target = match field {
                    OrderField::Name => &mut form.draft.name,
                    OrderField::Project => &mut form.draft.project,
                    OrderField::Address => &mut form.draft.address,
                    OrderField::Amount => &mut form.draft.amount,
                };
                *target = value;
            }
            Task::none()
        },
        OrdersIntent::FormPriorityChanged(priority) => {
            if let Some(form) = state.form_mut() {
                form.draft.priority = priority;
            }
            Task::none()
        },
        OrdersIntent::SubmitForm => submit_form(state, ctx),
        OrdersIntent::BulkAction(action) => start_bulk_action(state, action),
        OrdersIntent::BulkActionFinished {
            generation,
            action,
            result,
        } => {
            if !state.finish_bulk(generation) {
                log::debug!("bulk generation {generation} superseded");
                return Task::none();
            }
            match result {
                Ok(count) => {
                    state.book_mut().selection_mut().clear();
                    toast(
                        state,
                        action.success_message(count),
                        ToastKind::Success,
                    )
                },
                Err(err) => {
                    log::warn!("{} failed: {err}", action.label());
                    toast(state, action.failure_message(), ToastKind::Error)
                },
            }
        },
        OrdersIntent::Export => export(state, ctx),
        OrdersIntent::ExportCompleted(path) => {
            log::info!("orders exported to {}", path.display());
            toast(state, EXPORT_SUCCESS_MESSAGE.to_string(), ToastKind::Success)
        },
        OrdersIntent::ExportFailed(message) => {
            log::warn!("orders export failed: {message}");
            toast(state, EXPORT_FAILURE_MESSAGE.to_string(), ToastKind::Error)
        },
        OrdersIntent::ToastExpired { generation } => {
            state.expire_toast(generation);
            Task::none()
        },
        OrdersIntent::DismissToast => {
            state.dismiss_toast();
            Task::none()
        },
        OrdersIntent::Escape => {
            if state.details().is_some() {
                state.set_details(None);
            } else if state.form().is_some() {
                state.set_form(None);
            }
            Task::none()
        },
    }
}

fn toggle_all_visible(state: &mut OrdersState) {
    let rows = state.display_rows();
    let covered = state.book().selection().covers(&rows);
    let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();

    let selection = state.book_mut().selection_mut();
    selection.clear();
    if !covered {
        for id in &ids {
            selection.toggle(id);
        }
    }
}

fn submit_form(state: &mut OrdersState, ctx: &OrdersCtx) -> Task<OrdersEvent> {
    let Some(draft) = state.form().map(|form| form.draft.clone()) else {
        return Task::none();
    };

    match state.book_mut().add(&draft, ctx.today) {
        Ok(record) => {
            let message = format!("Order {} added", record.id);
            state.set_form(None);
            toast(state, message, ToastKind::Success)
        },
        Err(errors) => {
            log::debug!("add order rejected: {errors}");
            if let Some(form) = state.form_mut() {
                form.errors = errors;
            }
            Task::none()
        },
    }
}

fn start_bulk_action(
    state: &mut OrdersState,
    action: BulkAction,
) -> Task<OrdersEvent> {
    if state.bulk().is_some() || state.book().selection().is_empty() {
        return Task::none();
    }

    let ids: Vec<String> = state
        .book()
        .records()
        .iter()
        .filter(|record| state.book().selection().contains(&record.id))
        .map(|record| record.id.clone())
        .collect();
    let generation = state.begin_bulk(action);
    let delay = state.settings().bulk_action_delay;
    log::debug!("{} started for {} orders", action.label(), ids.len());

    Task::perform(apply_bulk_action(action, ids, delay), move |result| {
        OrdersEvent::Effect(OrdersEffect::BulkActionFinished {
            generation,
            action,
            result,
        })
    })
}

fn export(state: &OrdersState, ctx: &OrdersCtx) -> Task<OrdersEvent> {
    let rows = state.book().export_rows(state.filters(), state.sort());
    let contents = csv::export(rows.iter().copied());
    let file_name = csv::file_name(ctx.today);
    let dir = state.settings().export_dir.clone();
    log::debug!("exporting {} orders to {}", rows.len(), dir.display());

    Task::perform(
        async move {
            match write_export(&dir, &file_name, &contents) {
                Ok(path) => Ok(path),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(path) => {
                OrdersEvent::Effect(OrdersEffect::ExportCompleted(path))
            },
            Err(message) => {
                OrdersEvent::Effect(OrdersEffect::ExportFailed(message))
            },
        },
    )
}

fn toast(
    state: &mut OrdersState,
    message: String,
    kind: ToastKind,
) -> Task<OrdersEvent> {
    let generation = state.show_toast(message, kind);
    let timeout = state.settings().toast_timeout;
    after(timeout, move || OrdersEffect::ToastExpired { generation })
}

fn after(
    delay: Duration,
    effect: impl FnOnce() -> OrdersEffect + Send + 'static,
) -> Task<OrdersEvent> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| OrdersEvent::Effect(effect()),
    )
}
