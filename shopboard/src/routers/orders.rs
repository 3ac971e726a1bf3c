use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::orders::{
    OrdersCtx, OrdersEffect, OrdersEvent, OrdersIntent,
};

/// Route an orders event through widget reduction or back into the widget
/// once an async job completes.
pub(crate) fn route(app: &mut App, event: OrdersEvent) -> Task<AppEvent> {
    match event {
        OrdersEvent::Intent(event) => route_intent_event(app, event),
        OrdersEvent::Effect(effect) => route_effect_event(effect),
    }
}

/// Reduce an intent directly (used by the escape flow).
pub(crate) fn route_intent_event(
    app: &mut App,
    event: OrdersIntent,
) -> Task<AppEvent> {
    let ctx = OrdersCtx {
        today: chrono::Local::now().date_naive(),
    };
    app.widgets.orders.reduce(event, &ctx).map(AppEvent::Orders)
}

fn route_effect_event(event: OrdersEffect) -> Task<AppEvent> {
    use {OrdersEffect as E, OrdersIntent as I};

    let intent = match event {
        E::SearchSettled { generation } => I::SearchSettled { generation },
        E::BulkActionFinished {
            generation,
            action,
            result,
        } => I::BulkActionFinished {
            generation,
            action,
            result,
        },
        E::ExportCompleted(path) => I::ExportCompleted(path),
        E::ExportFailed(message) => I::ExportFailed(message),
        E::ToastExpired { generation } => I::ToastExpired { generation },
    };
    Task::done(AppEvent::Orders(OrdersEvent::Intent(intent)))
}
