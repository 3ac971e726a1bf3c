use std::path::PathBuf;

use shopboard_core::orders::{OrderField, OrderStatus, Priority, SortKey};

use super::errors::BulkActionError;
use super::model::BulkAction;

/// Intent events handled by the orders presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum OrdersIntent {
    SearchChanged(String),
    SearchSettled { generation: u64 },
    ToggleFilters,
    ToggleStatusFilter(OrderStatus),
    ClearFilters,
    SortBy(SortKey),
    ToggleRow(String),
    ToggleAllVisible,
    PageSelected(usize),
    PreviousPage,
    NextPage,
    OpenDetails(String),
    CloseDetails,
    QuickActions,
    OpenForm,
    CancelForm,
    FormFieldChanged(OrderField, String),
    FormPriorityChanged(Priority),
    SubmitForm,
    BulkAction(BulkAction),
    BulkActionFinished {
        generation: u64,
        action: BulkAction,
        result: Result<usize, BulkActionError>,
    },
    Export,
    ExportCompleted(PathBuf),
    ExportFailed(String),
    ToastExpired { generation: u64 },
    DismissToast,
    /// Close the topmost modal layer, if any.
    Escape,
}

/// Effect events produced by the orders reducer's timers and jobs.
#[derive(Debug, Clone)]
pub(crate) enum OrdersEffect {
    SearchSettled {
        generation: u64,
    },
    BulkActionFinished {
        generation: u64,
        action: BulkAction,
        result: Result<usize, BulkActionError>,
    },
    ExportCompleted(PathBuf),
    ExportFailed(String),
    ToastExpired {
        generation: u64,
    },
}

/// Orders event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum OrdersEvent {
    /// Intent event reduced by the orders widget.
    Intent(OrdersIntent),
    /// Completion routed back into the widget by app-level routing.
    Effect(OrdersEffect),
}
