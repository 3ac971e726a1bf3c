use std::path::PathBuf;
use std::time::Duration;

use shopboard_core::orders::{
    FilterState, NewOrder, OrderRecord, Selection, SortConfig,
    ValidationErrors,
};

use crate::config::DashboardConfig;

/// Widths below which grid columns are dropped.
const HIDE_ADDRESS_BELOW: u32 = 440;
const HIDE_PROJECT_BELOW: u32 = 380;

/// Simulated bulk status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BulkAction {
    Approve,
    Reject,
}

impl BulkAction {
    pub(crate) fn label(self) -> &'static str {
        match self {
            BulkAction::Approve => "Approve",
            BulkAction::Reject => "Reject",
        }
    }

    /// Message shown after the backend acknowledged `count` orders.
    pub(crate) fn success_message(self, count: usize) -> String {
        format!("{} applied to {count} orders", self.label())
    }

    pub(crate) fn failure_message(self) -> String {
        format!("Failed to {} orders", self.label().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
    Info,
}

/// Transient notification shown in the corner of the order list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub(crate) message: String,
    pub(crate) kind: ToastKind,
}

/// Add-order form draft plus the errors of the last submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct OrderForm {
    pub(crate) draft: NewOrder,
    pub(crate) errors: ValidationErrors,
}

/// Timings and paths the order list runs with.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OrdersSettings {
    pub(crate) page_size: usize,
    pub(crate) search_debounce: Duration,
    pub(crate) toast_timeout: Duration,
    pub(crate) bulk_action_delay: Duration,
    pub(crate) export_dir: PathBuf,
}

impl From<&DashboardConfig> for OrdersSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            page_size: config.page_size,
            search_debounce: config.search_debounce(),
            toast_timeout: config.toast_timeout(),
            bulk_action_delay: config.bulk_action_delay(),
            export_dir: config.export_dir(),
        }
    }
}

/// Optional grid columns for the current window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnSet {
    pub(crate) project: bool,
    pub(crate) address: bool,
}

impl ColumnSet {
    pub(crate) fn for_width(width: u32) -> Self {
        Self {
            project: width >= HIDE_PROJECT_BELOW,
            address: width >= HIDE_ADDRESS_BELOW,
        }
    }
}

/// Read-only view model for the order list.
#[derive(Debug, Clone)]
pub(crate) struct OrdersViewModel<'a> {
    /// Rows of the current page.
    pub(crate) rows: Vec<&'a OrderRecord>,
    /// Size of the filtered and sorted list.
    pub(crate) total: usize,
    pub(crate) selection: &'a Selection,
    pub(crate) all_selected: bool,
    pub(crate) page: usize,
    pub(crate) page_count: usize,
    pub(crate) pages: Vec<usize>,
    pub(crate) sort: Option<SortConfig>,
    pub(crate) search: &'a str,
    pub(crate) filters: &'a FilterState,
    pub(crate) show_filters: bool,
    pub(crate) loading: bool,
    pub(crate) details: Option<&'a OrderRecord>,
    pub(crate) form: Option<&'a OrderForm>,
    pub(crate) toast: Option<&'a Toast>,
    pub(crate) columns: ColumnSet,
    pub(crate) compact: bool,
}

#[cfg(test)]
mod tests {
    use super::{BulkAction, ColumnSet};

    #[test]
    fn given_bulk_action_when_formatting_then_messages_match_wording() {
        assert_eq!(
            BulkAction::Approve.success_message(3),
            "Approve applied to 3 orders"
        );
        assert_eq!(
            BulkAction::Reject.failure_message(),
            "Failed to reject orders"
        );
    }

    #[test]
    fn given_narrow_widths_when_resolving_columns_then_columns_drop_in_order() {
        assert_eq!(
            ColumnSet::for_width(1200),
            ColumnSet {
                project: true,
                address: true
            }
        );
        assert_eq!(
            ColumnSet::for_width(400),
            ColumnSet {
                project: true,
                address: false
            }
        );
        assert_eq!(
            ColumnSet::for_width(360),
            ColumnSet {
                project: false,
                address: false
            }
        );
    }
}
