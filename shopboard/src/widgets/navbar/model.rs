use shopboard_core::navigation::{DEFAULT_MENU_ITEM, DEFAULT_SUB_MENU_ITEM};
use shopboard_core::{ActiveView, NavigationIntent};

pub(crate) const NAVBAR_HEIGHT: f32 = 68.0;
pub(crate) const HISTORY_LIMIT: usize = 5;

const ORDER_LIST_SUB_MENU_ITEM: &str = "order-list";

/// Entry of the quick access (favorites) panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuickAccess {
    pub(crate) label: &'static str,
    pub(crate) view: ActiveView,
}

pub(crate) const QUICK_ACCESS: [QuickAccess; 2] = [
    QuickAccess {
        label: "Sales Dashboard",
        view: ActiveView::Dashboard,
    },
    QuickAccess {
        label: "Order List",
        view: ActiveView::Orders,
    },
];

/// Read-only view model for the navbar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavbarViewModel<'a> {
    pub(crate) breadcrumb: &'static str,
    pub(crate) show_search: bool,
    pub(crate) compact: bool,
    pub(crate) search: &'a str,
    pub(crate) is_dark: bool,
    pub(crate) favorites_open: bool,
    pub(crate) history_open: bool,
    pub(crate) right_sidebar_open: bool,
    pub(crate) history: &'a [ActiveView],
}

/// Navigation intent that opens `view` from the default menu entry.
pub(crate) fn navigate_to(view: ActiveView) -> NavigationIntent {
    let sub_menu_item = match view {
        ActiveView::Dashboard => DEFAULT_SUB_MENU_ITEM,
        ActiveView::Orders => ORDER_LIST_SUB_MENU_ITEM,
    };
    NavigationIntent::Navigate {
        view,
        menu_item: DEFAULT_MENU_ITEM.to_string(),
        sub_menu_item: sub_menu_item.to_string(),
    }
}
