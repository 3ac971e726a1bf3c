//! Navigation and theme context shared across the shell.
//!
//! Widgets receive a read-only [`NavigationSnapshot`] and request changes
//! through [`NavigationIntent`] values that the application root applies.

use serde::{Deserialize, Serialize};

use crate::orders::OrderStatus;

pub const DEFAULT_MENU_ITEM: &str = "default";
pub const DEFAULT_SUB_MENU_ITEM: &str = "e-commerce";

/// Top-level content view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Dashboard,
    Orders,
}

impl ActiveView {
    /// Breadcrumb title for the view.
    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "eCommerce",
            ActiveView::Orders => "Orders",
        }
    }
}

/// Current navigation selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub active_view: ActiveView,
    pub active_menu_item: String,
    pub active_sub_menu_item: String,
}

impl Default for NavigationSnapshot {
    fn default() -> Self {
        Self {
            active_view: ActiveView::Dashboard,
            active_menu_item: DEFAULT_MENU_ITEM.to_string(),
            active_sub_menu_item: DEFAULT_SUB_MENU_ITEM.to_string(),
        }
    }
}

/// Requested navigation change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Navigate {
        view: ActiveView,
        menu_item: String,
        sub_menu_item: String,
    },
    SelectMenuItem(String),
    SelectSubMenuItem(String),
}

impl NavigationSnapshot {
    /// Apply an intent and report whether anything changed.
    pub fn apply(&mut self, intent: NavigationIntent) -> bool {
        let before = self.clone();
        match intent {
            NavigationIntent::Navigate {
                view,
                menu_item,
                sub_menu_item,
            } => {
                self.active_view = view;
                self.active_menu_item = menu_item;
                self.active_sub_menu_item = sub_menu_item;
            },
            NavigationIntent::SelectMenuItem(id) => self.active_menu_item = id,
            NavigationIntent::SelectSubMenuItem(id) => {
                self.active_sub_menu_item = id;
            },
        }

        let changed = before != *self;
        if changed {
            log::debug!(
                "navigation: view={:?} item={} sub={}",
                self.active_view,
                self.active_menu_item,
                self.active_sub_menu_item
            );
        }
        changed
    }
}

/// Sidebar menu section loaded from fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuSection {
    pub label: String,
    pub items: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sub_items: Vec<SubMenuEntry>,
}

impl MenuEntry {
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubMenuEntry {
    pub id: String,
    pub label: String,
    /// View switched to when the entry is clicked, if any.
    #[serde(default)]
    pub view: Option<ActiveView>,
}

impl SubMenuEntry {
    /// Intent produced by clicking this entry under `parent`.
    pub fn intent(&self, parent: &str) -> NavigationIntent {
        match self.view {
            Some(view) => NavigationIntent::Navigate {
                view,
                menu_item: parent.to_string(),
                sub_menu_item: self.id.clone(),
            },
            None => NavigationIntent::SelectSubMenuItem(self.id.clone()),
        }
    }
}

/// Light or dark appearance flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Badge color for a status as `#RRGGBB` or `#RRGGBBAA`.
pub fn status_color(status: OrderStatus, theme: ThemeMode) -> &'static str {
    match status {
        OrderStatus::InProgress => "#8A8CD9",
        OrderStatus::Complete => "#4AA785",
        OrderStatus::Pending => "#59A8D4",
        OrderStatus::Approved => "#FFC555",
        OrderStatus::Rejected => match theme {
            ThemeMode::Light => "#1C1C1C66",
            ThemeMode::Dark => "#FFFFFF66",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ActiveView, NavigationIntent, NavigationSnapshot, SubMenuEntry,
        ThemeMode, status_color,
    };
    use crate::orders::OrderStatus;

    #[test]
    fn given_default_snapshot_when_created_then_dashboard_ecommerce_is_active() {
        let snapshot = NavigationSnapshot::default();
        assert_eq!(snapshot.active_view, ActiveView::Dashboard);
        assert_eq!(snapshot.active_menu_item, "default");
        assert_eq!(snapshot.active_sub_menu_item, "e-commerce");
    }

    #[test]
    fn given_order_list_entry_when_clicked_then_view_switches_to_orders() {
        let entry = SubMenuEntry {
            id: "order-list".into(),
            label: "order list".into(),
            view: Some(ActiveView::Orders),
        };
        let mut snapshot = NavigationSnapshot::default();

        assert!(snapshot.apply(entry.intent("default")));
        assert_eq!(snapshot.active_view, ActiveView::Orders);
        assert_eq!(snapshot.active_sub_menu_item, "order-list");
    }

    #[test]
    fn given_entry_without_view_when_clicked_then_only_sub_item_changes() {
        let entry = SubMenuEntry {
            id: "overview".into(),
            label: "Overview".into(),
            view: None,
        };
        let mut snapshot = NavigationSnapshot::default();

        assert!(snapshot.apply(entry.intent("user-profile")));
        assert_eq!(snapshot.active_view, ActiveView::Dashboard);
        assert_eq!(snapshot.active_menu_item, "default");
        assert_eq!(snapshot.active_sub_menu_item, "overview");
    }

    #[test]
    fn given_same_selection_when_applied_then_no_change_is_reported() {
        let mut snapshot = NavigationSnapshot::default();
        assert!(!snapshot.apply(NavigationIntent::SelectMenuItem(
            "default".into()
        )));
    }

    #[test]
    fn given_rejected_status_when_theme_changes_then_color_follows_theme() {
        assert_eq!(
            status_color(OrderStatus::Rejected, ThemeMode::Light),
            "#1C1C1C66"
        );
        assert_eq!(
            status_color(OrderStatus::Rejected, ThemeMode::Dark),
            "#FFFFFF66"
        );
        assert_eq!(
            status_color(OrderStatus::Complete, ThemeMode::Dark),
            "#4AA785"
        );
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    }
}
