use std::collections::BTreeSet;

use shopboard_core::SidebarPresentation;
use shopboard_core::navigation::MenuSection;

/// Shortcut lists shown above the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SidebarTab {
    #[default]
    Favorites,
    Recently,
}

impl SidebarTab {
    pub(crate) const ALL: [SidebarTab; 2] =
        [SidebarTab::Favorites, SidebarTab::Recently];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SidebarTab::Favorites => "Favorites",
            SidebarTab::Recently => "Recently",
        }
    }

    /// Shortcut entries listed under the tab.
    pub(crate) fn entries(self) -> &'static [&'static str] {
        match self {
            SidebarTab::Favorites => &["Overview", "Projects"],
            SidebarTab::Recently => &["eCommerce", "Order List"],
        }
    }
}

/// Read-only view model for the left sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftSidebarViewModel<'a> {
    pub(crate) presentation: SidebarPresentation,
    pub(crate) visible: bool,
    pub(crate) menu: &'a [MenuSection],
    pub(crate) expanded: &'a BTreeSet<String>,
    pub(crate) active_menu_item: &'a str,
    pub(crate) active_sub_menu_item: &'a str,
    pub(crate) tab: SidebarTab,
}
