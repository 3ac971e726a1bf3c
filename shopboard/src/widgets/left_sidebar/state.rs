use std::collections::BTreeSet;

use shopboard_core::navigation::{DEFAULT_MENU_ITEM, MenuEntry, MenuSection};
use shopboard_core::{SidebarLayout, Viewport};

use super::model::SidebarTab;

/// Sidebar layout, menu tree and expansion state.
#[derive(Debug)]
pub(super) struct LeftSidebarState {
    layout: SidebarLayout,
    menu: Vec<MenuSection>,
    expanded: BTreeSet<String>,
    tab: SidebarTab,
}

impl LeftSidebarState {
    pub(super) fn new(menu: Vec<MenuSection>, viewport: &Viewport) -> Self {
        Self {
            layout: SidebarLayout::new(viewport),
            menu,
            expanded: BTreeSet::from([DEFAULT_MENU_ITEM.to_string()]),
            tab: SidebarTab::default(),
        }
    }

    pub(super) fn layout(&self) -> &SidebarLayout {
        &self.layout
    }

    pub(super) fn layout_mut(&mut self) -> &mut SidebarLayout {
        &mut self.layout
    }

    pub(super) fn menu(&self) -> &[MenuSection] {
        &self.menu
    }

    pub(super) fn entry(&self, id: &str) -> Option<&MenuEntry> {
        self.menu
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|entry| entry.id == id)
    }

    pub(super) fn expanded(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub(super) fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub(super) fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    pub(super) fn tab(&self) -> SidebarTab {
        self.tab
    }

    pub(super) fn set_tab(&mut self, tab: SidebarTab) {
        self.tab = tab;
    }
}
