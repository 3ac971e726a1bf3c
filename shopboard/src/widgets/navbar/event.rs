use shopboard_core::{ActiveView, NavigationIntent};

/// Intent events handled by the navbar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum NavbarIntent {
    MenuPressed,
    FavoritesPressed,
    HistoryPressed,
    ThemePressed,
    NotificationsPressed,
    SecondaryMenuPressed,
    SearchChanged(String),
    /// A quick access or history entry was picked from a panel.
    PanelEntrySelected(ActiveView),
    ClosePanels,
    /// The active view changed; recorded in the history panel.
    Visited(ActiveView),
}

/// Effect events produced by the navbar reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavbarEffect {
    ToggleLeftSidebar,
    ToggleRightSidebar,
    ToggleTheme,
    Navigate(NavigationIntent),
}

/// Navbar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavbarEvent {
    /// Intent event reduced by the navbar widget.
    Intent(NavbarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavbarEffect),
}
