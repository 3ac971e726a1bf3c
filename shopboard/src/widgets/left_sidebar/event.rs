use iced::Point;
use shopboard_core::{NavigationIntent, SwipeIntent, Viewport};

use super::model::SidebarTab;

/// Intent events handled by the left sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum LeftSidebarIntent {
    /// The debounced viewport changed; layout defaults are re-derived.
    ViewportChanged(Viewport),
    Toggle,
    Open,
    Escape,
    /// Pointer pressed at a window position; the drawer starts `top`
    /// pixels below the window's top edge.
    PointerDown {
        position: Point,
        top: f32,
    },
    Swipe(SwipeIntent),
    ItemPressed(String),
    SubItemPressed {
        parent: String,
        id: String,
    },
    TabSelected(SidebarTab),
    BackdropPressed,
}

/// Effect events produced by the left sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum LeftSidebarEffect {
    Navigate(NavigationIntent),
}

/// Left sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum LeftSidebarEvent {
    /// Intent event reduced by the left sidebar widget.
    Intent(LeftSidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(LeftSidebarEffect),
}
