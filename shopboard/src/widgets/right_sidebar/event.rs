use shopboard_core::Viewport;

/// Intent events handled by the right sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum RightSidebarIntent {
    ViewportChanged(Viewport),
    Toggle,
    Close,
    Escape,
}

/// Right sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RightSidebarEvent {
    /// Intent event reduced by the right sidebar widget.
    Intent(RightSidebarIntent),
}
