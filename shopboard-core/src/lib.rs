//! Window-free engines behind the shopboard dashboard.
//!
//! The crate owns every piece of dashboard behaviour that has decision logic
//! worth testing without a renderer:
//! - [`viewport`] classifies window sizes against a single [`Breakpoints`]
//!   table and debounces resize storms,
//! - [`layout`] derives left and right sidebar state from the viewport and
//!   explicit user intents (toggle, escape, click-away),
//! - [`gesture`] turns horizontal touch drags into drawer intents,
//! - [`orders`] filters, sorts, paginates, adds, selects and exports order
//!   records,
//! - [`metric`] produces the frames of the dashboard counter animation,
//! - [`navigation`] holds the injected navigation and theme snapshots,
//! - [`fixtures`] loads the static seed data.
//!
//! Front-ends own timers and rendering; every type here is driven by plain
//! method calls with time passed in explicitly.

pub mod fixtures;
pub mod gesture;
pub mod layout;
pub mod metric;
pub mod navigation;
pub mod orders;
pub mod viewport;

pub use fixtures::{FixtureError, Fixtures};
pub use gesture::{SwipeIntent, SwipeTracker};
pub use layout::{
    LayoutIntent, LayoutState, OverlayPlan, PointerTarget, RightSidebarLayout,
    RightSidebarMode, SidebarLayout, SidebarPresentation,
};
pub use metric::{
    AnimatedMetric, DriftSource, MetricAnimation, MetricFormat, change_label,
    drifted_value,
};
pub use navigation::{
    ActiveView, NavigationIntent, NavigationSnapshot, ThemeMode,
};
pub use viewport::{
    Breakpoints, ResizeDebouncer, Viewport, ViewportClass, WindowSize,
};
