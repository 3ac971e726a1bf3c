//! Sidebar layout reducers.
//!
//! The left sidebar follows a four-class table (very small, mobile, tablet,
//! desktop). The right sidebar keeps its own three-mode table keyed on the
//! compact and tablet cutoffs. Both tables read the same [`Breakpoints`].
//!
//! [`Breakpoints`]: crate::viewport::Breakpoints

use crate::viewport::{Viewport, ViewportClass};

/// Width of the left sidebar when expanded or shown as a drawer.
pub const LEFT_SIDEBAR_WIDTH: f32 = 280.0;
/// Width of the left sidebar in icon-only mode.
pub const LEFT_SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

pub const RIGHT_SIDEBAR_FULL_WIDTH: f32 = 240.0;
pub const RIGHT_SIDEBAR_TABLET_WIDTH: f32 = 220.0;
pub const RIGHT_SIDEBAR_SMALL_TABLET_WIDTH: f32 = 200.0;

/// Left sidebar flags derived from the viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_visible: bool,
    pub sidebar_collapsed: bool,
    pub is_drawer_mode: bool,
    pub order_list_full_width: bool,
}

impl LayoutState {
    /// Default state for a viewport class.
    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::VerySmall => Self {
                sidebar_visible: false,
                sidebar_collapsed: false,
                is_drawer_mode: true,
                order_list_full_width: true,
            },
            ViewportClass::Mobile => Self {
                sidebar_visible: true,
                sidebar_collapsed: false,
                is_drawer_mode: true,
                order_list_full_width: false,
            },
            ViewportClass::Tablet => Self {
                sidebar_visible: true,
                sidebar_collapsed: true,
                is_drawer_mode: false,
                order_list_full_width: false,
            },
            ViewportClass::Desktop => Self {
                sidebar_visible: true,
                sidebar_collapsed: false,
                is_drawer_mode: false,
                order_list_full_width: false,
            },
        }
    }
}

/// Explicit user actions on the left sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutIntent {
    Toggle,
    Open,
    Close,
    Escape,
    /// Pointer or touch press; `inside` tells whether it hit the sidebar.
    PointerDown { inside: bool },
}

/// Resolved geometry of the left sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarPresentation {
    pub width: f32,
    pub icon_only: bool,
    /// Docked sidebars take layout space; drawers float over content.
    pub docked: bool,
}

/// Left sidebar reducer.
///
/// Viewport recomputes reset every flag to the class default. Intents only
/// ever touch visibility, so manual toggles last until the next recompute.
#[derive(Debug, Clone)]
pub struct SidebarLayout {
    state: LayoutState,
    peek_expanded: bool,
}

impl SidebarLayout {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            state: LayoutState::for_class(viewport.class()),
            peek_expanded: false,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn recompute(&mut self, viewport: &Viewport) {
        let next = LayoutState::for_class(viewport.class());
        if next != self.state {
            log::debug!(
                "left sidebar recomputed for {:?}: {:?}",
                viewport.class(),
                next
            );
        }
        self.state = next;
        self.peek_expanded = false;
    }

    /// Apply an intent and report whether visibility changed.
    pub fn apply(&mut self, intent: LayoutIntent) -> bool {
        let before = self.state.sidebar_visible;
        match intent {
            LayoutIntent::Toggle => {
                self.state.sidebar_visible = !self.state.sidebar_visible;
            },
            LayoutIntent::Open => self.state.sidebar_visible = true,
            LayoutIntent::Close => self.state.sidebar_visible = false,
            LayoutIntent::Escape => {
                if self.state.sidebar_visible && self.state.is_drawer_mode {
                    self.state.sidebar_visible = false;
                }
            },
            LayoutIntent::PointerDown { inside } => {
                if self.click_away_enabled() && !inside {
                    self.state.sidebar_visible = false;
                }
            },
        }

        let changed = before != self.state.sidebar_visible;
        if changed {
            log::debug!(
                "left sidebar {:?}: visible={}",
                intent,
                self.state.sidebar_visible
            );
        }
        changed
    }

    pub fn click_away_enabled(&self) -> bool {
        self.state.is_drawer_mode && self.state.sidebar_visible
    }

    pub fn shows_drawer_overlay(&self) -> bool {
        self.click_away_enabled()
    }

    /// The floating menu button replaces a hidden very-small sidebar.
    pub fn shows_hamburger(&self) -> bool {
        self.state.order_list_full_width && !self.state.sidebar_visible
    }

    /// Expand an icon-only sidebar until the next recompute.
    pub fn toggle_peek(&mut self) -> bool {
        if !self.state.sidebar_collapsed {
            return false;
        }
        self.peek_expanded = !self.peek_expanded;
        true
    }

    pub fn is_peek_expanded(&self) -> bool {
        self.peek_expanded
    }

    pub fn presentation(&self) -> SidebarPresentation {
        let docked = !self.state.is_drawer_mode;
        if !self.state.sidebar_visible {
            return SidebarPresentation {
                width: 0.0,
                icon_only: false,
                docked,
            };
        }

        let icon_only = self.state.sidebar_collapsed && !self.peek_expanded;
        let width = if icon_only {
            LEFT_SIDEBAR_COLLAPSED_WIDTH
        } else {
            LEFT_SIDEBAR_WIDTH
        };

        SidebarPresentation {
            width,
            icon_only,
            docked,
        }
    }

    /// Hit-test a window position against a drawer whose top edge sits
    /// `top` pixels below the window's top.
    pub fn pointer_target(&self, x: f32, y: f32, top: f32) -> PointerTarget {
        if y < top {
            PointerTarget::Header
        } else if x >= 0.0 && x < self.presentation().width {
            PointerTarget::Drawer
        } else {
            PointerTarget::Outside
        }
    }
}

/// Where a pointer press landed relative to the left drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Drawer,
    /// The band above the drawer, owned by the top bar's own controls.
    Header,
    Outside,
}

/// Right sidebar width modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightSidebarMode {
    /// Below the compact cutoff; shown only as an overlay sheet.
    Hidden,
    Compact,
    Full,
}

/// Right sidebar reducer.
///
/// The open flag is seeded once from the initial width and afterwards
/// changes only through explicit intents; recomputes adjust the mode alone.
#[derive(Debug, Clone)]
pub struct RightSidebarLayout {
    mode: RightSidebarMode,
    width: f32,
    open: bool,
}

impl RightSidebarLayout {
    pub fn new(viewport: &Viewport) -> Self {
        let (mode, width) = Self::resolve(viewport);
        Self {
            mode,
            width,
            open: viewport.width > viewport.breakpoints().compact_max,
        }
    }

    fn resolve(viewport: &Viewport) -> (RightSidebarMode, f32) {
        let bp = viewport.breakpoints();
        if viewport.width < bp.compact_max {
            (RightSidebarMode::Hidden, 0.0)
        } else if viewport.width < bp.mobile_max {
            (RightSidebarMode::Compact, RIGHT_SIDEBAR_SMALL_TABLET_WIDTH)
        } else if viewport.width < bp.tablet_max {
            (RightSidebarMode::Compact, RIGHT_SIDEBAR_TABLET_WIDTH)
        } else {
            (RightSidebarMode::Full, RIGHT_SIDEBAR_FULL_WIDTH)
        }
    }

    pub fn recompute(&mut self, viewport: &Viewport) {
        let (mode, width) = Self::resolve(viewport);
        if mode != self.mode {
            log::debug!("right sidebar mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.width = width;
    }

    pub fn mode(&self) -> RightSidebarMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Escape closes an open sidebar; closed sidebars ignore it.
    pub fn escape(&mut self) -> bool {
        self.close()
    }

    /// Width taken from the content row.
    pub fn docked_width(&self) -> f32 {
        if self.open { self.width } else { 0.0 }
    }

    /// Whether the sidebar renders as a floating sheet over the content.
    pub fn is_overlay_sheet(&self) -> bool {
        self.open && self.mode == RightSidebarMode::Hidden
    }
}

/// Backdrops the shell draws over the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayPlan {
    pub drawer_backdrop: bool,
    pub right_backdrop: bool,
    pub very_small_left: bool,
    pub very_small_right: bool,
}

impl OverlayPlan {
    /// Backdrops appear in `(very_small_max, overlay_max]`; at or below
    /// `very_small_max` each open sidebar gets a close overlay instead.
    pub fn derive(
        viewport: &Viewport,
        left_open: bool,
        right_open: bool,
    ) -> Self {
        let bp = viewport.breakpoints();
        let in_backdrop_range = viewport.width > bp.very_small_max
            && viewport.width <= bp.overlay_max;
        let very_small = viewport.width <= bp.very_small_max;

        Self {
            drawer_backdrop: in_backdrop_range && left_open,
            right_backdrop: in_backdrop_range && right_open,
            very_small_left: very_small && left_open,
            very_small_right: very_small && right_open,
        }
    }

    pub fn any(&self) -> bool {
        self.drawer_backdrop
            || self.right_backdrop
            || self.very_small_left
            || self.very_small_right
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LEFT_SIDEBAR_COLLAPSED_WIDTH, LEFT_SIDEBAR_WIDTH, LayoutIntent,
        LayoutState, OverlayPlan, PointerTarget, RightSidebarLayout,
        RightSidebarMode, SidebarLayout,
    };
    use crate::viewport::{Breakpoints, Viewport, ViewportClass};

    fn viewport(width: u32) -> Viewport {
        Viewport::from_size(width, 800, &Breakpoints::default())
    }

    #[test]
    fn given_each_class_when_building_layout_then_defaults_match_table() {
        assert_eq!(
            SidebarLayout::new(&viewport(300)).state(),
            LayoutState::for_class(ViewportClass::VerySmall)
        );
        let mobile = SidebarLayout::new(&viewport(600)).state();
        assert!(mobile.sidebar_visible && mobile.is_drawer_mode);
        let tablet = SidebarLayout::new(&viewport(900)).state();
        assert!(tablet.sidebar_visible && tablet.sidebar_collapsed);
        assert!(!tablet.is_drawer_mode);
        let desktop = SidebarLayout::new(&viewport(1600)).state();
        assert!(desktop.sidebar_visible && !desktop.sidebar_collapsed);
    }

    #[test]
    fn given_toggle_when_applied_then_only_visibility_changes() {
        let mut layout = SidebarLayout::new(&viewport(900));
        assert!(layout.apply(LayoutIntent::Toggle));
        let state = layout.state();
        assert!(!state.sidebar_visible);
        assert!(state.sidebar_collapsed);
        assert!(!state.is_drawer_mode);
        assert!(!state.order_list_full_width);
    }

    #[test]
    fn given_manual_open_when_viewport_recomputes_then_visibility_resets_to_default()
     {
        let mut layout = SidebarLayout::new(&viewport(300));
        layout.apply(LayoutIntent::Open);
        assert!(layout.state().sidebar_visible);

        layout.recompute(&viewport(320));
        assert!(!layout.state().sidebar_visible);
    }

    #[test]
    fn given_open_drawer_when_escape_pressed_twice_then_second_press_is_noop() {
        let mut layout = SidebarLayout::new(&viewport(600));
        assert!(layout.apply(LayoutIntent::Escape));
        assert!(!layout.state().sidebar_visible);
        assert!(!layout.apply(LayoutIntent::Escape));
        assert!(!layout.state().sidebar_visible);
    }

    #[test]
    fn given_docked_sidebar_when_escape_pressed_then_it_stays_visible() {
        let mut layout = SidebarLayout::new(&viewport(1600));
        assert!(!layout.apply(LayoutIntent::Escape));
        assert!(layout.state().sidebar_visible);
    }

    #[test]
    fn given_open_drawer_when_pointer_lands_outside_then_drawer_closes() {
        let mut layout = SidebarLayout::new(&viewport(600));
        assert!(!layout.apply(LayoutIntent::PointerDown { inside: true }));
        assert!(layout.apply(LayoutIntent::PointerDown { inside: false }));
        assert!(!layout.state().sidebar_visible);
    }

    #[test]
    fn given_docked_sidebar_when_pointer_lands_outside_then_click_away_is_disabled()
     {
        let mut layout = SidebarLayout::new(&viewport(1600));
        assert!(!layout.click_away_enabled());
        assert!(!layout.apply(LayoutIntent::PointerDown { inside: false }));
    }

    #[test]
    fn given_tablet_when_peeking_then_icon_only_width_expands_until_recompute() {
        let mut layout = SidebarLayout::new(&viewport(900));
        assert_eq!(layout.presentation().width, LEFT_SIDEBAR_COLLAPSED_WIDTH);
        assert!(layout.presentation().icon_only);

        assert!(layout.toggle_peek());
        assert_eq!(layout.presentation().width, LEFT_SIDEBAR_WIDTH);

        layout.recompute(&viewport(901));
        assert!(layout.presentation().icon_only);
    }

    #[test]
    fn given_very_small_width_when_sidebar_hidden_then_hamburger_is_shown() {
        let mut layout = SidebarLayout::new(&viewport(300));
        assert!(layout.shows_hamburger());
        layout.apply(LayoutIntent::Open);
        assert!(!layout.shows_hamburger());
        assert!(!SidebarLayout::new(&viewport(600)).shows_hamburger());
    }

    #[test]
    fn given_desktop_when_peeking_then_request_is_ignored() {
        let mut layout = SidebarLayout::new(&viewport(1600));
        assert!(!layout.toggle_peek());
    }

    #[test]
    fn given_drawer_when_hit_testing_then_bounds_follow_drawer_width() {
        let layout = SidebarLayout::new(&viewport(600));
        let target = |x| layout.pointer_target(x, 200.0, 68.0);
        assert_eq!(target(10.0), PointerTarget::Drawer);
        assert_eq!(target(LEFT_SIDEBAR_WIDTH), PointerTarget::Outside);
    }

    #[test]
    fn given_press_above_drawer_top_when_hit_testing_then_header_owns_it() {
        let layout = SidebarLayout::new(&viewport(600));
        assert_eq!(
            layout.pointer_target(10.0, 20.0, 68.0),
            PointerTarget::Header
        );
        assert_eq!(
            layout.pointer_target(400.0, 67.9, 68.0),
            PointerTarget::Header
        );
        assert_eq!(
            layout.pointer_target(10.0, 68.0, 68.0),
            PointerTarget::Drawer
        );
    }

    #[test]
    fn given_widths_when_building_right_sidebar_then_modes_follow_table() {
        let cases = [
            (300, RightSidebarMode::Hidden, 0.0),
            (479, RightSidebarMode::Hidden, 0.0),
            (480, RightSidebarMode::Compact, 200.0),
            (800, RightSidebarMode::Compact, 220.0),
            (1024, RightSidebarMode::Full, 240.0),
        ];
        for (width, mode, docked) in cases {
            let mut right = RightSidebarLayout::new(&viewport(width));
            assert_eq!(right.mode(), mode, "width {width}");
            if !right.is_open() {
                right.toggle();
            }
            assert_eq!(right.docked_width(), docked, "width {width}");
        }
    }

    #[test]
    fn given_initial_width_when_building_right_sidebar_then_open_above_480_only()
    {
        assert!(!RightSidebarLayout::new(&viewport(480)).is_open());
        assert!(RightSidebarLayout::new(&viewport(481)).is_open());
    }

    #[test]
    fn given_closed_right_sidebar_when_resized_then_it_stays_closed() {
        let mut right = RightSidebarLayout::new(&viewport(1600));
        right.toggle();
        right.recompute(&viewport(900));
        assert!(!right.is_open());
        assert_eq!(right.mode(), RightSidebarMode::Compact);
    }

    #[test]
    fn given_open_right_sidebar_when_escape_then_closes_once() {
        let mut right = RightSidebarLayout::new(&viewport(1600));
        assert!(right.escape());
        assert!(!right.escape());
    }

    #[test]
    fn given_backdrop_range_when_deriving_overlays_then_bounds_are_exclusive_inclusive()
     {
        assert!(!OverlayPlan::derive(&viewport(440), true, true).drawer_backdrop);
        assert!(OverlayPlan::derive(&viewport(441), true, false).drawer_backdrop);
        assert!(OverlayPlan::derive(&viewport(940), false, true).right_backdrop);
        assert!(!OverlayPlan::derive(&viewport(941), true, true).any());
    }

    #[test]
    fn given_very_small_width_when_deriving_overlays_then_close_overlays_replace_backdrops()
     {
        let plan = OverlayPlan::derive(&viewport(440), true, true);
        assert!(plan.very_small_left && plan.very_small_right);
        assert!(!plan.drawer_backdrop && !plan.right_backdrop);
    }
}
