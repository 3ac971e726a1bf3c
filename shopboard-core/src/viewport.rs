use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Size used when no window is available yet.
pub const FALLBACK_WIDTH: u32 = 1200;
pub const FALLBACK_HEIGHT: u32 = 800;

/// Quiet period a resize storm must observe before it is applied.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Width thresholds shared by every responsive component.
///
/// All `*_max` values are exclusive upper bounds except [`overlay_max`],
/// which is inclusive. Two "mobile" cutoffs coexist: `mobile_max` drives the
/// left sidebar reducer and the swipe handler, `compact_max` drives the right
/// sidebar and the shell chrome.
///
/// [`overlay_max`]: Breakpoints::overlay_max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub very_small_max: u32,
    pub compact_max: u32,
    pub mobile_max: u32,
    pub tablet_max: u32,
    pub overlay_max: u32,
    pub wide_min: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            very_small_max: 440,
            compact_max: 480,
            mobile_max: 768,
            tablet_max: 1024,
            overlay_max: 940,
            wide_min: 1400,
        }
    }
}

impl Breakpoints {
    /// Classify a width into exactly one viewport class.
    pub fn classify(&self, width: u32) -> ViewportClass {
        if width < self.very_small_max {
            ViewportClass::VerySmall
        } else if width < self.mobile_max {
            ViewportClass::Mobile
        } else if width < self.tablet_max {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Named viewport-width classes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    VerySmall,
    Mobile,
    Tablet,
    Desktop,
}

/// Window dimensions plus breakpoint flags derived from the width alone.
///
/// `is_mobile` is true for very small widths as well: the flag means "below
/// the mobile cutoff", while [`Viewport::class`] resolves the exclusive class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub is_very_small: bool,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    breakpoints: Breakpoints,
}

impl Viewport {
    pub fn from_size(
        width: u32,
        height: u32,
        breakpoints: &Breakpoints,
    ) -> Self {
        Self {
            width,
            height,
            is_very_small: width < breakpoints.very_small_max,
            is_mobile: width < breakpoints.mobile_max,
            is_tablet: width >= breakpoints.mobile_max
                && width < breakpoints.tablet_max,
            is_desktop: width >= breakpoints.tablet_max,
            breakpoints: *breakpoints,
        }
    }

    /// Viewport used before the first window size is known.
    pub fn fallback(breakpoints: &Breakpoints) -> Self {
        Self::from_size(FALLBACK_WIDTH, FALLBACK_HEIGHT, breakpoints)
    }

    pub fn class(&self) -> ViewportClass {
        self.breakpoints.classify(self.width)
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Below the right-sidebar and shell cutoff.
    pub fn is_compact(&self) -> bool {
        self.width < self.breakpoints.compact_max
    }

    /// At or above the width where the left sidebar stays docked.
    pub fn is_wide(&self) -> bool {
        self.width >= self.breakpoints.wide_min
    }
}

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a floating point window size, clamping negatives to zero.
    pub fn from_logical(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0).round() as u32,
            height: height.max(0.0).round() as u32,
        }
    }
}

/// Trailing-edge debouncer for window resize events.
///
/// Every [`push`](Self::push) restarts the quiet period and replaces the
/// pending size; [`poll`](Self::poll) releases the latest size once the quiet
/// period has elapsed without further pushes.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    pending: Option<(WindowSize, Instant)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_PERIOD)
    }
}

impl ResizeDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn push(&mut self, size: WindowSize, now: Instant) {
        self.pending = Some((size, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<WindowSize> {
        let (size, at) = self.pending?;
        if now.saturating_duration_since(at) < self.quiet_period {
            return None;
        }

        self.pending = None;
        Some(size)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending size without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{
        Breakpoints, ResizeDebouncer, Viewport, ViewportClass, WindowSize,
    };

    #[test]
    fn given_default_breakpoints_when_classifying_boundaries_then_lower_bound_is_inclusive()
     {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(0), ViewportClass::VerySmall);
        assert_eq!(bp.classify(439), ViewportClass::VerySmall);
        assert_eq!(bp.classify(440), ViewportClass::Mobile);
        assert_eq!(bp.classify(767), ViewportClass::Mobile);
        assert_eq!(bp.classify(768), ViewportClass::Tablet);
        assert_eq!(bp.classify(1023), ViewportClass::Tablet);
        assert_eq!(bp.classify(1024), ViewportClass::Desktop);
    }

    #[test]
    fn given_very_small_width_when_building_viewport_then_mobile_flag_is_also_set()
     {
        let viewport = Viewport::from_size(300, 640, &Breakpoints::default());
        assert!(viewport.is_very_small);
        assert!(viewport.is_mobile);
        assert!(!viewport.is_tablet);
        assert!(!viewport.is_desktop);
        assert_eq!(viewport.class(), ViewportClass::VerySmall);
    }

    #[test]
    fn given_no_window_when_using_fallback_then_viewport_is_desktop_1200_by_800()
    {
        let viewport = Viewport::fallback(&Breakpoints::default());
        assert_eq!((viewport.width, viewport.height), (1200, 800));
        assert!(viewport.is_desktop);
    }

    #[test]
    fn given_widths_around_compact_cutoff_when_checking_then_480_is_not_compact()
    {
        let bp = Breakpoints::default();
        assert!(Viewport::from_size(479, 600, &bp).is_compact());
        assert!(!Viewport::from_size(480, 600, &bp).is_compact());
    }

    #[test]
    fn given_resize_storm_when_polling_then_only_latest_size_is_released_after_quiet_period()
     {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::default();

        debouncer.push(WindowSize::new(800, 600), start);
        debouncer.push(
            WindowSize::new(900, 600),
            start + Duration::from_millis(40),
        );
        debouncer.push(
            WindowSize::new(1000, 600),
            start + Duration::from_millis(80),
        );

        assert_eq!(debouncer.poll(start + Duration::from_millis(150)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(180)),
            Some(WindowSize::new(1000, 600))
        );
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
    }

    #[test]
    fn given_pending_resize_when_cancelled_then_nothing_is_released() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::default();
        debouncer.push(WindowSize::new(640, 480), start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn given_negative_logical_size_when_converting_then_it_clamps_to_zero() {
        assert_eq!(
            WindowSize::from_logical(-4.0, 599.6),
            WindowSize::new(0, 600)
        );
    }
}
