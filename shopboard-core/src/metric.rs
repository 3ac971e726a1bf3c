//! Count-up animation for dashboard metric cards.
//!
//! A card value such as `"$1,234"` or `"30.1%"` is parsed into a magnitude
//! plus format flags. The animation then walks 60 linear frames from zero to
//! the magnitude over two seconds. Intermediate frames are floored so they
//! never overshoot, and the last frame restores the source formatting.

use std::time::{Duration, Instant};

pub const FRAME_COUNT: u32 = 60;
pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);

/// Time between two frames (about 33.3 ms).
pub fn frame_interval() -> Duration {
    ANIMATION_DURATION / FRAME_COUNT
}

/// Formatting flags detected in a metric source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricFormat {
    pub dollar: bool,
    pub percent: bool,
    pub grouped: bool,
    pub fraction_digits: usize,
}

impl MetricFormat {
    /// Split a source string into its magnitude and format flags.
    ///
    /// Everything except digits and dots is ignored; a second dot ends the
    /// number. Returns `None` when no number remains.
    pub fn parse(value: &str) -> Option<(f64, MetricFormat)> {
        let numeric: String = value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let mut parts = numeric.splitn(3, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let magnitude: f64 = format!("{whole}.{fraction}0").parse().ok()?;
        let format = MetricFormat {
            dollar: value.contains('$'),
            percent: value.contains('%'),
            grouped: value.contains(','),
            fraction_digits: fraction.len(),
        };
        Some((magnitude, format))
    }

    fn decorate(&self, digits: String) -> String {
        if self.dollar {
            format!("${digits}")
        } else if self.percent {
            format!("{digits}%")
        } else {
            digits
        }
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn group_decimal(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            format!("{}.{fraction}", group_thousands(whole))
        },
        None => group_thousands(formatted),
    }
}

/// Frames of one metric animation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricAnimation {
    source: String,
    target: Option<(f64, MetricFormat)>,
}

impl MetricAnimation {
    pub fn new(value: impl Into<String>) -> Self {
        let source = value.into();
        let target = MetricFormat::parse(&source);
        if target.is_none() {
            log::debug!("metric value {source:?} is not numeric");
        }
        Self { source, target }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Non-numeric sources are shown as-is without frames.
    pub fn is_animated(&self) -> bool {
        self.target.is_some()
    }

    /// Display string for frame `step`, clamped to the last frame.
    pub fn frame(&self, step: u32) -> String {
        let Some((target, format)) = self.target else {
            return self.source.clone();
        };

        if step >= FRAME_COUNT {
            return Self::final_frame(target, format);
        }

        let current = target * f64::from(step) / f64::from(FRAME_COUNT);
        let fractional_percent = format.percent && target.fract() != 0.0;
        let digits = if format.grouped && current >= 1000.0 {
            group_thousands(&format!("{}", current.floor()))
        } else if fractional_percent {
            format!("{:.1}", (current * 10.0).floor() / 10.0)
        } else {
            format!("{}", current.floor())
        };

        format.decorate(digits)
    }

    fn final_frame(target: f64, format: MetricFormat) -> String {
        let plain = format!("{:.*}", format.fraction_digits, target);
        let digits = if format.grouped && target >= 1000.0 {
            group_decimal(&plain)
        } else {
            plain
        };
        format.decorate(digits)
    }

    /// Frame index reached after `elapsed`.
    pub fn step_at(elapsed: Duration) -> u32 {
        let step = elapsed.as_nanos() / frame_interval().as_nanos();
        u32::try_from(step).unwrap_or(FRAME_COUNT).min(FRAME_COUNT)
    }

    pub fn display_at(&self, elapsed: Duration) -> String {
        self.frame(Self::step_at(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        !self.is_animated() || Self::step_at(elapsed) >= FRAME_COUNT
    }

    /// Frames one through the last, in order.
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        let count = if self.is_animated() { FRAME_COUNT } else { 0 };
        (1..=count).map(|step| self.frame(step))
    }
}

/// `source` moved by `percent` and reformatted for a live refresh.
///
/// Dollar values are rounded to whole dollars, percents keep one decimal
/// and plain counts are floored and grouped. The result never goes below
/// zero. Non-numeric sources yield `None`.
pub fn drifted_value(source: &str, percent: f64) -> Option<String> {
    let (current, format) = MetricFormat::parse(source)?;
    let next = (current + current * percent / 100.0).max(0.0);
    let value = if format.dollar {
        format!("${next:.0}")
    } else if format.percent {
        format!("{next:.1}%")
    } else {
        group_thousands(&format!("{}", next.floor()))
    };
    Some(value)
}

/// Largest per-refresh move of a live metric, in percent.
pub const MAX_DRIFT_PERCENT: f64 = 2.0;

/// Deterministic xorshift64 source of live metric drift.
#[derive(Debug, Clone)]
pub struct DriftSource {
    state: u64,
}

impl DriftSource {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Next drift in `[-MAX_DRIFT_PERCENT, MAX_DRIFT_PERCENT)`.
    pub fn next_percent(&mut self) -> f64 {
        let unit = (self.next() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * MAX_DRIFT_PERCENT
    }
}

/// Signed change label such as `+1.25%` or `-0.40%`.
pub fn change_label(percent: f64) -> String {
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{sign}{percent:.2}%")
}
///
/// Restarting replaces the previous run, so a card never has two animations
/// driving its display at once.
#[derive(Debug, Clone)]
pub struct AnimatedMetric {
    animation: MetricAnimation,
    started_at: Instant,
}

impl AnimatedMetric {
    pub fn start(value: impl Into<String>, now: Instant) -> Self {
        Self {
            animation: MetricAnimation::new(value),
            started_at: now,
        }
    }

    /// Restart when the source value changed; returns whether it did.
    pub fn retarget(&mut self, value: &str, now: Instant) -> bool {
        if self.animation.source() == value {
            return false;
        }
        *self = Self::start(value, now);
        true
    }

    pub fn source(&self) -> &str {
        self.animation.source()
    }

    pub fn display(&self, now: Instant) -> String {
        self.animation
            .display_at(now.saturating_duration_since(self.started_at))
    }

    pub fn is_running(&self, now: Instant) -> bool {
        !self
            .animation
            .is_finished(now.saturating_duration_since(self.started_at))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{
        AnimatedMetric, FRAME_COUNT, MetricAnimation, MetricFormat,
        DriftSource, MAX_DRIFT_PERCENT, change_label, drifted_value,
        group_thousands,
    };

    #[test]
    fn given_dollar_grouped_value_when_parsing_then_flags_and_magnitude_match()
    {
        let (value, format) =
            MetricFormat::parse("$1,234").expect("numeric value");
        assert_eq!(value, 1234.0);
        assert!(format.dollar && format.grouped && !format.percent);
        assert_eq!(format.fraction_digits, 0);
    }

    #[test]
    fn given_text_without_digits_when_parsing_then_none_is_returned() {
        assert_eq!(MetricFormat::parse("N/A"), None);
        assert_eq!(MetricFormat::parse("."), None);
    }

    #[test]
    fn given_two_dots_when_parsing_then_number_stops_at_second_dot() {
        let (value, format) = MetricFormat::parse("1.2.3").expect("numeric");
        assert_eq!(value, 1.2);
        assert_eq!(format.fraction_digits, 1);
    }

    #[test]
    fn given_dollar_1234_when_animating_then_last_frame_is_exact_source() {
        let animation = MetricAnimation::new("$1,234");
        let frames: Vec<String> = animation.frames().collect();
        assert_eq!(frames.len(), FRAME_COUNT as usize);
        assert_eq!(frames.last().map(String::as_str), Some("$1,234"));
        assert_eq!(frames[29], "$617");
        assert_eq!(frames[49], "$1,028");
    }

    #[test]
    fn given_fractional_percent_when_animating_then_frames_use_one_decimal() {
        let animation = MetricAnimation::new("30.1%");
        assert_eq!(animation.frame(30), "15.0%");
        assert_eq!(animation.frame(59), "29.5%");
        assert_eq!(animation.frame(FRAME_COUNT), "30.1%");
    }

    #[test]
    fn given_whole_percent_when_animating_then_frames_are_integers() {
        let animation = MetricAnimation::new("45%");
        assert_eq!(animation.frame(1), "0%");
        assert_eq!(animation.frame(40), "30%");
        assert_eq!(animation.frame(FRAME_COUNT), "45%");
    }

    #[test]
    fn given_source_precision_when_finishing_then_fraction_digits_are_kept() {
        assert_eq!(MetricAnimation::new("$2,500.50").frame(60), "$2,500.50");
        assert_eq!(MetricAnimation::new("12.00").frame(60), "12.00");
    }

    #[test]
    fn given_ungrouped_source_when_large_then_frames_stay_ungrouped() {
        let animation = MetricAnimation::new("5000");
        assert_eq!(animation.frame(30), "2500");
        assert_eq!(animation.frame(60), "5000");
    }

    #[test]
    fn given_dollar_and_percent_when_decorating_then_dollar_wins() {
        assert_eq!(MetricAnimation::new("$12%").frame(60), "$12");
    }

    #[test]
    fn given_non_numeric_value_when_animating_then_raw_string_is_shown() {
        let animation = MetricAnimation::new("Pending");
        assert!(!animation.is_animated());
        assert_eq!(animation.display_at(Duration::ZERO), "Pending");
        assert!(animation.is_finished(Duration::ZERO));
        assert_eq!(animation.frames().count(), 0);
    }

    #[test]
    fn given_elapsed_time_when_stepping_then_frame_index_tracks_interval() {
        assert_eq!(MetricAnimation::step_at(Duration::ZERO), 0);
        assert_eq!(MetricAnimation::step_at(Duration::from_millis(1000)), 30);
        assert_eq!(MetricAnimation::step_at(Duration::from_millis(2000)), 60);
        assert_eq!(MetricAnimation::step_at(Duration::from_secs(60)), 60);
    }

    #[test]
    fn given_running_metric_when_value_changes_then_animation_restarts() {
        let start = Instant::now();
        let mut metric = AnimatedMetric::start("3,781", start);
        let later = start + Duration::from_millis(2500);
        assert!(!metric.is_running(later));
        assert_eq!(metric.display(later), "3,781");

        assert!(!metric.retarget("3,781", later));
        assert!(metric.retarget("3,900", later));
        assert!(metric.is_running(later));
        assert_eq!(metric.display(later), "0");
    }

    #[test]
    fn given_digit_runs_when_grouping_then_commas_split_thousands() {
        assert_eq!(group_thousands("7"), "7");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn given_each_format_when_drifting_then_source_style_is_kept() {
        assert_eq!(drifted_value("$695", 2.0).as_deref(), Some("$709"));
        assert_eq!(drifted_value("30.1%", -1.0).as_deref(), Some("29.8%"));
        assert_eq!(drifted_value("3,781", 1.0).as_deref(), Some("3,818"));
        assert_eq!(drifted_value("N/A", 1.0), None);
    }

    #[test]
    fn given_large_drop_when_drifting_then_value_stays_non_negative() {
        assert_eq!(drifted_value("12", -150.0).as_deref(), Some("0"));
    }

    #[test]
    fn given_signed_percent_when_labelling_then_plus_only_for_gains() {
        assert_eq!(change_label(1.254), "+1.25%");
        assert_eq!(change_label(-0.4), "-0.40%");
        assert_eq!(change_label(0.0), "0.00%");
    }

    #[test]
    fn given_drift_source_when_sampled_then_values_stay_in_range() {
        let mut source = DriftSource::new(7);
        for _ in 0..1_000 {
            let percent = source.next_percent();
            assert!((-MAX_DRIFT_PERCENT..MAX_DRIFT_PERCENT).contains(&percent));
        }
    }

    #[test]
    fn given_same_seed_when_sampled_then_sequences_match() {
        let mut first = DriftSource::new(42);
        let mut second = DriftSource::new(42);
        for _ in 0..16 {
            assert_eq!(first.next_percent(), second.next_percent());
        }
    }
}
