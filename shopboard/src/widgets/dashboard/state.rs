use std::time::Instant;

use shopboard_core::fixtures::Trend;
use shopboard_core::{AnimatedMetric, DriftSource, change_label, drifted_value};

use super::model::{DRIFT_SEED, DashboardData};

/// Dashboard content plus one counter animation per metric card.
#[derive(Debug)]
pub(super) struct DashboardState {
    data: DashboardData,
    metrics: Vec<AnimatedMetric>,
    drift: DriftSource,
    now: Instant,
}

impl DashboardState {
    pub(super) fn new(data: DashboardData, now: Instant) -> Self {
        let metrics = start_all(&data, now);
        Self {
            data,
            metrics,
            drift: DriftSource::new(DRIFT_SEED),
            now,
        }
    }

    pub(super) fn data(&self) -> &DashboardData {
        &self.data
    }

    pub(super) fn metrics(&self) -> &[AnimatedMetric] {
        &self.metrics
    }

    pub(super) fn now(&self) -> Instant {
        self.now
    }

    pub(super) fn set_now(&mut self, now: Instant) {
        self.now = now;
    }

    pub(super) fn restart(&mut self, now: Instant) {
        self.metrics = start_all(&self.data, now);
        self.now = now;
    }

    /// Drift every numeric card and retarget its counter.
    ///
    /// Returns how many counters restarted.
    pub(super) fn apply_live_update(&mut self, now: Instant) -> usize {
        let mut restarted = 0;
        for (card, metric) in self.data.cards.iter_mut().zip(&mut self.metrics)
        {
            let percent = self.drift.next_percent();
            let Some(value) = drifted_value(&card.value, percent) else {
                continue;
            };
            if metric.retarget(&value, now) {
                restarted += 1;
            }
            card.value = value;
            card.change = change_label(percent);
            card.trend = trend_of(percent);
        }
        self.now = now;
        restarted
    }

    pub(super) fn is_animating(&self) -> bool {
        self.metrics.iter().any(|metric| metric.is_running(self.now))
    }
}

fn start_all(data: &DashboardData, now: Instant) -> Vec<AnimatedMetric> {
    data.cards
        .iter()
        .map(|card| AnimatedMetric::start(card.value.as_str(), now))
        .collect()
}

fn trend_of(percent: f64) -> Trend {
    if percent > 0.0 {
        Trend::Up
    } else if percent < 0.0 {
        Trend::Down
    } else {
        Trend::Stable
    }
}
