use std::time::Duration;

use shopboard_core::fixtures::{
    LocationRevenue, MetricCard, MonthlyProjection, TopProduct, Trend,
};

/// Time between two live refreshes of the metric cards.
pub(crate) const LIVE_UPDATE_INTERVAL: Duration = Duration::from_secs(30);

/// Seed of the live refresh drift sequence.
pub(super) const DRIFT_SEED: u64 = 0x5eed_cafe;

/// Dashboard content loaded at startup and refreshed while visible.
#[derive(Debug, Clone, Default)]
pub(crate) struct DashboardData {
    pub(crate) cards: Vec<MetricCard>,
    pub(crate) projections: Vec<MonthlyProjection>,
    pub(crate) revenue_by_location: Vec<LocationRevenue>,
    pub(crate) top_products: Vec<TopProduct>,
}

/// One metric card as displayed in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CardViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) display: String,
    pub(crate) change: &'a str,
    pub(crate) trend: Trend,
}

/// Read-only view model for the dashboard.
#[derive(Debug, Clone)]
pub(crate) struct DashboardViewModel<'a> {
    pub(crate) cards: Vec<CardViewModel<'a>>,
    pub(crate) projections: &'a [MonthlyProjection],
    pub(crate) revenue_by_location: &'a [LocationRevenue],
    pub(crate) top_products: &'a [TopProduct],
    /// Cards and charts stack in a single column.
    pub(crate) single_column: bool,
}
