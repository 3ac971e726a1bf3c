use std::time::Instant;

/// Intent events handled by the dashboard presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum DashboardIntent {
    /// Animation frame tick.
    Tick(Instant),
    /// The dashboard became visible again; counters replay.
    Restart(Instant),
    /// Periodic refresh that drifts every card value.
    LiveUpdate(Instant),
}

/// Dashboard event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum DashboardEvent {
    /// Intent event reduced by the dashboard widget.
    Intent(DashboardIntent),
}
