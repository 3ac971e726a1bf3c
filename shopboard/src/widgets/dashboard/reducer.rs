use iced::Task;

use super::event::{DashboardEvent, DashboardIntent};
use super::state::DashboardState;

/// Reduce a dashboard intent into state updates.
pub(crate) fn reduce(
    state: &mut DashboardState,
    event: DashboardIntent,
) -> Task<DashboardEvent> {
    match event {
        DashboardIntent::Tick(now) => state.set_now(now),
        DashboardIntent::Restart(now) => {
            log::debug!("dashboard counters restarted");
            state.restart(now);
        },
        DashboardIntent::LiveUpdate(now) => {
            let restarted = state.apply_live_update(now);
            log::debug!("live update restarted {restarted} counters");
        },
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use shopboard_core::fixtures::{MetricCard, Trend};
    use shopboard_core::{Breakpoints, Viewport};

    use crate::widgets::dashboard::{
        DashboardData, DashboardIntent, DashboardWidget,
    };

    fn card(id: u32, value: &str) -> MetricCard {
        MetricCard {
            id,
            title: format!("Card {id}"),
            value: value.to_string(),
            change: "+1.00%".into(),
            trend: Trend::Up,
        }
    }

    fn widget(now: Instant) -> DashboardWidget {
        let data = DashboardData {
            cards: vec![card(1, "3,781"), card(2, "$695")],
            ..DashboardData::default()
        };
        DashboardWidget::new(data, now)
    }

    fn displays(widget: &DashboardWidget) -> Vec<String> {
        let viewport = Viewport::fallback(&Breakpoints::default());
        widget
            .vm(&viewport)
            .cards
            .into_iter()
            .map(|card| card.display)
            .collect()
    }

    #[test]
    fn given_started_cards_when_first_shown_then_values_begin_at_zero() {
        let start = Instant::now();
        let widget = widget(start);
        assert!(widget.is_animating());
        assert_eq!(displays(&widget), ["0", "$0"]);
    }

    #[test]
    fn given_running_animation_when_ticked_past_duration_then_sources_show() {
        let start = Instant::now();
        let mut widget = widget(start);

        let _task = widget
            .reduce(DashboardIntent::Tick(start + Duration::from_secs(3)));

        assert!(!widget.is_animating());
        assert_eq!(displays(&widget), ["3,781", "$695"]);
    }

    #[test]
    fn given_finished_animation_when_restarted_then_counters_replay() {
        let start = Instant::now();
        let mut widget = widget(start);
        let later = start + Duration::from_secs(3);
        let _task = widget.reduce(DashboardIntent::Tick(later));

        let _task = widget.reduce(DashboardIntent::Restart(later));

        assert!(widget.is_animating());
    }

    #[test]
    fn given_settled_cards_when_live_update_then_values_drift_and_replay() {
        let start = Instant::now();
        let mut widget = widget(start);
        let later = start + Duration::from_secs(3);
        let _task = widget.reduce(DashboardIntent::Tick(later));

        let _task = widget.reduce(DashboardIntent::LiveUpdate(later));

        assert!(widget.is_animating());
        let viewport = Viewport::fallback(&Breakpoints::default());
        let vm = widget.vm(&viewport);
        for card in &vm.cards {
            assert!(card.change.ends_with('%'));
            let expected = if card.change.starts_with('-') {
                Trend::Down
            } else if card.change.starts_with('+') {
                Trend::Up
            } else {
                Trend::Stable
            };
            assert_eq!(card.trend, expected);
        }
    }

    #[test]
    fn given_live_update_when_settled_then_values_stay_within_two_percent() {
        let start = Instant::now();
        let mut widget = widget(start);
        let later = start + Duration::from_secs(3);

        let _task = widget.reduce(DashboardIntent::LiveUpdate(start));
        let _task = widget.reduce(DashboardIntent::Tick(later));

        let values = displays(&widget);
        let orders: f64 = values[0].replace(',', "").parse().unwrap();
        let revenue: f64 = values[1].trim_start_matches('$').parse().unwrap();
        assert!((3_705.0..=3_857.0).contains(&orders), "{orders}");
        assert!((681.0..=709.0).contains(&revenue), "{revenue}");
    }

    #[test]
    fn given_non_numeric_card_when_live_update_then_card_is_untouched() {
        let start = Instant::now();
        let data = DashboardData {
            cards: vec![card(1, "N/A")],
            ..DashboardData::default()
        };
        let mut widget = DashboardWidget::new(data, start);

        let _task = widget.reduce(DashboardIntent::LiveUpdate(start));

        let viewport = Viewport::fallback(&Breakpoints::default());
        let vm = widget.vm(&viewport);
        assert_eq!(vm.cards[0].display, "N/A");
        assert_eq!(vm.cards[0].change, "+1.00%");
    }
}
