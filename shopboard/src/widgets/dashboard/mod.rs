mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use event::{DashboardEvent, DashboardIntent};
use iced::Task;
pub(crate) use model::{
    CardViewModel, DashboardData, DashboardViewModel, LIVE_UPDATE_INTERVAL,
};
use shopboard_core::Viewport;
use state::DashboardState;

/// Dashboard content widget with animated metric cards.
pub(crate) struct DashboardWidget {
    state: DashboardState,
}

impl DashboardWidget {
    pub(crate) fn new(data: DashboardData, now: Instant) -> Self {
        Self {
            state: DashboardState::new(data, now),
        }
    }

    /// Reduce an intent event into state updates.
    pub(crate) fn reduce(
        &mut self,
        event: DashboardIntent,
    ) -> Task<DashboardEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build the view model for the current animation frame.
    pub(crate) fn vm(&self, viewport: &Viewport) -> DashboardViewModel<'_> {
        let data = self.state.data();
        let now = self.state.now();
        let cards = data
            .cards
            .iter()
            .zip(self.state.metrics())
            .map(|(card, metric)| CardViewModel {
                title: &card.title,
                display: metric.display(now),
                change: &card.change,
                trend: card.trend,
            })
            .collect();

        DashboardViewModel {
            cards,
            projections: &data.projections,
            revenue_by_location: &data.revenue_by_location,
            top_products: &data.top_products,
            single_column: viewport.is_mobile,
        }
    }

    /// Whether a frame tick subscription is needed.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}
