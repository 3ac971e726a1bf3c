#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::time::{Duration, Instant};

use iced::{Element, Subscription, Task, Theme};
use shopboard_core::{Fixtures, NavigationIntent, Viewport};

use crate::config::{DashboardConfig, load_config};
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::dashboard::{
    DashboardData, DashboardEvent, DashboardWidget,
};
use crate::widgets::left_sidebar::{LeftSidebarEvent, LeftSidebarWidget};
use crate::widgets::navbar::{NavbarEvent, NavbarWidget};
use crate::widgets::orders::{OrdersEvent, OrdersSettings, OrdersWidget};
use crate::widgets::right_sidebar::{
    Feeds, RightSidebarEvent, RightSidebarWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
/// Poll interval while a resize waits for its quiet period.
pub(crate) const RESIZE_TICK: Duration = Duration::from_millis(25);

/// Cross-widget workflows requested by widget effects.
#[derive(Debug, Clone)]
pub(crate) enum AppFlowEvent {
    Navigate(NavigationIntent),
    ToggleTheme,
    ToggleLeftSidebar,
    ToggleRightSidebar,
    /// Escape key: close the topmost dismissable layer.
    Escape,
}

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navbar widget
    Navbar(NavbarEvent),
    // Left sidebar widget
    LeftSidebar(LeftSidebarEvent),
    // Right sidebar widget
    RightSidebar(RightSidebarEvent),
    // Dashboard widget
    Dashboard(DashboardEvent),
    // Orders widget
    Orders(OrdersEvent),
    // Cross-widget flows
    Flow(AppFlowEvent),
    // Direct operations
    ResizeTick(Instant),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
    Touch(iced::touch::Event),
    PointerMoved(iced::Point),
    PointerPressed,
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navbar: NavbarWidget,
    pub(crate) left_sidebar: LeftSidebarWidget,
    pub(crate) right_sidebar: RightSidebarWidget,
    pub(crate) dashboard: DashboardWidget,
    pub(crate) orders: OrdersWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = load_config();
        let fixtures = Fixtures::load().unwrap_or_else(|err| {
            log::error!("seed data unavailable: {err}");
            Fixtures::default()
        });

        let app = Self::with_seed(&config, fixtures, Instant::now());
        (app, Task::none())
    }

    /// Build the app from resolved config and seed data.
    pub(crate) fn with_seed(
        config: &DashboardConfig,
        fixtures: Fixtures,
        now: Instant,
    ) -> Self {
        let viewport = Viewport::fallback(&config.breakpoints);
        let Fixtures {
            orders,
            metric_cards,
            notifications,
            activities,
            contacts,
            menu,
            top_products,
            revenue_by_location,
            projections,
        } = fixtures;

        let widgets = Widgets {
            navbar: NavbarWidget::new(),
            left_sidebar: LeftSidebarWidget::new(menu, &viewport),
            right_sidebar: RightSidebarWidget::new(
                Feeds {
                    notifications,
                    activities,
                    contacts,
                },
                &viewport,
            ),
            dashboard: DashboardWidget::new(
                DashboardData {
                    cards: metric_cards,
                    projections,
                    revenue_by_location,
                    top_products,
                },
                now,
            ),
            orders: OrdersWidget::new(orders, OrdersSettings::from(config)),
        };

        Self {
            theme_manager: ThemeManager::new(config.theme),
            state: State::new(viewport),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("{} - Shopboard", self.state.navigation.active_view.title())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

#[cfg(test)]
impl App {
    /// App over the embedded seed data and default config.
    pub(crate) fn for_tests() -> Self {
        let fixtures = Fixtures::load().expect("embedded fixtures parse");
        Self::with_seed(&DashboardConfig::default(), fixtures, Instant::now())
    }
}
