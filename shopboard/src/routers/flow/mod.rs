pub(crate) mod navigation;
pub(crate) mod shell;

use iced::Task;

use crate::app::{App, AppEvent, AppFlowEvent};

/// Route a flow event to the appropriate cross-widget orchestrator.
pub(crate) fn route(app: &mut App, event: AppFlowEvent) -> Task<AppEvent> {
    match event {
        AppFlowEvent::Navigate(intent) => navigation::navigate(app, intent),
        AppFlowEvent::ToggleTheme => shell::toggle_theme(app),
        AppFlowEvent::ToggleLeftSidebar => shell::toggle_left_sidebar(app),
        AppFlowEvent::ToggleRightSidebar => shell::toggle_right_sidebar(app),
        AppFlowEvent::Escape => shell::escape(app),
    }
}

#[cfg(test)]
mod tests {
    use shopboard_core::{ActiveView, ThemeMode};

    use super::route;
    use crate::app::{App, AppFlowEvent};
    use crate::routers;
    use crate::widgets::navbar::model::navigate_to;
    use crate::widgets::navbar::{NavbarCtx, NavbarEvent, NavbarIntent};
    use crate::widgets::orders::OrdersIntent;

    fn navbar_history(app: &App) -> Vec<ActiveView> {
        let ctx = NavbarCtx {
            viewport: &app.state.viewport,
            navigation: &app.state.navigation,
            theme_mode: app.theme_manager.mode(),
            right_sidebar_open: app.widgets.right_sidebar.is_open(),
        };
        app.widgets.navbar.vm(&ctx).history.to_vec()
    }

    #[test]
    fn given_orders_request_when_navigating_then_view_and_history_follow() {
        let mut app = App::for_tests();

        let _task = route(
            &mut app,
            AppFlowEvent::Navigate(navigate_to(ActiveView::Orders)),
        );

        assert_eq!(app.state.navigation.active_view, ActiveView::Orders);
        assert_eq!(app.state.navigation.active_sub_menu_item, "order-list");
        assert_eq!(navbar_history(&app), [ActiveView::Orders]);
        assert_eq!(app.title(), "Orders - Shopboard");
    }

    #[test]
    fn given_same_view_when_navigating_again_then_history_is_unchanged() {
        let mut app = App::for_tests();
        let _task = route(
            &mut app,
            AppFlowEvent::Navigate(navigate_to(ActiveView::Dashboard)),
        );
        assert!(navbar_history(&app).is_empty());
    }

    #[test]
    fn given_modal_and_panel_when_escaping_then_modal_closes_first() {
        let mut app = App::for_tests();
        let _task = route(
            &mut app,
            AppFlowEvent::Navigate(navigate_to(ActiveView::Orders)),
        );
        let _task = routers::orders::route_intent_event(
            &mut app,
            OrdersIntent::OpenDetails("#CM9801".into()),
        );
        let _task = routers::navbar::route(
            &mut app,
            NavbarEvent::Intent(NavbarIntent::FavoritesPressed),
        );

        let _task = route(&mut app, AppFlowEvent::Escape);
        assert!(!app.widgets.orders.has_modal());
        assert!(app.widgets.navbar.has_open_panel());

        let _task = route(&mut app, AppFlowEvent::Escape);
        assert!(!app.widgets.navbar.has_open_panel());
    }

    #[test]
    fn given_light_theme_when_toggled_then_dark_palette_is_active() {
        let mut app = App::for_tests();
        let _task = route(&mut app, AppFlowEvent::ToggleTheme);
        assert_eq!(app.theme_manager.mode(), ThemeMode::Dark);
    }

    #[test]
    fn given_desktop_when_toggling_right_sidebar_then_it_closes() {
        let mut app = App::for_tests();
        assert!(app.widgets.right_sidebar.is_open());
        let _task = route(&mut app, AppFlowEvent::ToggleRightSidebar);
        assert!(!app.widgets.right_sidebar.is_open());
    }
}
