use iced::widget::{Row, Space, Stack, column, container, mouse_area};
use iced::{Element, Length, Padding, Theme, alignment};
use shopboard_core::{ActiveView, OverlayPlan};

use super::{App, AppEvent};
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::dashboard::view as dashboard_view;
use crate::widgets::left_sidebar::view as left_sidebar_view;
use crate::widgets::left_sidebar::{LeftSidebarEvent, LeftSidebarIntent};
use crate::widgets::navbar::view::{self as navbar_view, panels};
use crate::widgets::navbar::{NavbarCtx, NavbarEvent};
use crate::widgets::orders::OrdersEvent;
use crate::widgets::orders::view as orders_view;
use crate::widgets::right_sidebar::view as right_sidebar_view;
use crate::widgets::right_sidebar::{RightSidebarEvent, RightSidebarIntent};

const HAMBURGER_SIZE: f32 = 36.0;
const HAMBURGER_OFFSET: f32 = 12.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let palette = *theme_props.theme.iced_palette();
    let left = &app.widgets.left_sidebar;
    let right = &app.widgets.right_sidebar;
    let right_vm = right.vm();
    let docked_left = left.presentation().docked;

    let mut body = Row::new().width(Length::Fill).height(Length::Fill);
    if docked_left {
        body = body.push(view_left_sidebar(app, theme_props));
    }
    body = body.push(
        container(view_content(app, theme_props))
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if !right_vm.overlay_sheet {
        body = body.push(view_right_sidebar(app, theme_props));
    }

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![body.into()];

    let viewport = &app.state.viewport;
    let plan = OverlayPlan::derive(viewport, left.is_open(), right.is_open());
    if plan.drawer_backdrop || plan.very_small_left {
        layers.push(backdrop(
            AppEvent::LeftSidebar(LeftSidebarEvent::Intent(
                LeftSidebarIntent::BackdropPressed,
            )),
            palette,
        ));
    }
    if !docked_left && left.is_open() {
        layers.push(view_left_sidebar(app, theme_props));
    }
    if plan.right_backdrop || plan.very_small_right {
        layers.push(backdrop(
            AppEvent::RightSidebar(RightSidebarEvent::Intent(
                RightSidebarIntent::Close,
            )),
            palette,
        ));
    }
    if right_vm.overlay_sheet {
        layers.push(
            container(view_right_sidebar(app, theme_props))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .into(),
        );
    }
    if left.shows_hamburger() {
        layers.push(view_hamburger(theme_props));
    }

    let navbar_vm = app.widgets.navbar.vm(&NavbarCtx {
        viewport: &app.state.viewport,
        navigation: &app.state.navigation,
        theme_mode: app.theme_manager.mode(),
        right_sidebar_open: right.is_open(),
    });
    let navbar = navbar_view::view(navbar_view::NavbarViewProps {
        vm: navbar_vm,
        theme: theme_props,
    })
    .map(|event| AppEvent::Navbar(NavbarEvent::Intent(event)));

    let mut root_layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![
            column![navbar, Stack::with_children(layers)]
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        ];
    if app.widgets.navbar.has_open_panel() {
        root_layers.push(
            panels::view(panels::PanelsProps {
                vm: navbar_vm,
                theme: theme_props,
            })
            .map(|event| AppEvent::Navbar(NavbarEvent::Intent(event))),
        );
    }

    Stack::with_children(root_layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_content<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let viewport = &app.state.viewport;
    match app.state.navigation.active_view {
        ActiveView::Dashboard => {
            dashboard_view::view(dashboard_view::DashboardViewProps {
                vm: app.widgets.dashboard.vm(viewport),
                theme: theme_props,
            })
        },
        ActiveView::Orders => {
            orders_view::view(orders_view::OrdersViewProps {
                vm: app.widgets.orders.vm(viewport),
                theme: theme_props,
            })
            .map(|event| AppEvent::Orders(OrdersEvent::Intent(event)))
        },
    }
}

fn view_left_sidebar<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    left_sidebar_view::view(left_sidebar_view::LeftSidebarViewProps {
        vm: app.widgets.left_sidebar.vm(&app.state.navigation),
        theme: theme_props,
    })
    .map(|event| AppEvent::LeftSidebar(LeftSidebarEvent::Intent(event)))
}

fn view_right_sidebar<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    right_sidebar_view::view(right_sidebar_view::RightSidebarViewProps {
        vm: app.widgets.right_sidebar.vm(),
        theme: theme_props,
    })
    .map(|event| AppEvent::RightSidebar(RightSidebarEvent::Intent(event)))
}

fn view_hamburger(
    theme_props: ThemeProps<'_>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let button = icon_button::view(IconButtonProps {
        glyph: icons::MENU,
        theme: theme_props,
        size: HAMBURGER_SIZE,
        glyph_size: 18.0,
        variant: IconButtonVariant::Active,
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => AppEvent::LeftSidebar(
            LeftSidebarEvent::Intent(LeftSidebarIntent::Open),
        ),
    });

    container(button)
        .padding(Padding {
            top: HAMBURGER_OFFSET,
            right: 0.0,
            bottom: 0.0,
            left: HAMBURGER_OFFSET,
        })
        .into()
}

fn backdrop<'a>(
    on_press: AppEvent,
    palette: IcedColorPalette,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(palette.overlay.into()),
                ..container::Style::default()
            }),
    )
    .on_press(on_press)
    .into()
}
