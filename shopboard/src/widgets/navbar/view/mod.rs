pub(crate) mod panels;

use iced::widget::{Space, container, row, text, text_input};
use iced::{Border, Element, Length, Theme, alignment};

use super::event::NavbarIntent;
use super::model::{NAVBAR_HEIGHT, NavbarViewModel};
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;

const BUTTON_SIZE: f32 = 28.0;
const GLYPH_SIZE: f32 = 16.0;
const SEARCH_WIDTH: f32 = 160.0;
const HORIZONTAL_PADDING: f32 = 20.0;
const COMPACT_HORIZONTAL_PADDING: f32 = 12.0;
const BREADCRUMB_ROOT: &str = "Dashboards";

/// Props for the navbar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavbarViewProps<'a> {
    pub(crate) vm: NavbarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the top bar: sidebar toggles, breadcrumb, search and actions.
pub(crate) fn view(
    props: NavbarViewProps<'_>,
) -> Element<'_, NavbarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette();

    let mut leading = row![
        action(icons::SIDEBAR, false, props.theme, NavbarIntent::MenuPressed),
        action(
            icons::STAR,
            vm.favorites_open,
            props.theme,
            NavbarIntent::FavoritesPressed,
        ),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    let current = text(vm.breadcrumb).size(14).color(palette.foreground);
    leading = if vm.compact {
        leading.push(current)
    } else {
        let root = text(BREADCRUMB_ROOT).size(14).color(palette.dim_foreground);
        let separator = text("/").size(14).color(palette.dim_foreground);
        leading.push(
            row![root, separator, current]
                .spacing(8)
                .align_y(alignment::Vertical::Center),
        )
    };

    let mut trailing = row![].spacing(8).align_y(alignment::Vertical::Center);
    if vm.show_search {
        trailing = trailing.push(search_field(vm.search, props.theme));
    }

    let theme_glyph = if vm.is_dark { icons::SUN } else { icons::MOON };
    trailing = trailing
        .push(action(
            theme_glyph,
            false,
            props.theme,
            NavbarIntent::ThemePressed,
        ))
        .push(action(
            icons::HISTORY,
            vm.history_open,
            props.theme,
            NavbarIntent::HistoryPressed,
        ))
        .push(action(
            icons::BELL,
            false,
            props.theme,
            NavbarIntent::NotificationsPressed,
        ))
        .push(action(
            icons::SIDEBAR,
            vm.right_sidebar_open,
            props.theme,
            NavbarIntent::SecondaryMenuPressed,
        ));

    let padding = if vm.compact {
        COMPACT_HORIZONTAL_PADDING
    } else {
        HORIZONTAL_PADDING
    };

    let content = row![leading, Space::new().width(Length::Fill), trailing]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill);

    container(content)
        .padding([0.0, padding])
        .width(Length::Fill)
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn search_field<'a>(
    value: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, NavbarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let input = text_input("Search", value)
        .on_input(NavbarIntent::SearchChanged)
        .size(14)
        .padding([4, 8])
        .width(Length::Fixed(SEARCH_WIDTH))
        .style(move |_, _| text_input::Style {
            background: palette.accent_soft.into(),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            icon: palette.dim_foreground,
            placeholder: palette.dim_foreground,
            value: palette.foreground,
            selection: palette.border,
        });

    row![text(icons::SEARCH).size(14).color(palette.dim_foreground), input]
        .spacing(4)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn action<'a>(
    glyph: &'static str,
    active: bool,
    theme: ThemeProps<'a>,
    intent: NavbarIntent,
) -> Element<'a, NavbarIntent, Theme, iced::Renderer> {
    let variant = if active {
        IconButtonVariant::Active
    } else {
        IconButtonVariant::Standard
    };

    icon_button::view(IconButtonProps {
        glyph,
        theme,
        size: BUTTON_SIZE,
        glyph_size: GLYPH_SIZE,
        variant,
    })
    .map(move |event| match event {
        IconButtonEvent::Pressed => intent.clone(),
    })
}
