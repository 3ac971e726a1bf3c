use iced::widget::{Column, Space, container, row, scrollable, text};
use iced::{Border, Color, Element, Length, Theme, alignment};
use shopboard_core::fixtures::FeedItem;

use super::event::RightSidebarIntent;
use super::model::{OVERLAY_SHEET_WIDTH, RightSidebarViewModel};
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const AVATAR_SIZE: f32 = 24.0;

/// Props for the right sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RightSidebarViewProps<'a> {
    pub(crate) vm: RightSidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the notification, activity and contact feeds.
pub(crate) fn view(
    props: RightSidebarViewProps<'_>,
) -> Element<'_, RightSidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    if !vm.open || (vm.width == 0.0 && !vm.overlay_sheet) {
        return container(Space::new())
            .width(Length::Shrink)
            .height(Length::Fill)
            .into();
    }

    let palette = *props.theme.theme.iced_palette();
    let compact = vm.is_compact();

    let mut content = Column::new().spacing(24);
    if vm.overlay_sheet {
        let close = icon_button::view(IconButtonProps {
            glyph: icons::CLOSE,
            theme: props.theme,
            size: 28.0,
            glyph_size: 14.0,
            variant: IconButtonVariant::Standard,
        })
        .map(|event| match event {
            IconButtonEvent::Pressed => RightSidebarIntent::Close,
        });
        content = content.push(
            container(close)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );
    }

    content = content
        .push(feed("Notifications", vm.notifications, compact, palette, true))
        .push(feed("Activities", vm.activities, compact, palette, false))
        .push(feed("Contacts", vm.contacts, compact, palette, false));

    let width = if vm.overlay_sheet {
        OVERLAY_SHEET_WIDTH
    } else {
        vm.width
    };

    container(scrollable(content.padding(20)).height(Length::Fill))
        .width(Length::Fixed(width))
        .height(Length::Fill)
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

fn feed<'a>(
    title: &'static str,
    items: &'a [FeedItem],
    compact: bool,
    palette: IcedColorPalette,
    glyph_icons: bool,
) -> Element<'a, RightSidebarIntent, Theme, iced::Renderer> {
    let (title_size, subtitle_size) =
        if compact { (13.0, 11.0) } else { (14.0, 12.0) };

    let mut list = Column::new()
        .spacing(12)
        .push(text(title).size(14).color(palette.foreground));

    for item in items {
        let badge = if glyph_icons {
            icons::glyph(&item.icon).to_string()
        } else {
            icons::initials(&item.title)
        };
        let avatar = container(text(badge).size(11))
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_| container::Style {
                background: Some(palette.card_secondary.into()),
                text_color: Some(Color::BLACK),
                border: Border {
                    radius: (AVATAR_SIZE / 2.0).into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        let mut lines = Column::new().spacing(2).push(
            text(item.title.as_str())
                .size(title_size)
                .color(palette.foreground),
        );
        if !item.subtitle.is_empty() {
            lines = lines.push(
                text(item.subtitle.as_str())
                    .size(subtitle_size)
                    .color(palette.dim_foreground),
            );
        }

        list = list.push(
            row![avatar, lines]
                .spacing(8)
                .align_y(alignment::Vertical::Top),
        );
    }

    list.into()
}
