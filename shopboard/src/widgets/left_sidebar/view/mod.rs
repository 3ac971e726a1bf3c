use iced::widget::{
    Column, Space, button, column, container, row, scrollable, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};
use shopboard_core::navigation::MenuEntry;

use super::event::LeftSidebarIntent;
use super::model::{LeftSidebarViewModel, SidebarTab};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const BRAND_NAME: &str = "ByeWind";
const ITEM_HEIGHT: f32 = 32.0;
const SUB_ITEM_INDENT: f32 = 36.0;
const ACTIVE_MARKER_WIDTH: f32 = 4.0;

/// Props for the left sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftSidebarViewProps<'a> {
    pub(crate) vm: LeftSidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the brand header, shortcut tabs and the menu tree.
pub(crate) fn view(
    props: LeftSidebarViewProps<'_>,
) -> Element<'_, LeftSidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    if !vm.visible {
        return container(Space::new())
            .width(Length::Shrink)
            .height(Length::Fill)
            .into();
    }

    let palette = *props.theme.theme.iced_palette();
    let icon_only = vm.presentation.icon_only;

    let mut content = Column::new().spacing(16).push(brand(icon_only, palette));
    if !icon_only {
        content = content.push(shortcuts(vm.tab, palette));
    }

    for section in vm.menu {
        let mut items = Column::new().spacing(4);
        if !icon_only {
            items = items.push(
                text(section.label.as_str())
                    .size(13)
                    .color(palette.dim_foreground),
            );
        }
        for entry in &section.items {
            items = items.push(menu_item(entry, vm, palette));
        }
        content = content.push(items);
    }

    let scroll = scrollable(content.padding([20, 16]))
        .width(Length::Fill)
        .height(Length::Fill);

    container(scroll)
        .width(Length::Fixed(vm.presentation.width))
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

fn brand<'a>(
    icon_only: bool,
    palette: IcedColorPalette,
) -> Element<'a, LeftSidebarIntent, Theme, iced::Renderer> {
    let avatar = container(text(icons::initials(BRAND_NAME)).size(12))
        .width(Length::Fixed(24.0))
        .height(Length::Fixed(24.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.card_primary.into()),
            text_color: Some(Color::BLACK),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    if icon_only {
        return avatar.into();
    }

    row![avatar, text(BRAND_NAME).size(14).color(palette.foreground)]
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn shortcuts<'a>(
    active: SidebarTab,
    palette: IcedColorPalette,
) -> Element<'a, LeftSidebarIntent, Theme, iced::Renderer> {
    let mut tabs = row![].spacing(8);
    for tab in SidebarTab::ALL {
        let color = if tab == active {
            palette.dim_foreground
        } else {
            palette.border
        };
        tabs = tabs.push(
            button(text(tab.label()).size(13).color(color))
                .padding([4, 8])
                .on_press(LeftSidebarIntent::TabSelected(tab))
                .style(|_, _| button::Style::default()),
        );
    }

    let mut entries = Column::new().spacing(4);
    for entry in active.entries() {
        entries = entries.push(
            row![
                text("•").size(12).color(palette.border),
                text(*entry).size(14).color(palette.foreground),
            ]
            .spacing(8)
            .padding([4, 8]),
        );
    }

    column![tabs, entries].spacing(4).into()
}

fn menu_item<'a>(
    entry: &'a MenuEntry,
    vm: LeftSidebarViewModel<'a>,
    palette: IcedColorPalette,
) -> Element<'a, LeftSidebarIntent, Theme, iced::Renderer> {
    let icon_only = vm.presentation.icon_only;
    let is_active = entry.id == vm.active_menu_item;
    let is_expanded = vm.expanded.contains(&entry.id);

    let glyph = text(icons::glyph(&entry.icon)).size(16);
    let label: Element<'a, LeftSidebarIntent, Theme, iced::Renderer> =
        if icon_only {
            glyph.into()
        } else {
            let chevron = match (entry.has_sub_items(), is_expanded) {
                (false, _) => "",
                (true, true) => icons::CHEVRON_DOWN,
                (true, false) => icons::CHEVRON_RIGHT,
            };
            row![
                container(text(chevron).size(12).color(palette.border))
                    .width(Length::Fixed(12.0)),
                glyph,
                text(entry.label.as_str()).size(14),
            ]
            .spacing(8)
            .align_y(alignment::Vertical::Center)
            .into()
        };

    let item = button(label)
        .width(Length::Fill)
        .height(Length::Fixed(ITEM_HEIGHT))
        .padding([6, 8])
        .on_press(LeftSidebarIntent::ItemPressed(entry.id.clone()))
        .style(move |_, status| highlight(palette, is_active, status));

    let item = row![active_marker(is_active, palette), item]
        .align_y(alignment::Vertical::Center);

    if icon_only || !is_expanded || !entry.has_sub_items() {
        return item.into();
    }

    let mut group = Column::new().spacing(2).push(item);
    for sub in &entry.sub_items {
        let is_active = sub.id == vm.active_sub_menu_item;
        group = group.push(
            button(text(sub.label.as_str()).size(14))
                .width(Length::Fill)
                .padding(iced::Padding {
                    top: 6.0,
                    right: 8.0,
                    bottom: 6.0,
                    left: SUB_ITEM_INDENT,
                })
                .on_press(LeftSidebarIntent::SubItemPressed {
                    parent: entry.id.clone(),
                    id: sub.id.clone(),
                })
                .style(move |_, status| highlight(palette, is_active, status)),
        );
    }
    group.into()
}

fn active_marker<'a>(
    is_active: bool,
    palette: IcedColorPalette,
) -> Element<'a, LeftSidebarIntent, Theme, iced::Renderer> {
    let color = if is_active {
        palette.accent
    } else {
        Color::TRANSPARENT
    };
    container(Space::new())
        .width(Length::Fixed(ACTIVE_MARKER_WIDTH))
        .height(Length::Fixed(16.0))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn highlight(
    palette: IcedColorPalette,
    is_active: bool,
    status: button::Status,
) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered);
    let background = if is_active || hovered {
        Some(palette.accent_soft.into())
    } else {
        None
    };
    button::Style {
        background,
        text_color: palette.foreground,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
