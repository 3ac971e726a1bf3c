use iced::widget::{
    Column, Space, Stack, button, column, container, mouse_area, text,
};
use iced::{Border, Element, Length, Padding, Theme, alignment};
use shopboard_core::ActiveView;

use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navbar::event::NavbarIntent;
use crate::widgets::navbar::model::{
    NAVBAR_HEIGHT, NavbarViewModel, QUICK_ACCESS,
};

const PANEL_WIDTH: f32 = 220.0;
const PANEL_OFFSET: f32 = 12.0;

/// Props for the favorites and history dropdown layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelsProps<'a> {
    pub(crate) vm: NavbarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render open navbar panels over a click-away catcher.
pub(crate) fn view(
    props: PanelsProps<'_>,
) -> Element<'_, NavbarIntent, Theme, iced::Renderer> {
    let catcher = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(NavbarIntent::ClosePanels);

    let mut layers: Vec<Element<'_, NavbarIntent, Theme, iced::Renderer>> =
        vec![catcher.into()];

    if props.vm.favorites_open {
        let entries = QUICK_ACCESS
            .iter()
            .map(|entry| (entry.label, entry.view))
            .collect::<Vec<_>>();
        layers.push(anchored(
            panel("Quick access", &entries, props.theme),
            alignment::Horizontal::Left,
        ));
    }

    if props.vm.history_open {
        let entries = props
            .vm
            .history
            .iter()
            .map(|view| (view.title(), *view))
            .collect::<Vec<_>>();
        layers.push(anchored(
            panel("Recently visited", &entries, props.theme),
            alignment::Horizontal::Right,
        ));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn anchored<'a>(
    panel: Element<'a, NavbarIntent, Theme, iced::Renderer>,
    align: alignment::Horizontal,
) -> Element<'a, NavbarIntent, Theme, iced::Renderer> {
    container(panel)
        .width(Length::Fill)
        .align_x(align)
        .padding(Padding {
            top: NAVBAR_HEIGHT,
            right: PANEL_OFFSET,
            bottom: 0.0,
            left: PANEL_OFFSET,
        })
        .into()
}

fn panel<'a>(
    title: &'static str,
    entries: &[(&'static str, ActiveView)],
    theme: ThemeProps<'a>,
) -> Element<'a, NavbarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();

    let mut list = Column::new().spacing(2);
    if entries.is_empty() {
        list = list.push(
            text("Nothing visited yet")
                .size(12)
                .color(palette.dim_foreground),
        );
    }
    for (label, view) in entries {
        let entry = button(text(*label).size(13))
            .width(Length::Fill)
            .padding([6, 8])
            .on_press(NavbarIntent::PanelEntrySelected(*view))
            .style(move |_, status| {
                let hovered = matches!(status, button::Status::Hovered);
                button::Style {
                    background: hovered
                        .then(|| palette.accent_soft.into()),
                    text_color: palette.foreground,
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                }
            });
        list = list.push(entry);
    }

    let body = column![
        text(title).size(12).color(palette.dim_foreground),
        list
    ]
    .spacing(8);

    container(body)
        .width(Length::Fixed(PANEL_WIDTH))
        .padding(12)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}
