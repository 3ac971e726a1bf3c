use iced::widget::{button, container, row, text};
use iced::{Border, Color, Element, Theme, alignment};

use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::orders::event::OrdersIntent;
use crate::widgets::orders::model::{Toast, ToastKind};

const TOAST_MAX_WIDTH: f32 = 320.0;

/// Props for the transient order list notification.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastProps<'a> {
    pub(crate) toast: &'a Toast,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: ToastProps<'_>,
) -> Element<'_, OrdersIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let accent = kind_color(props.toast.kind, &palette);

    let dismiss = button(text(icons::CLOSE).size(11))
        .padding([2, 6])
        .on_press(OrdersIntent::DismissToast)
        .style(move |_, _| button::Style {
            text_color: palette.dim_foreground,
            ..button::Style::default()
        });

    let content = row![
        text(props.toast.message.as_str())
            .size(13)
            .color(palette.foreground),
        dismiss,
    ]
    .spacing(12)
    .align_y(alignment::Vertical::Center);

    container(content)
        .max_width(TOAST_MAX_WIDTH)
        .padding([10, 14])
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: accent,
                width: 1.5,
                radius: 10.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn kind_color(kind: ToastKind, palette: &IcedColorPalette) -> Color {
    match kind {
        ToastKind::Success => palette.success,
        ToastKind::Error => palette.danger,
        ToastKind::Info => palette.accent,
    }
}
