use iced::widget::{container, row, text};
use iced::{Border, Color, Element, Length, alignment};
use shopboard_core::ThemeMode;
use shopboard_core::navigation::status_color;
use shopboard_core::orders::OrderStatus;

use crate::shared::ui::theme::parse_hex_color;

const MARKER_SIZE: f32 = 6.0;
const LABEL_SIZE: f32 = 12.0;
const COMPACT_LABEL_SIZE: f32 = 11.0;

/// Props for rendering an order status badge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusBadgeProps {
    pub(crate) status: OrderStatus,
    pub(crate) mode: ThemeMode,
    pub(crate) compact: bool,
}

/// Render a colored dot followed by the status label.
pub(crate) fn view<'a, Message: 'a>(
    props: StatusBadgeProps,
) -> Element<'a, Message> {
    let color = badge_color(props.status, props.mode);
    let label_size = if props.compact {
        COMPACT_LABEL_SIZE
    } else {
        LABEL_SIZE
    };

    let marker = container(text(""))
        .width(Length::Fixed(MARKER_SIZE))
        .height(Length::Fixed(MARKER_SIZE))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: (MARKER_SIZE / 2.0).into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let label = text(props.status.label()).size(label_size).color(color);

    row![marker, label]
        .spacing(6)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Resolved badge color for a status under a theme.
pub(crate) fn badge_color(status: OrderStatus, mode: ThemeMode) -> Color {
    parse_hex_color(status_color(status, mode)).unwrap_or(Color::BLACK)
}

#[cfg(test)]
mod tests {
    use iced::Color;
    use shopboard_core::ThemeMode;
    use shopboard_core::orders::OrderStatus;

    use super::badge_color;

    #[test]
    fn given_every_status_when_resolving_badge_then_hex_table_parses() {
        for status in OrderStatus::ALL {
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                assert_ne!(badge_color(status, mode), Color::BLACK);
            }
        }
    }

    #[test]
    fn given_rejected_status_when_dark_then_badge_is_translucent_white() {
        let color = badge_color(OrderStatus::Rejected, ThemeMode::Dark);
        assert_eq!((color.r, color.g, color.b), (1.0, 1.0, 1.0));
        assert!(color.a < 0.5);
    }
}
