use iced::widget::{Column, Space, column, container, row, text};
use iced::{Border, Element, Length, Theme, alignment};
use shopboard_core::orders::OrderRecord;

use super::{ButtonTone, text_button};
use crate::components::primitive::status_badge::{self, StatusBadgeProps};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::orders::event::OrdersIntent;

const CARD_WIDTH: f32 = 360.0;

/// Props for the order details modal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DetailsProps<'a> {
    pub(crate) record: &'a OrderRecord,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: DetailsProps<'_>,
) -> Element<'_, OrdersIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let record = props.record;

    let field = |label: &'static str, value: String| {
        row![
            text(label).size(12).color(palette.dim_foreground),
            Space::new().width(Length::Fill),
            text(value).size(13).color(palette.foreground),
        ]
        .align_y(alignment::Vertical::Center)
    };

    let mut fields = Column::new()
        .spacing(10)
        .push(field("Customer", record.name.clone()))
        .push(field("Project", record.project.clone()))
        .push(field("Address", record.address.clone()))
        .push(field("Date", record.date.clone()))
        .push(
            row![
                text("Status").size(12).color(palette.dim_foreground),
                Space::new().width(Length::Fill),
                status_badge::view(StatusBadgeProps {
                    status: record.status,
                    mode: props.theme.theme.mode(),
                    compact: false,
                }),
            ]
            .align_y(alignment::Vertical::Center),
        );
    if let Some(priority) = record.priority {
        fields = fields.push(field("Priority", priority.to_string()));
    }
    if let Some(amount) = record.amount {
        fields = fields.push(field("Amount", format_amount(amount)));
    }

    let title = text(format!("Order {}", record.id))
        .size(16)
        .color(palette.foreground);
    let close = text_button(
        "Close",
        Some(OrdersIntent::CloseDetails),
        ButtonTone::Plain,
        palette,
    );

    container(
        column![
            title,
            fields,
            container(close)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        ]
        .spacing(20),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(24)
    .style(move |_| container::Style {
        background: Some(palette.surface.into()),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}

fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn given_amount_when_formatting_then_two_decimals_are_shown() {
        assert_eq!(format_amount(120.5), "$120.50");
        assert_eq!(format_amount(3.0), "$3.00");
    }
}
