use iced::widget::{
    Column, Row, Space, column, container, row, text, text_input,
};
use iced::{Border, Element, Length, Theme, alignment};
use shopboard_core::orders::{OrderField, Priority};

use super::{ButtonTone, text_button};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::orders::event::OrdersIntent;
use crate::widgets::orders::model::OrderForm;

const CARD_WIDTH: f32 = 400.0;

/// Props for the add-order form modal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormProps<'a> {
    pub(crate) form: &'a OrderForm,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the add-order form with inline field errors.
pub(crate) fn view(
    props: FormProps<'_>,
) -> Element<'_, OrdersIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let draft = &props.form.draft;

    let mut fields = Column::new().spacing(14);
    for (field, value, placeholder) in [
        (OrderField::Name, draft.name.as_str(), "Customer name"),
        (OrderField::Project, draft.project.as_str(), "Project"),
        (OrderField::Address, draft.address.as_str(), "Street and city"),
        (OrderField::Amount, draft.amount.as_str(), "0.00"),
    ] {
        fields = fields.push(input(
            field,
            value,
            placeholder,
            props.form.errors.get(field),
            palette,
        ));
    }
    fields = fields.push(priority_picker(draft.priority, palette));

    let actions = row![
        Space::new().width(Length::Fill),
        text_button(
            "Cancel",
            Some(OrdersIntent::CancelForm),
            ButtonTone::Plain,
            palette,
        ),
        text_button(
            "Add order",
            Some(OrdersIntent::SubmitForm),
            ButtonTone::Primary,
            palette,
        ),
    ]
    .spacing(8);

    container(
        column![
            text("New order").size(16).color(palette.foreground),
            fields,
            actions,
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

fn input<'a>(
    field: OrderField,
    value: &'a str,
    placeholder: &'a str,
    error: Option<&'a str>,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let border_color = if error.is_some() {
        palette.danger
    } else {
        palette.border
    };

    let field_input = text_input(placeholder, value)
        .on_input(move |value| OrdersIntent::FormFieldChanged(field, value))
        .on_submit(OrdersIntent::SubmitForm)
        .size(13)
        .padding([6, 10])
        .style(move |_, _| text_input::Style {
            background: palette.surface.into(),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: palette.dim_foreground,
            placeholder: palette.dim_foreground,
            value: palette.foreground,
            selection: palette.border,
        });

    let mut block = Column::new()
        .spacing(4)
        .push(text(field.to_string()).size(12).color(palette.dim_foreground))
        .push(field_input);
    if let Some(message) = error {
        block = block.push(text(message).size(11).color(palette.danger));
    }
    block.into()
}

fn priority_picker<'a>(
    current: Priority,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let options = Priority::ALL.into_iter().map(|priority| {
        let tone = if priority == current {
            ButtonTone::Primary
        } else {
            ButtonTone::Plain
        };
        text_button(
            priority.label(),
            Some(OrdersIntent::FormPriorityChanged(priority)),
            tone,
            palette,
        )
    });

    column![
        text("Priority").size(12).color(palette.dim_foreground),
        Row::with_children(options)
            .spacing(8)
            .align_y(alignment::Vertical::Center),
    ]
    .spacing(4)
    .into()
}
