use iced::widget::{Column, Row, container, text};
use iced::{Border, Element, Length, Theme};
use shopboard_core::fixtures::TopProduct;

use crate::shared::ui::theme::ThemeProps;

const COLUMNS: [(&str, u16); 4] =
    [("Name", 3), ("Price", 1), ("Quantity", 1), ("Amount", 1)];

/// Props for the top selling products table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProductsProps<'a> {
    pub(crate) products: &'a [TopProduct],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the top selling products table.
pub(crate) fn view<'a, Message: 'a>(
    props: ProductsProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let header = Row::with_children(COLUMNS.iter().map(|(label, portion)| {
        container(text(*label).size(12).color(palette.dim_foreground))
            .width(Length::FillPortion(*portion))
            .into()
    }));

    let mut table = Column::new()
        .spacing(12)
        .push(text("Top Selling Products").size(14))
        .push(header);

    for product in props.products {
        let cells = [
            product.name.clone(),
            product.price.clone(),
            product.quantity.to_string(),
            product.amount.clone(),
        ];
        table = table.push(Row::with_children(
            cells.into_iter().zip(COLUMNS).map(|(value, (_, portion))| {
                container(text(value).size(12).color(palette.foreground))
                    .width(Length::FillPortion(portion))
                    .into()
            }),
        ));
    }

    container(table)
        .width(Length::Fill)
        .padding(24)
        .style(move |_| container::Style {
            background: Some(palette.surface_alt.into()),
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
