pub(crate) mod charts;
pub(crate) mod products;

use iced::widget::{
    Column, Row, Space, column, container, row, scrollable, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};
use shopboard_core::fixtures::Trend;

use super::model::{CardViewModel, DashboardViewModel};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const CARD_HEIGHT: f32 = 112.0;
const CARD_RADIUS: f32 = 16.0;
const SECTION_SPACING: f32 = 28.0;

/// Props for the dashboard content view.
#[derive(Debug, Clone)]
pub(crate) struct DashboardViewProps<'a> {
    pub(crate) vm: DashboardViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render metric cards, charts and the top products table.
pub(crate) fn view<'a, Message: 'a>(
    props: DashboardViewProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let vm = props.vm;

    let cards: Vec<Element<'a, Message, Theme, iced::Renderer>> = vm
        .cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| metric_card(card, index, palette))
        .collect();

    let cards: Element<'a, Message, Theme, iced::Renderer> =
        if vm.single_column {
            Column::with_children(cards).spacing(16).into()
        } else {
            let mut grid = Column::new().spacing(16);
            let mut cards = cards.into_iter();
            loop {
                let pair: Vec<_> = cards.by_ref().take(2).collect();
                if pair.is_empty() {
                    break;
                }
                grid = grid.push(Row::with_children(pair).spacing(16));
            }
            grid.into()
        };

    let projections = charts::view(charts::ChartsProps {
        projections: vm.projections,
        revenue_by_location: vm.revenue_by_location,
        theme: props.theme,
    });

    let top_row: Element<'a, Message, Theme, iced::Renderer> =
        if vm.single_column {
            column![cards, projections].spacing(SECTION_SPACING).into()
        } else {
            row![
                container(cards).width(Length::FillPortion(1)),
                container(projections).width(Length::FillPortion(1)),
            ]
            .spacing(SECTION_SPACING)
            .into()
        };

    let products = products::view(products::ProductsProps {
        products: vm.top_products,
        theme: props.theme,
    });

    let content = column![
        text("eCommerce").size(14).color(palette.foreground),
        top_row,
        products,
    ]
    .spacing(SECTION_SPACING)
    .padding(28);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn metric_card<'a, Message: 'a>(
    card: CardViewModel<'a>,
    index: usize,
    palette: IcedColorPalette,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let background = if index % 3 == 0 {
        palette.card_primary
    } else {
        palette.card_secondary
    };

    let trend = match card.trend {
        Trend::Up => icons::TREND_UP,
        Trend::Down => icons::TREND_DOWN,
        Trend::Stable => icons::TREND_STABLE,
    };

    let body = column![
        text(card.title).size(14),
        row![
            text(card.display).size(24),
            Space::new().width(Length::Fill),
            text(format!("{} {trend}", card.change)).size(12),
        ]
        .align_y(alignment::Vertical::Center),
    ]
    .spacing(12);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(24)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(Color::from_rgb8(0x1C, 0x1C, 0x1C)),
            border: Border {
                radius: CARD_RADIUS.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
