use iced::widget::{Column, Row, Space, column, container, row, text};
use iced::{Border, Color, Element, Length, Theme, alignment};
use shopboard_core::fixtures::{LocationRevenue, MonthlyProjection};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const CHART_HEIGHT: f32 = 168.0;
const BAR_WIDTH: f32 = 20.0;
const PROJECTION_SCALE_MAX: u32 = 30;
const LOCATION_BAR_HEIGHT: f32 = 2.0;

/// Props for the projections and revenue-by-location panels.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChartsProps<'a> {
    pub(crate) projections: &'a [MonthlyProjection],
    pub(crate) revenue_by_location: &'a [LocationRevenue],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the stacked projection bars above the location revenue bars.
pub(crate) fn view<'a, Message: 'a>(
    props: ChartsProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    column![
        panel(
            "Projections vs Actuals",
            projections(props.projections, palette),
            palette,
        ),
        panel(
            "Revenue by Location",
            locations(props.revenue_by_location, palette),
            palette,
        ),
    ]
    .spacing(16)
    .into()
}

fn panel<'a, Message: 'a>(
    title: &'static str,
    body: Element<'a, Message, Theme, iced::Renderer>,
    palette: IcedColorPalette,
) -> Element<'a, Message, Theme, iced::Renderer> {
    container(
        column![text(title).size(14).color(palette.foreground), body]
            .spacing(16),
    )
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

/// Height in pixels for a value in millions on the fixed 0..30M scale.
pub(crate) fn bar_height(value: u32) -> f32 {
    let clamped = value.min(PROJECTION_SCALE_MAX);
    CHART_HEIGHT * clamped as f32 / PROJECTION_SCALE_MAX as f32
}

fn projections<'a, Message: 'a>(
    months: &'a [MonthlyProjection],
    palette: IcedColorPalette,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let mut bars = Row::new().spacing(16).align_y(alignment::Vertical::Bottom);
    for month in months {
        let remainder = month.projection.saturating_sub(month.actual);
        let stack = column![
            block(bar_height(remainder), palette.card_secondary),
            block(bar_height(month.actual), palette.accent),
        ];
        bars = bars.push(
            column![
                container(stack)
                    .height(Length::Fixed(CHART_HEIGHT))
                    .align_y(alignment::Vertical::Bottom),
                text(month.month.as_str())
                    .size(12)
                    .color(palette.dim_foreground),
            ]
            .spacing(8)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
        );
    }
    bars.width(Length::Fill).into()
}

fn block<'a, Message: 'a>(
    height: f32,
    color: Color,
) -> Element<'a, Message, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fixed(BAR_WIDTH))
        .height(Length::Fixed(height))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn locations<'a, Message: 'a>(
    locations: &'a [LocationRevenue],
    palette: IcedColorPalette,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let max = locations
        .iter()
        .map(|location| location.revenue_k)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut list = Column::new().spacing(12);
    for location in locations {
        let filled = location.revenue_k as f32 / max as f32;
        let filled_portion = (filled * 100.0).round() as u16;
        let track = row![
            bar_segment(filled_portion, palette.accent),
            bar_segment(100u16.saturating_sub(filled_portion), palette.border),
        ]
        .height(Length::Fixed(LOCATION_BAR_HEIGHT));

        list = list.push(
            column![
                row![
                    text(location.city.as_str()).size(12),
                    Space::new().width(Length::Fill),
                    text(format!("{}K", location.revenue_k)).size(12),
                ],
                track,
            ]
            .spacing(4),
        );
    }
    list.into()
}

fn bar_segment<'a, Message: 'a>(
    portion: u16,
    color: Color,
) -> Element<'a, Message, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::{CHART_HEIGHT, bar_height};

    #[test]
    fn given_values_above_scale_when_sizing_bars_then_height_is_clamped() {
        assert_eq!(bar_height(30), CHART_HEIGHT);
        assert_eq!(bar_height(45), CHART_HEIGHT);
        assert_eq!(bar_height(0), 0.0);
    }
}
