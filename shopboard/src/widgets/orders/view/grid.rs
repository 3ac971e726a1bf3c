use iced::widget::{Column, Row, button, container, mouse_area, row, text};
use iced::{Border, Element, Length, Theme, alignment};
use shopboard_core::orders::{
    OrderRecord, Selection, SortConfig, SortDirection, SortKey,
};

use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::status_badge::{self, StatusBadgeProps};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::orders::event::OrdersIntent;
use crate::widgets::orders::model::ColumnSet;

const CHECK_WIDTH: f32 = 32.0;
const ACTION_WIDTH: f32 = 36.0;
const ROW_HEIGHT: f32 = 40.0;
const AVATAR_SIZE: f32 = 24.0;
const CHECKED: &str = "☑";
const UNCHECKED: &str = "☐";

/// Props for the order grid.
#[derive(Debug, Clone)]
pub(crate) struct GridProps<'a> {
    pub(crate) rows: Vec<&'a OrderRecord>,
    pub(crate) selection: &'a Selection,
    pub(crate) all_selected: bool,
    pub(crate) sort: Option<SortConfig>,
    pub(crate) columns: ColumnSet,
    pub(crate) compact: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Grid columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridColumn {
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
}

impl GridColumn {
    const ALL: [GridColumn; 6] = [
        GridColumn::Id,
        GridColumn::User,
        GridColumn::Project,
        GridColumn::Address,
        GridColumn::Date,
        GridColumn::Status,
    ];

    fn title(self) -> &'static str {
        match self {
            GridColumn::Id => "Order ID",
            GridColumn::User => "User",
            GridColumn::Project => "Project",
            GridColumn::Address => "Address",
            GridColumn::Date => "Date",
            GridColumn::Status => "Status",
        }
    }

    fn sort_key(self) -> SortKey {
        match self {
            GridColumn::Id => SortKey::Id,
            GridColumn::User => SortKey::Name,
            GridColumn::Project => SortKey::Project,
            GridColumn::Address => SortKey::Address,
            GridColumn::Date => SortKey::Date,
            GridColumn::Status => SortKey::Status,
        }
    }

    fn portion(self) -> u16 {
        match self {
            GridColumn::Id | GridColumn::Date | GridColumn::Status => 2,
            GridColumn::User | GridColumn::Project => 3,
            GridColumn::Address => 4,
        }
    }

    fn visible(self, columns: ColumnSet) -> bool {
        match self {
            GridColumn::Project => columns.project,
            GridColumn::Address => columns.address,
            _ => true,
        }
    }
}

/// Render the sortable header and one row per order.
pub(crate) fn view(
    props: GridProps<'_>,
) -> Element<'_, OrdersIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let visible: Vec<GridColumn> = GridColumn::ALL
        .into_iter()
        .filter(|column| column.visible(props.columns))
        .collect();

    let mut grid = Column::new().push(header(
        &visible,
        props.sort,
        props.all_selected,
        palette,
    ));

    if props.rows.is_empty() {
        grid = grid.push(
            container(
                text("No orders match the current filters")
                    .size(13)
                    .color(palette.dim_foreground),
            )
            .padding(24)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        );
    }

    for record in props.rows {
        let selected = props.selection.contains(&record.id);
        grid = grid.push(order_row(
            record,
            &visible,
            selected,
            props.compact,
            props.theme,
        ));
    }

    grid.into()
}

fn header<'a>(
    visible: &[GridColumn],
    sort: Option<SortConfig>,
    all_selected: bool,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let mut cells = Row::new()
        .height(Length::Fixed(ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .push(check(all_selected, OrdersIntent::ToggleAllVisible, palette));

    for column in visible {
        let key = column.sort_key();
        let marker = match sort {
            Some(config) if config.key == key => match config.direction {
                SortDirection::Asc => icons::SORT_ASC,
                SortDirection::Desc => icons::SORT_DESC,
            },
            _ => "",
        };
        let label = row![
            text(column.title()).size(12),
            text(marker).size(9),
        ]
        .spacing(4)
        .align_y(alignment::Vertical::Center);

        cells = cells.push(
            button(label)
                .padding([4, 0])
                .width(Length::FillPortion(column.portion()))
                .on_press(OrdersIntent::SortBy(key))
                .style(move |_, _| button::Style {
                    text_color: palette.dim_foreground,
                    ..button::Style::default()
                }),
        );
    }

    container(cells.push(container(text("")).width(ACTION_WIDTH)))
        .style(move |_| container::Style {
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn order_row<'a>(
    record: &'a OrderRecord,
    visible: &[GridColumn],
    selected: bool,
    compact: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let mode = theme.theme.mode();

    let mut cells = Row::new()
        .height(Length::Fixed(ROW_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .push(check(
            selected,
            OrdersIntent::ToggleRow(record.id.clone()),
            palette,
        ));

    for column in visible {
        let cell: Element<'a, OrdersIntent, Theme, iced::Renderer> =
            match column {
                GridColumn::Id => cell_text(&record.id, palette),
                GridColumn::User => user_cell(record, compact, palette),
                GridColumn::Project => cell_text(&record.project, palette),
                GridColumn::Address => cell_text(&record.address, palette),
                GridColumn::Date => {
                    if compact {
                        cell_text(&record.date, palette)
                    } else {
                        row![
                            text(icons::CALENDAR)
                                .size(12)
                                .color(palette.dim_foreground),
                            cell_text(&record.date, palette),
                        ]
                        .spacing(4)
                        .align_y(alignment::Vertical::Center)
                        .into()
                    }
                },
                GridColumn::Status => status_badge::view(StatusBadgeProps {
                    status: record.status,
                    mode,
                    compact,
                }),
            };
        cells = cells.push(
            container(cell).width(Length::FillPortion(column.portion())),
        );
    }

    let quick = icon_button::view(IconButtonProps {
        glyph: icons::VIEW,
        theme,
        size: 24.0,
        glyph_size: 12.0,
        variant: IconButtonVariant::Standard,
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => OrdersIntent::QuickActions,
    });
    cells = cells.push(container(quick).width(ACTION_WIDTH));

    let body = container(cells).style(move |_| container::Style {
        background: selected.then(|| palette.accent_soft.into()),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    mouse_area(body)
        .on_press(OrdersIntent::OpenDetails(record.id.clone()))
        .into()
}

fn user_cell<'a>(
    record: &'a OrderRecord,
    compact: bool,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    if compact {
        return cell_text(&record.name, palette);
    }

    let avatar = container(text(icons::initials(&record.name)).size(10))
        .width(AVATAR_SIZE)
        .height(AVATAR_SIZE)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.card_secondary.into()),
            text_color: Some(palette.accent),
            border: Border {
                radius: (AVATAR_SIZE / 2.0).into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    row![avatar, cell_text(&record.name, palette)]
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn cell_text<'a>(
    value: &'a str,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    text(value).size(12).color(palette.foreground).into()
}

fn check<'a>(
    checked: bool,
    intent: OrdersIntent,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let glyph = if checked { CHECKED } else { UNCHECKED };
    button(text(glyph).size(14))
        .padding(0)
        .width(CHECK_WIDTH)
        .on_press(intent)
        .style(move |_, _| button::Style {
            text_color: if checked {
                palette.accent
            } else {
                palette.dim_foreground
            },
            ..button::Style::default()
        })
        .into()
}
