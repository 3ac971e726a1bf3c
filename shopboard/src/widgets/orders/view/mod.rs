pub(crate) mod details;
pub(crate) mod form;
pub(crate) mod grid;
pub(crate) mod toast;

use iced::widget::{
    Column, Row, Space, Stack, button, container, mouse_area, opaque, row,
    scrollable, text, text_input,
};
use iced::{Border, Element, Length, Padding, Theme, alignment};
use shopboard_core::ThemeMode;
use shopboard_core::orders::{FilterState, OrderStatus};

use super::event::OrdersIntent;
use super::model::{BulkAction, OrdersViewModel};
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::status_badge::{self, StatusBadgeProps};
use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const BUTTON_SIZE: f32 = 28.0;
const GLYPH_SIZE: f32 = 14.0;
const SEARCH_WIDTH: f32 = 200.0;
const CONTENT_PADDING: f32 = 28.0;
const COMPACT_CONTENT_PADDING: f32 = 12.0;
const TOAST_OFFSET: f32 = 24.0;

/// Props for the order list view.
#[derive(Debug, Clone)]
pub(crate) struct OrdersViewProps<'a> {
    pub(crate) vm: OrdersViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the order list with its toolbar, pager and modal layers.
pub(crate) fn view(
    props: OrdersViewProps<'_>,
) -> Element<'_, OrdersIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let mode = props.theme.theme.mode();
    let vm = props.vm;

    let mut body = Column::new()
        .spacing(16)
        .push(text("Order List").size(14).color(palette.foreground))
        .push(toolbar(vm.search, vm.show_filters, props.theme));

    if vm.show_filters {
        body = body.push(filter_panel(vm.filters, mode, palette));
    }
    if !vm.selection.is_empty() {
        body = body.push(bulk_bar(vm.selection.len(), vm.loading, palette));
    }

    body = body
        .push(grid::view(grid::GridProps {
            rows: vm.rows,
            selection: vm.selection,
            all_selected: vm.all_selected,
            sort: vm.sort,
            columns: vm.columns,
            compact: vm.compact,
            theme: props.theme,
        }))
        .push(pager(vm.page, vm.page_count, &vm.pages, vm.total, props.theme));

    let padding = if vm.compact {
        COMPACT_CONTENT_PADDING
    } else {
        CONTENT_PADDING
    };
    let mut layers: Vec<Element<'_, OrdersIntent, Theme, iced::Renderer>> =
        vec![scrollable(body.padding(padding)).height(Length::Fill).into()];

    if vm.loading {
        layers.push(loading_overlay(palette));
    }
    if let Some(record) = vm.details {
        let card = details::view(details::DetailsProps {
            record,
            theme: props.theme,
        });
        layers.push(modal(card, OrdersIntent::CloseDetails, palette));
    } else if let Some(order_form) = vm.form {
        let card = form::view(form::FormProps {
            form: order_form,
            theme: props.theme,
        });
        layers.push(modal(card, OrdersIntent::CancelForm, palette));
    }
    if let Some(current) = vm.toast {
        let toast = toast::view(toast::ToastProps {
            toast: current,
            theme: props.theme,
        });
        layers.push(
            container(toast)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(TOAST_OFFSET)
                .into(),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Tone of a labelled order list button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ButtonTone {
    Primary,
    Plain,
    Danger,
}

/// Labelled button shared by the toolbar, pager and modals.
pub(super) fn text_button<'a>(
    label: impl Into<String>,
    on_press: Option<OrdersIntent>,
    tone: ButtonTone,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let (background, foreground) = match tone {
        ButtonTone::Primary => (Some(palette.accent), palette.background),
        ButtonTone::Plain => (None, palette.foreground),
        ButtonTone::Danger => (None, palette.danger),
    };

    button(text(label.into()).size(13))
        .padding([6, 12])
        .on_press_maybe(on_press)
        .style(move |_, status| {
            let hovered = matches!(status, button::Status::Hovered);
            let disabled = matches!(status, button::Status::Disabled);
            let fill = background.or(hovered.then_some(palette.accent_soft));
            button::Style {
                background: fill.map(Into::into),
                text_color: if disabled {
                    palette.dim_foreground
                } else {
                    foreground
                },
                border: Border {
                    color: palette.border,
                    width: if background.is_some() { 0.0 } else { 1.0 },
                    radius: 8.0.into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn tool<'a>(
    glyph: &'static str,
    active: bool,
    theme: ThemeProps<'a>,
    intent: OrdersIntent,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let variant = if active {
        IconButtonVariant::Active
    } else {
        IconButtonVariant::Standard
    };

    icon_button::view(IconButtonProps {
        glyph,
        theme,
        size: BUTTON_SIZE,
        glyph_size: GLYPH_SIZE,
        variant,
    })
    .map(move |event| match event {
        IconButtonEvent::Pressed => intent.clone(),
    })
}

fn toolbar<'a>(
    search: &'a str,
    show_filters: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let search = text_input("Search", search)
        .on_input(OrdersIntent::SearchChanged)
        .size(13)
        .padding([4, 8])
        .width(Length::Fixed(SEARCH_WIDTH))
        .style(move |_, _| text_input::Style {
            background: palette.surface.into(),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: palette.dim_foreground,
            placeholder: palette.dim_foreground,
            value: palette.foreground,
            selection: palette.border,
        });

    let content = row![
        tool(icons::ADD, false, theme, OrdersIntent::OpenForm),
        tool(icons::FILTER, show_filters, theme, OrdersIntent::ToggleFilters),
        tool(icons::EXPORT, false, theme, OrdersIntent::Export),
        Space::new().width(Length::Fill),
        search,
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    container(content)
        .padding(8)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface_alt.into()),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn filter_panel<'a>(
    filters: &'a FilterState,
    mode: ThemeMode,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let chips = OrderStatus::ALL.into_iter().map(|status| {
        let active = filters.status.contains(&status);
        button(status_badge::view(StatusBadgeProps {
            status,
            mode,
            compact: true,
        }))
        .padding([4, 10])
        .on_press(OrdersIntent::ToggleStatusFilter(status))
        .style(move |_, _| button::Style {
            background: active.then(|| palette.accent_soft.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..button::Style::default()
        })
        .into()
    });

    let clear = text_button(
        "Clear",
        filters.is_active().then_some(OrdersIntent::ClearFilters),
        ButtonTone::Plain,
        palette,
    );

    Row::with_children(chips)
        .push(Space::new().width(Length::Fill))
        .push(clear)
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn bulk_bar<'a>(
    selected: usize,
    loading: bool,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let enabled =
        |action| (!loading).then_some(OrdersIntent::BulkAction(action));

    row![
        text(format!("{selected} selected"))
            .size(13)
            .color(palette.dim_foreground),
        Space::new().width(Length::Fill),
        text_button(
            BulkAction::Approve.label(),
            enabled(BulkAction::Approve),
            ButtonTone::Primary,
            palette,
        ),
        text_button(
            BulkAction::Reject.label(),
            enabled(BulkAction::Reject),
            ButtonTone::Danger,
            palette,
        ),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn pager<'a>(
    page: usize,
    page_count: usize,
    pages: &[usize],
    total: usize,
    theme: ThemeProps<'a>,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let summary = text(format!("{total} orders"))
        .size(12)
        .color(palette.dim_foreground);
    if page_count == 0 {
        return summary.into();
    }

    let mut buttons = Row::new()
        .spacing(4)
        .align_y(alignment::Vertical::Center)
        .push(text_button(
            "‹",
            (page > 1).then_some(OrdersIntent::PreviousPage),
            ButtonTone::Plain,
            palette,
        ));
    for number in pages {
        let tone = if *number == page {
            ButtonTone::Primary
        } else {
            ButtonTone::Plain
        };
        buttons = buttons.push(text_button(
            number.to_string(),
            Some(OrdersIntent::PageSelected(*number)),
            tone,
            palette,
        ));
    }
    buttons = buttons.push(text_button(
        "›",
        (page < page_count).then_some(OrdersIntent::NextPage),
        ButtonTone::Plain,
        palette,
    ));

    row![summary, Space::new().width(Length::Fill), buttons]
        .align_y(alignment::Vertical::Center)
        .into()
}

fn loading_overlay<'a>(
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let message = text("Processing...").size(14).color(palette.foreground);
    let label = container(message)
        .padding(16)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    opaque(
        container(label)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_| container::Style {
                background: Some(palette.overlay.into()),
                ..container::Style::default()
            }),
    )
}

fn modal<'a>(
    card: Element<'a, OrdersIntent, Theme, iced::Renderer>,
    on_dismiss: OrdersIntent,
    palette: IcedColorPalette,
) -> Element<'a, OrdersIntent, Theme, iced::Renderer> {
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(palette.overlay.into()),
                ..container::Style::default()
            }),
    )
    .on_press(on_dismiss);

    let centered = container(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::from(16.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::with_children(vec![backdrop.into(), centered.into()]).into()
}
