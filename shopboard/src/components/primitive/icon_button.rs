use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Element, Length, alignment};

use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    Standard,
    /// Toggle buttons whose panel is currently open.
    Active,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) glyph: &'static str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) glyph_size: f32,
    pub(crate) variant: IconButtonVariant,
}

const ICON_BUTTON_RADIUS: f32 = 8.0;

/// Render a square glyph button used across the navbar and grids.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let colors = resolve_variant_colors(
        props.variant,
        palette.foreground,
        palette.accent_soft,
        props.theme.overrides,
    );

    let glyph = container(text(props.glyph).size(props.glyph_size))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(glyph)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let hovered = matches!(status, button::Status::Hovered);
            let background = if colors.filled || hovered {
                Some(Background::Color(colors.hover_background))
            } else {
                None
            };
            button::Style {
                background,
                text_color: colors.foreground,
                border: Border {
                    radius: ICON_BUTTON_RADIUS.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct VariantColors {
    foreground: Color,
    hover_background: Color,
    filled: bool,
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    foreground: Color,
    soft: Color,
    overrides: Option<StyleOverrides>,
) -> VariantColors {
    let mut colors = match variant {
        IconButtonVariant::Standard => VariantColors {
            foreground,
            hover_background: soft,
            filled: false,
        },
        IconButtonVariant::Active => VariantColors {
            foreground,
            hover_background: soft,
            filled: true,
        },
    };

    if let Some(overrides) = overrides {
        if let Some(color) = overrides.foreground {
            colors.foreground = color;
        }
        if let Some(color) = overrides.background {
            colors.hover_background = color;
        }
    }
    colors
}
