use iced::theme::Palette;
use iced::{Color, Theme};
use shopboard_core::ThemeMode;

/// Raw dashboard palette as `#RRGGBB` / `#RRGGBBAA` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) surface_alt: String,
    pub(crate) foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) border: String,
    pub(crate) accent: String,
    pub(crate) accent_soft: String,
    pub(crate) card_primary: String,
    pub(crate) card_secondary: String,
    pub(crate) success: String,
    pub(crate) danger: String,
    pub(crate) warning: String,
    pub(crate) overlay: String,
}

impl ColorPalette {
    pub(crate) fn light() -> Self {
        Self {
            background: String::from("#FFFFFF"),
            surface: String::from("#FFFFFF"),
            surface_alt: String::from("#F7F9FB"),
            foreground: String::from("#1C1C1C"),
            dim_foreground: String::from("#1C1C1C66"),
            border: String::from("#1C1C1C1A"),
            accent: String::from("#1C1C1C"),
            accent_soft: String::from("#1C1C1C0D"),
            card_primary: String::from("#E3F5FF"),
            card_secondary: String::from("#E5ECF6"),
            success: String::from("#4AA785"),
            danger: String::from("#FF4747"),
            warning: String::from("#FFC555"),
            overlay: String::from("#00000059"),
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            background: String::from("#1C1C1C"),
            surface: String::from("#1C1C1C"),
            surface_alt: String::from("#FFFFFF0D"),
            foreground: String::from("#FFFFFF"),
            dim_foreground: String::from("#FFFFFF66"),
            border: String::from("#FFFFFF1A"),
            accent: String::from("#C6C7F8"),
            accent_soft: String::from("#FFFFFF1A"),
            card_primary: String::from("#E3F5FF"),
            card_secondary: String::from("#E5ECF6"),
            success: String::from("#4AA785"),
            danger: String::from("#FF4747"),
            warning: String::from("#FFC555"),
            overlay: String::from("#00000080"),
        }
    }

    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel =
        |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);
    let r = channel(0).ok()?;
    let g = channel(2).ok()?;
    let b = channel(4).ok()?;
    let a = if hex.len() == 8 { channel(6).ok()? } else { u8::MAX };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

fn resolve(value: &str) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid palette color {value:?}, using magenta");
        Color::from_rgb(1.0, 0.0, 1.0)
    })
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_alt: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) accent_soft: Color,
    pub(crate) card_primary: Color,
    pub(crate) card_secondary: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            background: resolve(&p.background),
            surface: resolve(&p.surface),
            surface_alt: resolve(&p.surface_alt),
            foreground: resolve(&p.foreground),
            dim_foreground: resolve(&p.dim_foreground),
            border: resolve(&p.border),
            accent: resolve(&p.accent),
            accent_soft: resolve(&p.accent_soft),
            card_primary: resolve(&p.card_primary),
            card_secondary: resolve(&p.card_secondary),
            success: resolve(&p.success),
            danger: resolve(&p.danger),
            warning: resolve(&p.warning),
            overlay: resolve(&p.overlay),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
}

/// Dashboard theme for one appearance mode.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    mode: ThemeMode,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        let iced_palette =
            IcedColorPalette::from(&ColorPalette::for_mode(mode));
        Self { mode, iced_palette }
    }

    pub(crate) fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub(crate) fn id(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "shopboard-light",
            ThemeMode::Dark => "shopboard-dark",
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id().to_string(), palette)
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }
}

/// Holds the active theme and swaps palettes on mode changes.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(mode: ThemeMode) -> Self {
        Self {
            current: AppTheme::for_mode(mode),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn mode(&self) -> ThemeMode {
        self.current.mode()
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    pub(crate) fn set_mode(&mut self, mode: ThemeMode) {
        if self.current.mode() != mode {
            log::debug!("theme switched to {mode:?}");
            self.current = AppTheme::for_mode(mode);
        }
    }
}
