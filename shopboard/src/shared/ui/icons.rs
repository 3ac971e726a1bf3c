//! Text glyphs standing in for the dashboard's icon set.

pub(crate) const MENU: &str = "☰";
pub(crate) const CLOSE: &str = "✕";
pub(crate) const STAR: &str = "☆";
pub(crate) const HISTORY: &str = "🕘";
pub(crate) const BELL: &str = "🔔";
pub(crate) const SUN: &str = "☀";
pub(crate) const MOON: &str = "☾";
pub(crate) const SIDEBAR: &str = "▥";
pub(crate) const SEARCH: &str = "⌕";
pub(crate) const ADD: &str = "+";
pub(crate) const FILTER: &str = "⚲";
pub(crate) const EXPORT: &str = "⇩";
pub(crate) const VIEW: &str = "⋯";
pub(crate) const CALENDAR: &str = "▦";
pub(crate) const SORT_ASC: &str = "▲";
pub(crate) const SORT_DESC: &str = "▼";
pub(crate) const CHEVRON_RIGHT: &str = "›";
pub(crate) const CHEVRON_DOWN: &str = "⌄";
pub(crate) const TREND_UP: &str = "↗";
pub(crate) const TREND_DOWN: &str = "↘";
pub(crate) const TREND_STABLE: &str = "→";

const FALLBACK: &str = "•";

/// Glyph for an icon name used by the fixtures.
pub(crate) fn glyph(name: &str) -> &'static str {
    match name {
        "dashboard" => "◔",
        "bag" => "🛍",
        "folder" => "🗀",
        "book" => "📖",
        "profile" => "👤",
        "account" => "🪪",
        "corporate" => "🏢",
        "blog" => "✎",
        "social" => "💬",
        "bug" => "🐞",
        "user" => "👤",
        "broadcast" => "📡",
        _ => FALLBACK,
    }
}

/// Two-letter initials for avatar placeholders.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
