use super::palette::PaletteColors;
use iced::{theme, Theme};

/// Creates the custom Keepsake Blush theme for a palette.
pub fn app_theme(p: PaletteColors) -> Theme {
    Theme::custom(
        "Keepsake Blush".to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: p.petal_edge,
            danger: p.petal_edge,
        },
    )
}
