use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bordered frame around a toy scene canvas.
pub fn scene_frame_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Success-tinted card for the revealed note.
pub fn reveal_card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette.success
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette.success
            },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}
