use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary accent button style with glow on hover. Used for the tap button.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.surface,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.9,
                    ..palette.accent
                })),
                shadow: Shadow {
                    color: palette.accent,
                    blur_radius: 10.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.75,
                    ..palette.accent
                })),
                ..base
            },
            _ => base,
        }
    }
}

/// Secondary button style with subtle border. Used for the reveal button.
pub fn secondary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.surface)),
            text_color: palette.text,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };
        match status {
            button::Status::Hovered => button::Style {
                border: Border {
                    color: palette.accent,
                    ..base.border
                },
                ..base
            },
            _ => base,
        }
    }
}
