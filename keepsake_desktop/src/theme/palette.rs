use iced::Color;

/// Theme mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn all() -> Vec<&'static str> {
        vec!["Light", "Dark"]
    }
}

/// Core color palette for the Keepsake Blush theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub ink: Color,
    pub petal: Color,
    pub petal_edge: Color,
    pub stem: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::light()
    }
}

impl PaletteColors {
    /// Light theme palette. The toy scenes themselves stay white, as drawn
    /// originally.
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(255, 252, 250),  // Warm off-white
            surface: Color::from_rgb8(255, 255, 255),     // Scene white
            border: Color::from_rgb8(230, 215, 220),      // Dusty rose border
            text: Color::from_rgb8(45, 30, 40),           // Deep plum text
            muted: Color::from_rgb8(150, 130, 140),       // Mauve gray
            accent: Color::from_rgb8(255, 20, 147),       // Deep pink
            success: Color::from_rgb8(40, 160, 80),       // Green
            ink: Color::from_rgb8(20, 20, 20),            // Envelope outline
            petal: Color::from_rgb8(255, 20, 147),        // Deep pink petals
            petal_edge: Color::from_rgb8(255, 0, 0),      // Red petal edge
            stem: Color::from_rgb8(0, 128, 0),            // Stem green
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(20, 14, 18),     // Plum black
            surface: Color::from_rgb8(32, 24, 30),        // Dark plum scene
            border: Color::from_rgb8(70, 50, 62),         // Muted rose border
            text: Color::from_rgb8(245, 235, 240),        // Off-white
            muted: Color::from_rgb8(160, 140, 150),       // Mauve gray
            accent: Color::from_rgb8(255, 80, 170),       // Bright pink
            success: Color::from_rgb8(100, 220, 140),     // Bright green
            ink: Color::from_rgb8(235, 230, 235),         // Envelope outline
            petal: Color::from_rgb8(255, 80, 170),        // Bright pink petals
            petal_edge: Color::from_rgb8(255, 90, 90),    // Soft red edge
            stem: Color::from_rgb8(70, 170, 90),          // Lifted green
        }
    }

    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Returns the default palette for the application.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}

/// Returns palette for a specific theme mode
pub fn palette_from_mode(mode: ThemeMode) -> PaletteColors {
    PaletteColors::from_theme_mode(mode)
}
