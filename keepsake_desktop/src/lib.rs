//! Keepsake Desktop - shared presentation plumbing for the two toy
//! binaries (`envelope` and `bouquet`), built with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod styles;
pub mod theme;

pub use animation::{BouquetSceneState, EnvelopeSceneState};
pub use canvas::{BouquetCanvas, EnvelopeCanvas};
pub use constants::*;
pub use styles::*;
pub use theme::{app_theme, palette_from_mode, PaletteColors, ThemeMode};
