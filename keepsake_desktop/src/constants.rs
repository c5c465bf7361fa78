// Animation timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const FRAME_BUDGET: u32 = 600;

// Envelope window
pub const ENVELOPE_WINDOW_WIDTH: f32 = 460.0;
pub const ENVELOPE_WINDOW_HEIGHT: f32 = 560.0;
pub const ENVELOPE_CANVAS_SIZE: f32 = 360.0;
pub const ENVELOPE_STROKE_WIDTH: f32 = 2.0;

// Bouquet window
pub const BOUQUET_WINDOW_SIZE: f32 = 640.0;
pub const STEM_STROKE_WIDTH: f32 = 3.0;
pub const PETAL_EDGE_WIDTH: f32 = 1.0;
pub const FAREWELL_TEXT_SIZE: f32 = 64.0;

// Shared UI dimensions
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const REVEAL_CARD_MAX_WIDTH: f32 = 400.0;
