mod button;
mod container;

pub use button::{primary_button_style, secondary_button_style};
pub use container::{reveal_card_style, scene_frame_style};
