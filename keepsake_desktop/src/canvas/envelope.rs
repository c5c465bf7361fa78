use crate::animation::EnvelopeSceneState;
use crate::constants::ENVELOPE_STROKE_WIDTH;
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Point, Rectangle, Theme};
use keepsake_core::envelope::{ENVELOPE_HALF_HEIGHT, ENVELOPE_HALF_WIDTH, WORLD_HALF_EXTENT};
use std::marker::PhantomData;

/// Canvas program drawing the envelope at its current tap position.
pub struct EnvelopeCanvas<'a, Message> {
    pub state: &'a EnvelopeSceneState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> EnvelopeCanvas<'a, Message> {
    pub fn new(state: &'a EnvelopeSceneState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for EnvelopeCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        vec![self.state.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();

            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(self.palette.surface),
            );

            // Map the [-1, 1] square world onto the canvas, y up.
            let scale = bounds.width.min(bounds.height) / (2.0 * WORLD_HALF_EXTENT);
            let to_screen =
                move |x: f32, y: f32| Point::new(center.x + x * scale, center.y - y * scale);

            let (px, py) = self.state.envelope.position();
            let (w, h) = (ENVELOPE_HALF_WIDTH, ENVELOPE_HALF_HEIGHT);

            let body = Path::new(|builder| {
                builder.move_to(to_screen(px - w, py - h));
                builder.line_to(to_screen(px + w, py - h));
                builder.line_to(to_screen(px + w, py + h));
                builder.line_to(to_screen(px - w, py + h));
                builder.close();
            });
            frame.stroke(
                &body,
                Stroke::default()
                    .with_width(ENVELOPE_STROKE_WIDTH)
                    .with_color(self.palette.ink),
            );

            // Flap: top corners down to the center of the body.
            let flap = Path::new(|builder| {
                builder.move_to(to_screen(px - w, py + h));
                builder.line_to(to_screen(px, py));
                builder.line_to(to_screen(px + w, py + h));
            });
            frame.stroke(
                &flap,
                Stroke::default()
                    .with_width(ENVELOPE_STROKE_WIDTH)
                    .with_color(self.palette.ink),
            );
        })]
    }
}
