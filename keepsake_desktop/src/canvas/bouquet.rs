use crate::animation::BouquetSceneState;
use crate::constants::{FAREWELL_TEXT_SIZE, PETAL_EDGE_WIDTH, STEM_STROKE_WIDTH};
use crate::theme::PaletteColors;
use iced::alignment;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::widget::text;
use iced::{Color, Point, Rectangle, Theme};
use keepsake_core::bouquet::{PETAL_SIZE, STEM_HEIGHT, WORLD_EXTENT};
use keepsake_core::geometry::{petal_outline, stem_polyline, Point2};
use keepsake_core::Tulip;
use std::marker::PhantomData;

/// Canvas program for the bouquet and its withering overlay.
pub struct BouquetCanvas<'a, Message> {
    pub state: &'a BouquetSceneState,
    pub palette: PaletteColors,
    pub farewell: &'a str,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> BouquetCanvas<'a, Message> {
    pub fn new(state: &'a BouquetSceneState, palette: PaletteColors, farewell: &'a str) -> Self {
        Self {
            state,
            palette,
            farewell,
            _marker: PhantomData,
        }
    }

    fn draw_tulip(
        &self,
        frame: &mut canvas::Frame,
        tulip: &Tulip,
        to_screen: impl Fn(Point2) -> Point + Copy,
    ) {
        let stem = stem_polyline(tulip.drawn_base(), STEM_HEIGHT);
        frame.stroke(
            &polyline_path(&stem, to_screen),
            Stroke::default()
                .with_width(STEM_STROKE_WIDTH)
                .with_color(self.palette.stem),
        );

        let crown = tulip.crown();
        for &angle in tulip.remaining_petal_angles() {
            let outline = petal_outline(PETAL_SIZE, angle);
            let path = Path::new(|builder| {
                for (i, p) in outline.iter().enumerate() {
                    let point = to_screen(Point2::new(crown.x + p.x, crown.y + p.y));
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
                builder.close();
            });
            frame.fill(&path, self.palette.petal);
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(PETAL_EDGE_WIDTH)
                    .with_color(self.palette.petal_edge),
            );
        }
    }
}

fn polyline_path(points: &[Point2], to_screen: impl Fn(Point2) -> Point) -> Path {
    Path::new(|builder| {
        for (i, p) in points.iter().enumerate() {
            let point = to_screen(*p);
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
    })
}

impl<'a, Message> canvas::Program<Message> for BouquetCanvas<'a, Message> {
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
            let bouquet = &self.state.bouquet;

            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                canvas::Fill::from(self.palette.surface),
            );

            // Map the [0, 5] square world onto the largest centered square,
            // y up.
            let side = bounds.width.min(bounds.height);
            let offset_x = (bounds.width - side) / 2.0;
            let offset_y = (bounds.height - side) / 2.0;
            let to_screen = move |p: Point2| {
                Point::new(
                    offset_x + p.x / WORLD_EXTENT * side,
                    offset_y + side - p.y / WORLD_EXTENT * side,
                )
            };

            for tulip in bouquet.tulips().iter().filter(|t| !t.hidden) {
                self.draw_tulip(frame, tulip, to_screen);
            }

            if bouquet.fade_alpha() > 0.0 {
                frame.fill_rectangle(
                    Point::ORIGIN,
                    bounds.size(),
                    canvas::Fill::from(Color {
                        a: bouquet.fade_alpha(),
                        ..Color::BLACK
                    }),
                );
            }

            if bouquet.message_alpha() > 0.0 {
                frame.fill_text(canvas::Text {
                    content: self.farewell.to_string(),
                    position: Point::new(bounds.width / 2.0, bounds.height / 2.0),
                    color: Color {
                        a: bouquet.message_alpha(),
                        ..Color::WHITE
                    },
                    size: FAREWELL_TEXT_SIZE.into(),
                    align_x: text::Alignment::Center,
                    align_y: alignment::Vertical::Center,
                    ..canvas::Text::default()
                });
            }
        })]
    }
}
