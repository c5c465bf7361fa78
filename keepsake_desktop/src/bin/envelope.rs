//! Keepsake Envelope - tap the envelope through its positions, then open
//! it for a note.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, text};
use iced::{Background, Element, Length, Task};
use keepsake_core::utils::logger;
use keepsake_core::Config;
use keepsake_desktop::{
    app_theme, palette_from_mode, primary_button_style, reveal_card_style, scene_frame_style,
    secondary_button_style, EnvelopeCanvas, EnvelopeSceneState, PaletteColors, ThemeMode,
    ENVELOPE_CANVAS_SIZE, ENVELOPE_WINDOW_HEIGHT, ENVELOPE_WINDOW_WIDTH, REVEAL_CARD_MAX_WIDTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Application state.
struct App {
    scene: EnvelopeSceneState,
    revealed: Option<&'static str>,
    rng: StdRng,
    palette: PaletteColors,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    TapEnvelope,
    OpenEnvelope,
}

impl App {
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            Ok(app) => (app, Task::none()),
            Err(err) => {
                eprintln!("Initialization error: {err}");
                (Self::with_config(Config::default()), Task::none())
            }
        }
    }

    /// Attempts a full initialization; a broken config falls back to
    /// defaults in `init` rather than aborting the toy.
    fn try_init() -> anyhow::Result<Self> {
        let _ = logger::init_global_logger();
        let config = Config::load_or_default()?;
        logger::info("envelope toy started");
        Ok(Self::with_config(config))
    }

    fn with_config(config: Config) -> Self {
        let mode = ThemeMode::from_name(&config.theme).unwrap_or_default();
        Self {
            scene: EnvelopeSceneState::default(),
            revealed: None,
            rng: StdRng::from_entropy(),
            palette: palette_from_mode(mode),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TapEnvelope => {
                let was_ready = self.scene.envelope.is_ready();
                self.scene.tap();
                if !was_ready && self.scene.envelope.is_ready() {
                    logger::info("envelope reached its final position");
                }
            }
            Message::OpenEnvelope => {
                self.revealed = self.scene.envelope.reveal(&mut self.rng);
                if let Some(note) = self.revealed {
                    logger::info(&format!("note revealed: {note}"));
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = self.palette;

        let heading = text("Tap the Envelope!")
            .size(28)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.text),
            });

        let scene = container(
            Canvas::new(EnvelopeCanvas::<Message>::new(&self.scene, pal))
                .width(Length::Fixed(ENVELOPE_CANVAS_SIZE))
                .height(Length::Fixed(ENVELOPE_CANVAS_SIZE)),
        )
        .padding(8)
        .style(scene_frame_style(pal));

        let tap_button = button(text("Tap Envelope").size(16))
            .on_press(Message::TapEnvelope)
            .padding([10, 24])
            .style(primary_button_style(pal));

        let mut content = column![heading, scene, tap_button]
            .spacing(16)
            .align_x(iced::Alignment::Center);

        // The reveal only exists once the envelope has settled in the
        // center; earlier there is nothing to press.
        if self.scene.envelope.is_ready() {
            content = content.push(
                button(text("Open Envelope").size(16))
                    .on_press(Message::OpenEnvelope)
                    .padding([10, 24])
                    .style(secondary_button_style(pal)),
            );
        }

        if let Some(note) = self.revealed {
            content = content.push(
                container(text(note).size(15).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.text),
                    }
                }))
                .padding(16)
                .max_width(REVEAL_CARD_MAX_WIDTH)
                .style(reveal_card_style(pal)),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_| iced::widget::container::Style {
                background: Some(Background::Color(pal.background)),
                ..Default::default()
            })
            .into()
    }
}

fn main() -> iced::Result {
    fn get_theme(app: &App) -> iced::Theme {
        app_theme(app.palette)
    }

    iced::application(App::init, App::update, App::view)
        .title("Keepsake Envelope")
        .theme(get_theme)
        .window_size(iced::Size::new(
            ENVELOPE_WINDOW_WIDTH,
            ENVELOPE_WINDOW_HEIGHT,
        ))
        .run()
}
