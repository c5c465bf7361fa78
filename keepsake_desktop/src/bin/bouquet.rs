//! Keepsake Bouquet - click the bouquet and watch one flower drift away,
//! shed its petals, and fade to a farewell.

use iced::time::{self, Duration};
use iced::widget::canvas::Canvas;
use iced::widget::mouse_area;
use iced::{Element, Length, Subscription, Task};
use keepsake_core::utils::logger;
use keepsake_core::{Config, WitherPhase};
use keepsake_desktop::{
    app_theme, palette_from_mode, BouquetCanvas, BouquetSceneState, PaletteColors, ThemeMode,
    BOUQUET_WINDOW_SIZE,
};

/// Application state.
struct App {
    scene: BouquetSceneState,
    farewell: String,
    tick_interval: Duration,
    palette: PaletteColors,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick,
    CanvasPressed,
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

    fn try_init() -> anyhow::Result<Self> {
        let _ = logger::init_global_logger();
        let config = Config::load_or_default()?;
        logger::info("bouquet toy started");
        Ok(Self::with_config(config))
    }

    fn with_config(config: Config) -> Self {
        let mode = ThemeMode::from_name(&config.theme).unwrap_or_default();
        Self {
            scene: BouquetSceneState::default(),
            farewell: config.farewell_text,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            palette: palette_from_mode(mode),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let before = self.scene.bouquet.phase();
                self.scene.update();
                let after = self.scene.bouquet.phase();
                if before != after {
                    logger::info(&format!("withering phase: {after:?}"));
                }
            }
            Message::CanvasPressed => {
                let was_waiting = self.scene.bouquet.phase() == WitherPhase::Waiting;
                self.scene.click();
                if was_waiting {
                    logger::info("flower chosen, the rest of the bouquet bows out");
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Ticks stop once the frame budget runs out or the run is done.
        if self.scene.is_live() {
            time::every(self.tick_interval).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        mouse_area(
            Canvas::new(BouquetCanvas::<Message>::new(
                &self.scene,
                self.palette,
                &self.farewell,
            ))
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .on_press(Message::CanvasPressed)
        .into()
    }
}

fn main() -> iced::Result {
    fn get_theme(app: &App) -> iced::Theme {
        app_theme(app.palette)
    }

    iced::application(App::init, App::update, App::view)
        .title("Keepsake Bouquet")
        .subscription(App::subscription)
        .theme(get_theme)
        .window_size(iced::Size::new(BOUQUET_WINDOW_SIZE, BOUQUET_WINDOW_SIZE))
        .run()
}
