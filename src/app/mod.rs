// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the rendering engine produced by
//! [`bootstrap::init`](crate::bootstrap::init), the drop pipeline and the few
//! bits of window state the page needs (cursor, size, drop gesture). Messages
//! are handled in `update`, the page is built in `view`.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::bootstrap;
use crate::config::{self, BackgroundTheme, Config};
use crate::domain::SurfaceId;
use crate::drop_handler::{DropEvent, DropPipeline};
use crate::i18n::fluent::I18n;
use crate::loader::FileManager;
use crate::render::Engine;
use crate::ui::drop_target;
use crate::ui::state::DropGesture;
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    engine: Engine,
    pipeline: DropPipeline,
    gesture: DropGesture,
    cursor_position: Option<Point>,
    window_size: Size,
    /// Drops waiting for their image to resolve.
    in_flight: usize,
    /// GPU handle of the frame currently drawn in the viewport.
    frame: Option<image::Handle>,
    last_drawn: Option<PathBuf>,
    theme_mode: ThemeMode,
    background: BackgroundTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("engine", &self.engine)
            .field("in_flight", &self.in_flight)
            .field("last_drawn", &self.last_drawn)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, then builds the application.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}; using default settings");
        }
        Self::from_config(flags, &config)
    }

    /// Wires the loader into a fresh engine before any drop can arrive, and
    /// treats a file given on the command line as a drop on the viewport.
    fn from_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let files = Arc::new(FileManager::new());
        let mut engine = bootstrap::init(Arc::clone(&files), config.image_cache_capacity());

        let window_size = Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT);
        engine.resize_surface(SurfaceId::VIEWPORT, drop_target::surface_size(window_size));

        let mut app = App {
            i18n,
            engine,
            pipeline: DropPipeline::new(files),
            gesture: DropGesture::new(config.drop_coalesce_window()),
            cursor_position: None,
            window_size,
            in_flight: 0,
            frame: None,
            last_drawn: None,
            theme_mode: config.general.theme_mode,
            background: config.background(),
        };

        let task = match flags.file_path {
            Some(path) => app.start_drop(DropEvent::single(path, SurfaceId::VIEWPORT)),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let file_name = self
            .last_drawn
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(file) => self
                .i18n
                .tr_with_args("window-title-with-file", &[("file", file.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.render()
    }
}
