// SPDX-License-Identifier: MPL-2.0
//! Application root state: the trigger shell and the carousel it opens.
//!
//! The shell owns the "viewer open" flag. Pressing the open button sets it;
//! a close request reported by the carousel clears it. The carousel mirrors
//! the flag and resets its session whenever it goes from closed to open.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::Gallery;
use crate::i18n::I18n;
use crate::ui::carousel::{self, Effect};
use crate::ui::design_tokens::sizing;
use crate::ui::state::WheelStep;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: carousel::State,
    viewer_open: bool,
    theme_mode: ThemeMode,
    /// Resolved once at startup so `System` does not query the OS every frame.
    dark: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer_open", &self.viewer_open)
            .field("theme_mode", &self.theme_mode)
            .field("images", &self.carousel.gallery().len())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call
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

/// Picks the gallery file from the CLI, then the config, and falls back to
/// the built-in demo images when none is set or the file cannot be used.
fn resolve_gallery(from_cli: Option<&Path>, from_config: Option<&Path>) -> Gallery {
    let Some(path) = from_cli.or(from_config) else {
        return Gallery::demo();
    };

    match Gallery::load_from_path(path) {
        Ok(gallery) => {
            tracing::info!(path = %path.display(), images = gallery.len(), "gallery loaded");
            gallery
        }
        Err(err) => {
            tracing::error!(
                path = %path.display(),
                error = %err,
                "failed to load gallery, using demo images"
            );
            Gallery::demo()
        }
    }
}

impl App {
    /// Loads the config file and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }
        Self::with_config(flags, &config)
    }

    /// Builds the initial state from already loaded settings.
    fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        tracing::info!(locale = %i18n.current_locale(), "localization ready");

        let gallery = resolve_gallery(flags.gallery.as_deref(), config.viewer.gallery.as_deref());
        let wheel_step = config
            .viewer
            .wheel_step
            .map_or_else(WheelStep::default, WheelStep::new);

        let theme_mode = config.general.theme_mode;
        let mut app = App {
            i18n,
            carousel: carousel::State::new(gallery, wheel_step, config.viewer.cache_capacity()),
            viewer_open: false,
            theme_mode,
            dark: theme_mode.is_dark(),
        };

        let task = if flags.open {
            app.set_viewer_open(true)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_carousel_subscription(&self.carousel)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenGallery => self.set_viewer_open(true),
            Message::Carousel(carousel_message) => {
                let (effect, task) = self.carousel.handle_message(carousel_message);
                let task = task.map(Message::Carousel);
                match effect {
                    Effect::None => task,
                    Effect::Close => Task::batch([task, self.set_viewer_open(false)]),
                }
            }
        }
    }

    /// Updates the visibility flag and hands it down to the carousel.
    fn set_viewer_open(&mut self, open: bool) -> Task<Message> {
        self.viewer_open = open;
        self.carousel.set_visible(open).map(Message::Carousel)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousel: &self.carousel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneralConfig, ViewerConfig};
    use iced::keyboard;
    use std::fs;
    use tempfile::tempdir;

    fn light_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewer: ViewerConfig::default(),
        }
    }

    fn build(flags: Flags) -> App {
        let (app, _task) = App::with_config(flags, &light_config());
        app
    }

    #[test]
    fn new_starts_closed_with_demo_gallery() {
        let app = build(Flags::default());
        assert!(!app.viewer_open);
        assert!(!app.carousel.is_visible());
        assert_eq!(app.carousel.gallery(), &Gallery::demo());
    }

    #[test]
    fn open_flag_starts_with_carousel_visible() {
        let app = build(Flags {
            open: true,
            ..Flags::default()
        });
        assert!(app.viewer_open);
        assert!(app.carousel.is_visible());
    }

    #[test]
    fn open_gallery_shows_carousel() {
        let mut app = build(Flags::default());
        let _ = app.update(Message::OpenGallery);

        assert!(app.viewer_open);
        let session = app.carousel.session().expect("carousel should be open");
        assert_eq!(session.active_index(), 0);
        assert!(session.is_loading());
    }

    #[test]
    fn close_effect_clears_visibility_flag() {
        let mut app = build(Flags::default());
        let _ = app.update(Message::OpenGallery);

        let _ = app.update(Message::Carousel(carousel::Message::Close));

        assert!(!app.viewer_open);
        assert!(!app.carousel.is_visible());
    }

    #[test]
    fn escape_key_closes_carousel() {
        let mut app = build(Flags::default());
        let _ = app.update(Message::OpenGallery);

        let message = carousel::key_message(&keyboard::Key::Named(keyboard::key::Named::Escape))
            .expect("escape is bound");
        let _ = app.update(Message::Carousel(message));

        assert!(!app.viewer_open);
    }

    #[test]
    fn reopening_starts_from_first_image() {
        let mut app = build(Flags::default());
        let _ = app.update(Message::OpenGallery);
        let _ = app.update(Message::Carousel(carousel::Message::Next));
        let _ = app.update(Message::Carousel(carousel::Message::Next));
        let _ = app.update(Message::Carousel(carousel::Message::Close));

        let _ = app.update(Message::OpenGallery);

        let session = app.carousel.session().expect("carousel should be open");
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn gallery_flag_loads_custom_gallery() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("gallery.toml");
        fs::write(
            &path,
            r#"
[[images]]
id = "sunset"
url = "file:///srv/sunset.png"
uploaded_by = "Someone"
upload_date = "2024-05-01"
"#,
        )
        .expect("write gallery");

        let app = build(Flags {
            gallery: Some(path),
            ..Flags::default()
        });

        assert_eq!(app.carousel.gallery().len(), 1);
        assert_eq!(
            app.carousel.gallery().get(0).map(|record| record.uploaded_by.as_str()),
            Some("Someone")
        );
    }

    #[test]
    fn broken_gallery_falls_back_to_demo() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "images = []").expect("write gallery");

        let app = build(Flags {
            gallery: Some(path),
            ..Flags::default()
        });

        assert_eq!(app.carousel.gallery(), &Gallery::demo());
    }

    #[test]
    fn cli_gallery_wins_over_config() {
        let dir = tempdir().expect("temp dir");
        let cli = dir.path().join("cli.toml");
        fs::write(
            &cli,
            concat!(
                "[[images]]\n",
                "id = 1\n",
                "url = \"file:///a.png\"\n",
                "uploaded_by = \"Cli\"\n",
                "upload_date = \"d\"\n",
            ),
        )
        .expect("write gallery");

        let resolved = resolve_gallery(Some(&cli), Some(Path::new("/does/not/exist.toml")));
        assert_eq!(resolved.get(0).map(|r| r.uploaded_by.as_str()), Some("Cli"));
    }

    #[test]
    fn title_is_localized() {
        let app = build(Flags {
            lang: Some("fr".to_string()),
            ..Flags::default()
        });
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn light_mode_selects_light_theme() {
        let app = build(Flags::default());
        assert_eq!(app.theme(), Theme::Light);
    }
}
