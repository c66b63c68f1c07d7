// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The shell's "open gallery" button was pressed.
    OpenGallery,
    Carousel(carousel::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery file replacing the configured or built-in one.
    pub gallery: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Start with the carousel already open.
    pub open: bool,
}
