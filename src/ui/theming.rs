// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes and the configured theme mode.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_panel: Color,
    pub surface_caption: Color,
    pub surface_placeholder: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub placeholder_glyph: Color,

    // Floating controls
    pub control_background: Color,
    pub control_hover: Color,
    pub control_text: Color,

    // Accent colors
    pub accent: Color,
    pub accent_hover: Color,
    pub accent_ring: Color,

    pub divider: Color,
    pub backdrop: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_50,
            surface_panel: palette::WHITE,
            surface_caption: palette::GRAY_50,
            surface_placeholder: palette::GRAY_200,

            text_primary: palette::GRAY_800,
            text_secondary: palette::GRAY_500,
            placeholder_glyph: palette::GRAY_400,

            control_background: Color {
                a: opacity::CONTROL,
                ..palette::WHITE
            },
            control_hover: palette::WHITE,
            control_text: palette::GRAY_800,

            accent: palette::ACCENT_600,
            accent_hover: palette::ACCENT_700,
            accent_ring: palette::ACCENT_300,

            divider: palette::GRAY_200,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_panel: palette::GRAY_800,
            surface_caption: palette::GRAY_900,
            surface_placeholder: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            placeholder_glyph: palette::GRAY_500,

            control_background: Color {
                a: opacity::CONTROL,
                ..palette::BLACK
            },
            control_hover: palette::BLACK,
            control_text: palette::GRAY_200,

            accent: palette::ACCENT_600,
            accent_hover: palette::ACCENT_700,
            accent_ring: palette::ACCENT_700,

            divider: palette::GRAY_700,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching an Iced theme, judged by its background luminance.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if is_dark(theme) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Returns true when the theme has a dark background.
#[must_use]
pub fn is_dark(theme: &Theme) -> bool {
    let bg = theme.extended_palette().background.base.color;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode to a built-in Iced theme.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
