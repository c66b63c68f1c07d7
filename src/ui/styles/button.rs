// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Accent button used for the shell's primary action.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, ring) = match status {
        button::Status::Hovered => (colors.accent_hover, colors.accent_ring),
        button::Status::Pressed => (colors.accent_hover, colors.accent_ring),
        _ => (colors.accent, colors.accent),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: iced::Color::WHITE,
        border: Border {
            color: ring,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Round floating control drawn over the image (previous, next, reset, close).
pub fn control(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.control_hover,
        _ => colors.control_background,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.control_text,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Opaque round control used for the close button at the panel corner.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.surface_placeholder,
        _ => colors.surface_panel,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}
