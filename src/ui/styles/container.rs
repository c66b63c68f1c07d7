// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page behind the shell content.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Dimmed backdrop covering the window while the carousel is open.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        ..Default::default()
    }
}

/// Carousel panel surface.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_panel)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Caption strip under the image, separated by a thin top rule.
pub fn caption(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_caption)),
        border: Border {
            color: colors.divider,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Grey loading placeholder, faded by `opacity` to pulse.
pub fn placeholder(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(Color {
                a: colors.surface_placeholder.a * opacity,
                ..colors.surface_placeholder
            })),
            text_color: Some(colors.placeholder_glyph),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::opacity;

    #[test]
    fn backdrop_uses_backdrop_opacity() {
        let style = backdrop(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected color background");
        };
        assert_eq!(color.a, opacity::BACKDROP);
    }

    #[test]
    fn placeholder_applies_pulse_opacity() {
        let style = placeholder(0.5)(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected color background");
        };
        assert!((color.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn panel_matches_theme() {
        let light = panel(&Theme::Light);
        let dark = panel(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
