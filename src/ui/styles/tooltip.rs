// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips label the icon-only carousel controls, so they use an inverted
//! surface that stays readable over both the panel and the image.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use crate::ui::theming::is_dark;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Style for tooltip container with good contrast and shadow.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (bg_color, text_color) = if is_dark(theme) {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// tooltip::styled(close_button, i18n.tr("carousel-close"), tooltip::Position::Left)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_inverts_theme_background() {
        let Some(Background::Color(on_light)) = tooltip_container(&Theme::Light).background else {
            panic!("expected color background")
        };
        let Some(Background::Color(on_dark)) = tooltip_container(&Theme::Dark).background else {
            panic!("expected color background")
        };
        assert!(on_light.r < 0.5);
        assert!(on_dark.r > 0.5);
    }

    #[test]
    fn tooltip_container_has_text_color_and_shadow() {
        let style = tooltip_container(&Theme::Light);
        assert!(style.text_color.is_some());
        assert!(style.shadow.blur_radius > 0.0);
    }
}
