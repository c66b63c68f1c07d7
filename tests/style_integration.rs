// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_carousel::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_carousel::ui::styles::{button, container};
    use iced_carousel::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed] {
                let _ = button::primary(&theme, status);
                let _ = button::control(&theme, status);
                let _ = button::close(&theme, status);
            }
        }
    }

    #[test]
    fn primary_button_uses_accent_red() {
        let style = button::primary(&Theme::Light, Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_600))
        );
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::BACKDROP;
        let _ = sizing::ICON_LG;
        assert!(sizing::PANEL_MAX_WIDTH > 0.0);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_panel.r > dark.surface_panel.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }

    #[test]
    fn backdrop_dims_regardless_of_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = container::backdrop(&theme);
            let Some(Background::Color(color)) = style.background else {
                panic!("backdrop should be a solid color");
            };
            assert_eq!(color.a, opacity::BACKDROP);
        }
    }
}
