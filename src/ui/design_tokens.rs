// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_carousel::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Backdrop behind the carousel panel
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

    // Accent colors (red scale)
    pub const ACCENT_300: Color = Color::from_rgb(0.988, 0.647, 0.647);
    pub const ACCENT_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const ACCENT_700: Color = Color::from_rgb(0.725, 0.110, 0.110);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Floating controls over the image (navigation, reset)
    pub const CONTROL: f32 = 0.7;

    /// Modal backdrop dimming the page behind the carousel
    pub const BACKDROP: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 40.0;

    /// Maximum width of the carousel panel
    pub const PANEL_MAX_WIDTH: f32 = 896.0;

    /// Fraction of the window height the carousel panel may use
    pub const PANEL_MAX_HEIGHT_RATIO: f32 = 0.9;

    /// Initial window size
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Page heading of the shell
    //! - Body: Descriptions and captions
    //! - Caption: Secondary, supporting text

    /// Extra large title - Shell heading
    pub const TITLE_XL: f32 = 40.0;

    /// Small title - Caption uploader line
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Shell description, button labels
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Tooltips
    pub const BODY: f32 = 14.0;

    /// Caption - Upload date
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Caption separator
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color {
            a: 0.5,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 40.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CONTROL > 0.0 && opacity::CONTROL < opacity::BACKDROP);
    assert!(opacity::BACKDROP < opacity::OPAQUE);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PANEL_MAX_HEIGHT_RATIO > 0.0 && sizing::PANEL_MAX_HEIGHT_RATIO <= 1.0);
    assert!(sizing::WINDOW_WIDTH > sizing::PANEL_MAX_WIDTH);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_SM);
    assert!(typography::TITLE_SM >= typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);

    // Color validation
    assert!(palette::ACCENT_600.r >= 0.0 && palette::ACCENT_600.r <= 1.0);
};
