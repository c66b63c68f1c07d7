// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents. Handles are created once and cached
//! with `OnceLock`. Each icon is tinted with a color picked from the active
//! [`ColorScheme`] at draw time, so the same glyph works on light and dark
//! surfaces.
//!
//! Icons use generic visual names describing the glyph, not the action
//! context (e.g., `chevron_left` not `previous_image`).

use crate::ui::theming::ColorScheme;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a tinted, square `Svg` widget.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>(size: f32, color: Tint) -> Svg<'a, Theme> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.into_bytes()));
            tinted(handle.clone(), size, color)
        }
    };
}

/// Picks an icon color from the active scheme.
pub type Tint = fn(&ColorScheme) -> Color;

fn tinted<'a>(handle: Handle, size: f32, tint: Tint) -> Svg<'a, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(tint(&ColorScheme::for_theme(theme))),
        })
}

const OUTLINE_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="black">"#;

define_icon!(
    chevron_left,
    format!(
        r#"{OUTLINE_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="M15.75 19.5 8.25 12l7.5-7.5"/></svg>"#
    ),
    "Chevron pointing left."
);

define_icon!(
    chevron_right,
    format!(
        r#"{OUTLINE_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="m8.25 4.5 7.5 7.5-7.5 7.5"/></svg>"#
    ),
    "Chevron pointing right."
);

define_icon!(
    x_mark,
    format!(
        r#"{OUTLINE_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="M6 18 18 6M6 6l12 12"/></svg>"#
    ),
    "Diagonal cross."
);

define_icon!(
    arrow_path,
    format!(
        r#"{OUTLINE_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0 3.181 3.183a8.25 8.25 0 0 0 11.667 0l3.181-3.183m-4.991-2.691V5.25a2.25 2.25 0 0 0-2.25-2.25H6.75a2.25 2.25 0 0 0-2.25 2.25v6.75"/></svg>"#
    ),
    "Circular arrows."
);

define_icon!(
    camera,
    format!(
        r#"{OUTLINE_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="M6.827 6.175A2.31 2.31 0 0 1 5.186 7.23c-.38.054-.757.112-1.134.175C2.999 7.58 2.25 8.507 2.25 9.574V18a2.25 2.25 0 0 0 2.25 2.25h15A2.25 2.25 0 0 0 21.75 18V9.574c0-1.067-.75-1.994-1.802-2.169a47.865 47.865 0 0 0-1.134-.175 2.31 2.31 0 0 1-1.64-1.055l-.822-1.316a2.192 2.192 0 0 0-1.736-1.039 48.776 48.776 0 0 0-5.232 0 2.192 2.192 0 0 0-1.736 1.039l-.821 1.316Z"/><path stroke-linecap="round" stroke-linejoin="round" d="M16.5 12.75a4.5 4.5 0 1 1-9 0 4.5 4.5 0 0 1 9 0ZM18.75 10.5h.008v.008h-.008V10.5Z"/></svg>"#
    ),
    "Photo camera outline."
);

define_icon!(
    photo,
    String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" fill="black" viewBox="0 0 20 18"><path d="M18 0H2a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V2a2 2 0 0 0-2-2Zm-5.5 4a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Zm4.376 10.481A1 1 0 0 1 16 15H4a1 1 0 0 1-.895-1.447l3.5-7A1 1 0 0 1 7.468 6a.965.965 0 0 1 .9.5l2.775 4.757 1.546-1.887a1 1 0 0 1 1.618.1l2.541 4a1 1 0 0 1 .028 1.011Z"/></svg>"#
    ),
    "Filled picture frame with a mountain and sun."
);
