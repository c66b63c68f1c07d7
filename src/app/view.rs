// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shell page is always drawn; the carousel is stacked on top of it
//! while open.

use super::Message;
use crate::i18n::I18n;
use crate::ui::carousel::{self, ViewEnv};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{Alignment, Color, Element, Font, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a carousel::State,
}

/// Renders the shell and, when open, the carousel above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let shell = view_shell(ctx.i18n);

    match carousel::view(ctx.carousel, ViewEnv { i18n: ctx.i18n }) {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(shell)
            .push(overlay.map(Message::Carousel))
            .into(),
        None => shell,
    }
}

fn view_shell(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("shell-title"))
        .size(typography::TITLE_XL)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let description = Text::new(i18n.tr("shell-description"))
        .size(typography::BODY_LG)
        .align_x(Alignment::Center)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });

    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::camera(sizing::ICON_MD, |_| Color::WHITE))
        .push(Text::new(i18n.tr("shell-open-gallery")).size(typography::BODY_LG));

    let open_button = button(label)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenGallery);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::PANEL_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(title)
        .push(description)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page)
        .into()
}
