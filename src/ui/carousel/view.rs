// SPDX-License-Identifier: MPL-2.0
//! Visual tree of the open carousel: backdrop, panel, image surface,
//! floating controls and caption.

use super::component::{Message, Session, State};
use super::surface::ImageSurface;
use crate::gallery::ImageRecord;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, mouse_area, opaque, text, tooltip, Canvas, Column, Container, Space, Stack, Text,
};
use iced::{Element, Font, Length, Theme};

/// Everything the carousel view needs besides its own state.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Renders the modal carousel, or `None` while it is hidden.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Option<Element<'a, Message>> {
    let session = state.session()?;
    let record = state.active_record()?;

    // Five percent of the window stays free above and below the panel
    let margin = ((1.0 - sizing::PANEL_MAX_HEIGHT_RATIO) * 10.0).round() as u16;
    let body = ((sizing::PANEL_MAX_HEIGHT_RATIO * 20.0).round() as u16).max(1);

    let panel = Container::new(panel_content(session, record, env.i18n))
        .width(Length::Fill)
        .max_width(sizing::PANEL_MAX_WIDTH)
        .height(Length::FillPortion(body))
        .style(styles::container::panel);
    let framed = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([0.0, spacing::MD])
        .push(Space::new().height(Length::FillPortion(margin)))
        .push(opaque(panel))
        .push(Space::new().height(Length::FillPortion(margin)));

    let backdrop = mouse_area(
        Container::new(framed)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close);

    Some(opaque(backdrop))
}

fn panel_content<'a>(
    session: &'a Session,
    record: &'a ImageRecord,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image_area(session, i18n))
        .push(caption(record, i18n));

    let close_button = button(icons::x_mark(sizing::ICON_MD, |colors| colors.text_secondary))
        .padding(spacing::XS)
        .style(styles::button::close)
        .on_press(Message::Close);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(
            Container::new(styles::tooltip::styled(
                close_button,
                i18n.tr("carousel-close"),
                tooltip::Position::Left,
            ))
            .width(Length::Fill)
            .padding(spacing::XS)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
        )
        .into()
}

fn image_area<'a>(session: &'a Session, i18n: &'a I18n) -> Element<'a, Message> {
    let surface = Canvas::new(ImageSurface {
        image: session.visible_image(),
        scale: session.scale(),
        position: session.position(),
        is_dragging: session.is_dragging(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface);

    if session.is_loading() {
        let glyph = icons::photo(sizing::ICON_XL, |colors| colors.placeholder_glyph);
        let placeholder = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(glyph)
            .push(
                Text::new(i18n.tr("carousel-loading"))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).placeholder_glyph),
                    }),
            );
        stack = stack.push(
            Container::new(placeholder)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::placeholder(session.pulse_opacity())),
        );
    }

    if session.scale().is_zoomed() {
        let reset = button(icons::arrow_path(sizing::ICON_MD, |colors| colors.control_text))
            .padding(spacing::XS)
            .style(styles::button::control)
            .on_press(Message::ResetZoom);

        stack = stack.push(
            Container::new(styles::tooltip::styled(
                reset,
                i18n.tr("carousel-reset-zoom"),
                tooltip::Position::Bottom,
            ))
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top),
        );
    }

    stack = stack
        .push(nav_control(
            icons::chevron_left(sizing::ICON_LG, |colors| colors.control_text),
            Message::Previous,
            i18n.tr("carousel-previous"),
            Horizontal::Left,
        ))
        .push(nav_control(
            icons::chevron_right(sizing::ICON_LG, |colors| colors.control_text),
            Message::Next,
            i18n.tr("carousel-next"),
            Horizontal::Right,
        ));

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn nav_control<'a>(
    icon: impl Into<Element<'a, Message>>,
    on_press: Message,
    label: String,
    side: Horizontal,
) -> Element<'a, Message> {
    let control = button(icon)
        .padding(spacing::XS)
        .style(styles::button::control)
        .on_press(on_press);

    let position = match side {
        Horizontal::Left => tooltip::Position::Right,
        _ => tooltip::Position::Left,
    };

    // Full-size layer so alignment can pin the button to the panel edge
    Container::new(styles::tooltip::styled(control, label, position))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn caption<'a>(record: &'a ImageRecord, i18n: &'a I18n) -> Element<'a, Message> {
    let uploader = Text::new(i18n.tr_with_args(
        "carousel-uploaded-by",
        &[("uploader", record.uploaded_by.as_str())],
    ))
    .size(typography::TITLE_SM)
    .font(Font {
        weight: Weight::Semibold,
        ..Font::DEFAULT
    });

    let date = Text::new(i18n.tr_with_args(
        "carousel-date",
        &[("date", record.upload_date.as_str())],
    ))
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    });

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(uploader)
            .push(date),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .style(styles::container::caption)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;
    use crate::ui::state::WheelStep;

    #[test]
    fn hidden_carousel_renders_nothing() {
        let state = State::new(Gallery::demo(), WheelStep::default(), 2);
        let i18n = I18n::default();
        assert!(view(&state, ViewEnv { i18n: &i18n }).is_none());
    }

    #[test]
    fn open_carousel_renders_overlay() {
        let mut state = State::new(Gallery::demo(), WheelStep::default(), 2);
        let _ = state.set_visible(true);
        let i18n = I18n::default();
        assert!(view(&state, ViewEnv { i18n: &i18n }).is_some());
    }

    #[test]
    fn panel_height_portions_match_ratio() {
        let margin = ((1.0 - sizing::PANEL_MAX_HEIGHT_RATIO) * 10.0).round() as u16;
        let body = (sizing::PANEL_MAX_HEIGHT_RATIO * 20.0).round() as u16;
        assert_eq!((margin, body), (1, 18));
    }
}
