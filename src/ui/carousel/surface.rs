// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the active image and turns raw pointer,
//! wheel and finger events into carousel messages.

use super::component::Message;
use crate::media::ImageData;
use crate::ui::state::Scale;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Pointer bookkeeping kept by the canvas between events.
#[derive(Debug, Default)]
pub struct SurfaceState {
    /// Fingers on the surface, in the order they landed.
    fingers: Vec<(touch::Finger, Point)>,
    /// Whether the cursor was inside the surface on the last move.
    hovered: bool,
}

impl SurfaceState {
    fn touch_points(&self) -> Vec<Point> {
        self.fingers.iter().map(|(_, point)| *point).collect()
    }

    fn finger_mut(&mut self, id: touch::Finger) -> Option<&mut Point> {
        self.fingers
            .iter_mut()
            .find(|(finger, _)| *finger == id)
            .map(|(_, point)| point)
    }
}

/// Snapshot of everything the surface needs to draw one frame.
pub struct ImageSurface<'a> {
    pub image: Option<&'a ImageData>,
    pub scale: Scale,
    pub position: Vector,
    pub is_dragging: bool,
}

/// Size of an image fitted inside `bounds` without upscaling.
#[must_use]
pub fn contain_size(image: Size, bounds: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Size::ZERO;
    }
    let fit = (bounds.width / image.width)
        .min(bounds.height / image.height)
        .min(1.0)
        .max(0.0);
    Size::new(image.width * fit, image.height * fit)
}

/// Converts an Iced wheel delta into a browser-style `delta_y`, where
/// negative values mean "scroll up".
#[must_use]
pub fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

impl canvas::Program<Message> for ImageSurface<'_> {
    type State = SurfaceState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Wheel {
                        delta_y: wheel_delta_y(*delta),
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                state.hovered = true;
                Some(Action::publish(Message::PointerPressed(position)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // A levitating cursor sits on a control layered above the surface
                let over = cursor.position_over(bounds);
                let was_hovered = std::mem::replace(&mut state.hovered, over.is_some());

                match over {
                    Some(position) if self.is_dragging => {
                        Some(Action::publish(Message::PointerMoved(position)).and_capture())
                    }
                    None if was_hovered && self.is_dragging => {
                        Some(Action::publish(Message::PointerLeft))
                    }
                    _ => None,
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.is_dragging
                    .then(|| Action::publish(Message::PointerReleased))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.hovered = false;
                self.is_dragging.then(|| Action::publish(Message::PointerLeft))
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.fingers.retain(|(finger, _)| finger != id);
                state.fingers.push((*id, *position));
                Some(Action::publish(Message::TouchStarted(state.touch_points())).and_capture())
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                let point = state.finger_mut(*id)?;
                *point = *position;
                Some(Action::publish(Message::TouchMoved(state.touch_points())).and_capture())
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                let before = state.fingers.len();
                state.fingers.retain(|(finger, _)| finger != id);
                (state.fingers.len() != before)
                    .then(|| Action::publish(Message::TouchEnded).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(image) = self.image {
            let fitted = contain_size(
                Size::new(image.width as f32, image.height as f32),
                bounds.size(),
            );
            let scale = self.scale.value();
            let position = self.position;

            frame.with_clip(Rectangle::with_size(bounds.size()), |frame| {
                // scale(s) translate(x, y) around the surface center
                frame.translate(Vector::new(bounds.width / 2.0, bounds.height / 2.0));
                frame.scale(scale);
                frame.translate(position);
                frame.draw_image(
                    Rectangle::new(
                        Point::new(-fitted.width / 2.0, -fitted.height / 2.0),
                        fitted,
                    ),
                    &image.handle,
                );
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.is_dragging {
            mouse::Interaction::Grabbing
        } else if self.scale.is_zoomed() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
