// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state machine for the carousel image.
//!
//! The transform has three phases:
//!
//! - **Idle**: scale is 1, position is the origin, no drag
//! - **Zoomed**: scale above 1, not dragging
//! - **Dragging**: scale above 1 with a drag anchor captured
//!
//! Every transition that brings the scale back to 1 goes through
//! [`Transform::reset`], so `scale == 1` always implies a centered image and
//! no active drag.

use crate::ui::state::{DragAnchor, PinchAnchor, Scale, WheelStep};
use iced::{Point, Vector};

/// Observable phase of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    Idle,
    Zoomed,
    Dragging,
}

/// Scale and translation applied to the active image.
///
/// `position` is expressed in scaled coordinates: the image is drawn with
/// `scale(s) translate(x, y)`, so the on-screen offset is `s * position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    scale: Scale,
    position: Vector,
    drag: Option<DragAnchor>,
    pinch: Option<PinchAnchor>,
    wheel_step: WheelStep,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(WheelStep::default())
    }
}

impl Transform {
    #[must_use]
    pub fn new(wheel_step: WheelStep) -> Self {
        Self {
            scale: Scale::IDENTITY,
            position: Vector::ZERO,
            drag: None,
            pinch: None,
            wheel_step,
        }
    }

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale.is_zoomed()
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        match (self.is_zoomed(), self.is_dragging()) {
            (false, _) => ZoomPhase::Idle,
            (true, false) => ZoomPhase::Zoomed,
            (true, true) => ZoomPhase::Dragging,
        }
    }

    /// Returns to the idle phase: scale 1, centered, no drag.
    ///
    /// The pinch anchor is left alone so fingers still on the screen can keep
    /// pinching after the image snaps back.
    pub fn reset(&mut self) {
        self.scale = Scale::IDENTITY;
        self.position = Vector::ZERO;
        self.drag = None;
    }

    /// Applies a new scale, collapsing to [`Transform::reset`] at the lower bound.
    fn set_scale(&mut self, scale: Scale) {
        if scale.is_zoomed() {
            self.scale = scale;
        } else {
            self.reset();
        }
    }

    /// Zooms by one fixed step: in for negative `delta_y`, out otherwise.
    ///
    /// The magnitude of `delta_y` is ignored.
    pub fn on_wheel(&mut self, delta_y: f32) {
        let next = if delta_y < 0.0 {
            self.scale.zoom_in(self.wheel_step)
        } else {
            self.scale.zoom_out(self.wheel_step)
        };
        self.set_scale(next);
    }

    /// Starts a drag when the image is magnified.
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.is_zoomed() {
            self.drag = Some(DragAnchor::new(point, self.position));
        }
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        if let Some(anchor) = self.drag {
            if self.is_zoomed() {
                self.position = anchor.position_for(point);
            }
        }
    }

    /// Ends an active drag. Pointer release and pointer leaving the surface
    /// share this transition.
    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    /// Handles the fingers currently on the surface when one lands.
    pub fn on_touch_start(&mut self, touches: &[Point]) {
        match touches {
            [first, second] => {
                self.pinch = PinchAnchor::new(*first, *second, self.scale);
            }
            [single] => self.on_pointer_down(*single),
            _ => {}
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) {
        match touches {
            [first, second] => {
                if let Some(pinch) = self.pinch {
                    self.set_scale(Scale::new(pinch.raw_scale_for(*first, *second)));
                }
            }
            [single] => self.on_pointer_move(*single),
            _ => {}
        }
    }

    /// Ends every touch gesture, regardless of fingers still down.
    pub fn on_touch_end(&mut self) {
        self.drag = None;
        self.pinch = None;
        if !self.is_zoomed() {
            self.reset();
        }
    }
}
