// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch anchor.

use super::zoom::Scale;
use iced::Point;

/// Finger distance and scale captured when a two-finger gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchAnchor {
    initial_distance: f32,
    initial_scale: Scale,
}

impl PinchAnchor {
    /// Starts a pinch between two fingers.
    ///
    /// Returns `None` when the fingers coincide, since no ratio can be
    /// derived from a zero distance.
    #[must_use]
    pub fn new(first: Point, second: Point, scale: Scale) -> Option<Self> {
        let initial_distance = first.distance(second);
        (initial_distance > 0.0 && initial_distance.is_finite()).then_some(Self {
            initial_distance,
            initial_scale: scale,
        })
    }

    /// Scale for the current finger positions, before clamping.
    #[must_use]
    pub fn raw_scale_for(self, first: Point, second: Point) -> f32 {
        first.distance(second) / self.initial_distance * self.initial_scale.value()
    }
}
