// SPDX-License-Identifier: MPL-2.0
//! Zoom factor types for the carousel image surface.
//!
//! Both types clamp on construction so call sites never deal with
//! out-of-range values.

pub use crate::config::{
    DEFAULT_WHEEL_STEP, MAX_SCALE, MAX_WHEEL_STEP, MIN_SCALE, MIN_WHEEL_STEP, SCALE_EPSILON,
};

/// Magnification factor, guaranteed to be within `[MIN_SCALE, MAX_SCALE]`.
///
/// A scale of 1 shows the image at its fitted size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// The fitted, unmagnified scale.
    pub const IDENTITY: Self = Self(MIN_SCALE);

    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to [`Scale::IDENTITY`].
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::IDENTITY
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is magnified beyond its fitted size.
    ///
    /// Values within [`SCALE_EPSILON`] of 1 count as not magnified.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > MIN_SCALE + SCALE_EPSILON
    }

    /// Returns whether the scale sits at the upper bound.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Increases the scale by one wheel step.
    #[must_use]
    pub fn zoom_in(self, step: WheelStep) -> Self {
        Self::new(self.0 + step.value())
    }

    /// Decreases the scale by one wheel step.
    #[must_use]
    pub fn zoom_out(self, step: WheelStep) -> Self {
        Self::new(self.0 - step.value())
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Scale increment applied per wheel event, within `[MIN_WHEEL_STEP, MAX_WHEEL_STEP]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStep(f32);

impl WheelStep {
    /// Creates a new wheel step, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_WHEEL_STEP, MAX_WHEEL_STEP))
        } else {
            Self::default()
        }
    }

    /// Returns the raw increment.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for WheelStep {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_STEP)
    }
}
