// SPDX-License-Identifier: MPL-2.0
//! Value types backing the carousel's zoom and pan state.
//!
//! They are kept apart from the carousel component so the arithmetic can be
//! tested without any widget machinery.

pub mod drag;
pub mod pinch;
pub mod zoom;

pub use drag::DragAnchor;
pub use pinch::PinchAnchor;
pub use zoom::{Scale, WheelStep};
