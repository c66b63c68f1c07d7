// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom factor bounds of the carousel image surface
//! - **Wheel**: Per-notch zoom increment
//! - **Cache**: Decoded image cache size

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of an image shown at its fitted size.
pub const MIN_SCALE: f32 = 1.0;

/// Largest magnification reachable through wheel or pinch input.
pub const MAX_SCALE: f32 = 5.0;

/// Tolerance under which a scale is considered to be back at `MIN_SCALE`.
///
/// Repeated `± wheel_step` arithmetic on `f32` can leave values such as
/// `1.0000001`; these must still collapse to the idle state.
pub const SCALE_EPSILON: f32 = 1e-4;

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Default zoom increment applied per wheel event.
pub const DEFAULT_WHEEL_STEP: f32 = 0.1;

/// Minimum configurable wheel increment.
pub const MIN_WHEEL_STEP: f32 = 0.01;

/// Maximum configurable wheel increment.
pub const MAX_WHEEL_STEP: f32 = 1.0;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHED_IMAGES: usize = 8;

/// Minimum number of decoded images kept in memory.
pub const MIN_CACHED_IMAGES: usize = 1;

/// Maximum number of decoded images kept in memory.
pub const MAX_CACHED_IMAGES: usize = 32;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(SCALE_EPSILON < MIN_WHEEL_STEP);

    assert!(MIN_WHEEL_STEP > 0.0);
    assert!(MIN_WHEEL_STEP <= DEFAULT_WHEEL_STEP);
    assert!(DEFAULT_WHEEL_STEP <= MAX_WHEEL_STEP);

    assert!(MIN_CACHED_IMAGES > 0);
    assert!(MIN_CACHED_IMAGES <= DEFAULT_CACHED_IMAGES);
    assert!(DEFAULT_CACHED_IMAGES <= MAX_CACHED_IMAGES);
};
