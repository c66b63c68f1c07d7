// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and shared carousel fixtures.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::gallery::{Gallery, ImageRecord};
use crate::media::ImageData;
use image_rs::{Rgba, RgbaImage};
use std::path::Path;

/// Tolerance for scales produced by repeated wheel steps.
pub const SCALE_TOLERANCE: f32 = 1e-5;

/// A decoded 1x1 opaque white image.
pub fn pixel() -> ImageData {
    ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
}

/// Gallery of `len` records pointing at local files, numbered from 0.
pub fn local_gallery(len: usize) -> Gallery {
    let records = (0..len)
        .map(|i| {
            ImageRecord::new(
                i as i64,
                format!("file:///gallery/{i}.png"),
                "Tester",
                "2024-01-01",
            )
        })
        .collect();
    Gallery::new(records).expect("test gallery must not be empty")
}

/// Writes a solid-color PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]))
        .save(path)
        .expect("failed to write png");
}
