// SPDX-License-Identifier: MPL-2.0
//! Decoding of raster images (PNG, JPEG, GIF, WebP, BMP) into renderable handles.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Approximate decoded size in bytes (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes encoded image bytes.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unsupported, the data is
/// corrupt, or the image has zero width or height.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}
