// SPDX-License-Identifier: MPL-2.0
//! Image retrieval, decoding and caching for the carousel.

pub mod cache;
pub mod image;
pub mod loader;

pub use cache::ImageCache;
pub use image::{decode_image, ImageData};
pub use loader::{load, ImageSource};
