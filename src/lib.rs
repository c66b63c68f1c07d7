// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a modal image carousel built with the Iced GUI framework.
//!
//! A small shell page opens a gallery viewer with wrap-around navigation,
//! wheel and pinch zoom, and drag-to-pan. Translations use Fluent and user
//! preferences live in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
