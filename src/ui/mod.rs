// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! application owns each component's state, forwards its messages and reacts
//! to the effects it reports.
//!
//! - [`carousel`] - Modal image viewer with zoom, pan and navigation
//! - [`state`] - Value types for zoom and pan (scale, wheel step, anchors)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - SVG icon rendering (visual primitives)

pub mod carousel;
pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod styles;
pub mod theming;
