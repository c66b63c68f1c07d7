// SPDX-License-Identifier: MPL-2.0
//! Modal image carousel with wrap-around navigation, wheel and pinch zoom,
//! and drag-to-pan.
//!
//! # Structure
//!
//! - [`component`] - State, messages and the update loop
//! - [`navigation`] - Active index, loading flag and load tickets
//! - [`transform`] - Zoom/pan state machine (`Idle`, `Zoomed`, `Dragging`)
//! - [`surface`] - Canvas program drawing the image and reading raw input
//! - [`view`] - Widget tree around the surface

pub mod component;
pub mod navigation;
pub mod surface;
pub mod transform;
pub mod view;

pub use component::{key_message, Effect, Message, Session, State};
pub use navigation::LoadTicket;
pub use transform::ZoomPhase;
pub use view::{view, ViewEnv};
