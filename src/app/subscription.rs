// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The shell itself listens to nothing; every subscription comes from the
//! carousel and only exists while it is open.

use super::Message;
use crate::ui::carousel;
use iced::Subscription;

/// Keyboard bindings and loading animation of the carousel.
pub fn create_carousel_subscription(carousel: &carousel::State) -> Subscription<Message> {
    carousel.subscription().map(Message::Carousel)
}
