// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.

use super::navigation::{LoadTicket, Navigation, TicketCounter};
use super::transform::{Transform, ZoomPhase};
use crate::error::Error;
use crate::gallery::{Gallery, ImageRecord};
use crate::media::{self, ImageCache, ImageData};
use crate::ui::state::{Scale, WheelStep};
use iced::{event, keyboard, time, Point, Subscription, Task, Vector};
use std::time::Duration;

/// Interval between loading-placeholder animation frames.
const PULSE_INTERVAL: Duration = Duration::from_millis(50);

/// Fraction of a pulse cycle advanced per tick (two-second cycle).
const PULSE_STEP: f32 = 0.025;

/// Messages emitted by carousel widgets, the keyboard and image loads.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    ResetZoom,
    /// Browser-style wheel delta: negative means zoom in.
    Wheel {
        delta_y: f32,
    },
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
    /// Fingers currently on the surface, in landing order.
    TouchStarted(Vec<Point>),
    TouchMoved(Vec<Point>),
    TouchEnded,
    ImageLoaded {
        ticket: LoadTicket,
        url: String,
        result: Result<ImageData, Error>,
    },
    PulseTick,
}

/// Side effects the application should perform after handling a carousel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked to dismiss the carousel.
    Close,
}

/// Per-opening viewer state, dropped when the carousel is hidden.
#[derive(Debug, Clone)]
pub struct Session {
    navigation: Navigation,
    transform: Transform,
    image: Option<ImageData>,
    pulse: f32,
    /// The pending load failed; the placeholder stays but stops pulsing.
    failed: bool,
}

impl Session {
    fn open(len: usize, ticket: LoadTicket, wheel_step: WheelStep) -> Self {
        Self {
            navigation: Navigation::open(len, ticket),
            transform: Transform::new(wheel_step),
            image: None,
            pulse: 0.0,
            failed: false,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.navigation.active_index()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.navigation.is_loading()
    }

    /// Ticket of the load the session is waiting for.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        self.navigation.pending()
    }

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.transform.scale()
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        self.transform.position()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.transform.is_dragging()
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.transform.phase()
    }

    /// Whether the loading placeholder is animating.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.is_loading() && !self.failed
    }

    /// Image to draw, hidden while a load is pending.
    #[must_use]
    pub fn visible_image(&self) -> Option<&ImageData> {
        if self.is_loading() {
            None
        } else {
            self.image.as_ref()
        }
    }

    /// Loading placeholder opacity in `[0.5, 1.0]`.
    #[must_use]
    pub fn pulse_opacity(&self) -> f32 {
        0.75 + 0.25 * (self.pulse * std::f32::consts::TAU).cos()
    }
}

/// Complete carousel component state.
#[derive(Debug)]
pub struct State {
    gallery: Gallery,
    session: Option<Session>,
    tickets: TicketCounter,
    cache: ImageCache,
    wheel_step: WheelStep,
}

impl State {
    #[must_use]
    pub fn new(gallery: Gallery, wheel_step: WheelStep, cache_capacity: usize) -> Self {
        Self {
            gallery,
            session: None,
            tickets: TicketCounter::default(),
            cache: ImageCache::new(cache_capacity),
            wheel_step,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Record shown by the current session.
    #[must_use]
    pub fn active_record(&self) -> Option<&ImageRecord> {
        self.session
            .as_ref()
            .and_then(|session| self.gallery.get(session.active_index()))
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Applies the shell's visibility flag.
    ///
    /// A hidden-to-visible transition starts a fresh session on the first
    /// image; hiding drops the session. Repeating the current value does
    /// nothing.
    pub fn set_visible(&mut self, visible: bool) -> Task<Message> {
        match (self.session.is_some(), visible) {
            (false, true) => {
                let ticket = self.tickets.issue();
                self.session = Some(Session::open(self.gallery.len(), ticket, self.wheel_step));
                tracing::info!(images = self.gallery.len(), "carousel opened");
                self.load_active(ticket)
            }
            (true, false) => {
                self.session = None;
                let stats = self.cache.stats();
                tracing::info!("carousel closed");
                tracing::debug!(
                    cached = self.cache.len(),
                    capacity = self.cache.capacity(),
                    hits = stats.hits,
                    misses = stats.misses,
                    insertions = stats.insertions,
                    "image cache"
                );
                Task::none()
            }
            _ => Task::none(),
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        // Completions are cached even when they arrive after the session ended
        let message = match message {
            Message::ImageLoaded {
                ticket,
                url,
                result,
            } => {
                self.on_image_loaded(ticket, url, result);
                return (Effect::None, Task::none());
            }
            other => other,
        };

        let Some(session) = self.session.as_mut() else {
            return (Effect::None, Task::none());
        };

        match message {
            Message::Close => return (Effect::Close, Task::none()),
            Message::Next => return (Effect::None, self.navigate(true)),
            Message::Previous => return (Effect::None, self.navigate(false)),
            Message::ResetZoom => {
                session.transform.reset();
                tracing::debug!("zoom reset");
            }
            Message::Wheel { delta_y } => session.transform.on_wheel(delta_y),
            Message::PointerPressed(point) => session.transform.on_pointer_down(point),
            Message::PointerMoved(point) => session.transform.on_pointer_move(point),
            Message::PointerReleased | Message::PointerLeft => session.transform.on_pointer_up(),
            Message::TouchStarted(touches) => session.transform.on_touch_start(&touches),
            Message::TouchMoved(touches) => session.transform.on_touch_move(&touches),
            Message::TouchEnded => session.transform.on_touch_end(),
            Message::PulseTick => {
                session.pulse = (session.pulse + PULSE_STEP).fract();
            }
            Message::ImageLoaded { .. } => {}
        }

        (Effect::None, Task::none())
    }

    /// Moves to the next (or previous) image with a full zoom reset.
    fn navigate(&mut self, forward: bool) -> Task<Message> {
        let ticket = self.tickets.issue();
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };

        session.transform.reset();
        session.image = None;
        session.failed = false;
        if forward {
            session.navigation.next(ticket);
        } else {
            session.navigation.prev(ticket);
        }
        tracing::debug!(index = session.active_index(), "carousel navigated");

        self.load_active(ticket)
    }

    fn on_image_loaded(
        &mut self,
        ticket: LoadTicket,
        url: String,
        result: Result<ImageData, Error>,
    ) {
        match result {
            Ok(image) => {
                if !self.cache.contains(&url) {
                    self.cache.insert(url, image.clone());
                }
                if let Some(session) = self.session.as_mut() {
                    if session.navigation.on_image_loaded(ticket) {
                        tracing::debug!(
                            ticket = ticket.value(),
                            width = image.width,
                            height = image.height,
                            bytes = image.size_bytes(),
                            "image loaded"
                        );
                        session.image = Some(image);
                    } else {
                        tracing::debug!(ticket = ticket.value(), "ignoring stale image load");
                    }
                }
            }
            Err(err) => {
                // The viewer stays in its loading state
                tracing::warn!(%url, error = %err, "failed to load image");
                if let Some(session) = self.session.as_mut() {
                    if session.navigation.pending() == Some(ticket) {
                        session.failed = true;
                    }
                }
            }
        }
    }

    /// Starts loading the active record under `ticket`, served from the cache when possible.
    fn load_active(&mut self, ticket: LoadTicket) -> Task<Message> {
        let Some(url) = self.active_record().map(|record| record.url.clone()) else {
            return Task::none();
        };

        if let Some(image) = self.cache.get(&url) {
            return Task::done(Message::ImageLoaded {
                ticket,
                url,
                result: Ok(image),
            });
        }

        Task::perform(media::load(url.clone()), move |result| Message::ImageLoaded {
            ticket,
            url,
            result,
        })
    }

    /// Keyboard bindings and the loading animation, active only while visible.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(session) = &self.session else {
            return Subscription::none();
        };

        let keys = event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    key_message(&key)
                }
                _ => None,
            }
        });

        let pulse = if session.is_pulsing() {
            time::every(PULSE_INTERVAL).map(|_| Message::PulseTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, pulse])
    }
}

/// Maps a pressed key to its carousel action.
#[must_use]
pub fn key_message(key: &keyboard::Key) -> Option<Message> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::Escape) => Some(Message::Close),
        keyboard::Key::Named(Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, local_gallery, pixel, SCALE_TOLERANCE};

    fn open_state(images: usize) -> State {
        let mut state = State::new(local_gallery(images), WheelStep::default(), 4);
        let _ = state.set_visible(true);
        state
    }

    fn session(state: &State) -> &Session {
        state.session().expect("carousel should be open")
    }

    fn pending(state: &State) -> LoadTicket {
        session(state)
            .pending_ticket()
            .expect("a load should be pending")
    }

    fn complete_load(state: &mut State) {
        let ticket = pending(state);
        let url = state.active_record().expect("record").url.clone();
        let _ = state.handle_message(Message::ImageLoaded {
            ticket,
            url,
            result: Ok(pixel()),
        });
    }

    fn zoom_to_three_and_drag(state: &mut State) {
        let _ = state.handle_message(Message::TouchStarted(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        ]));
        let _ = state.handle_message(Message::TouchMoved(vec![
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
        ]));
        let _ = state.handle_message(Message::TouchEnded);
        let _ = state.handle_message(Message::PointerPressed(Point::new(100.0, 100.0)));
        let _ = state.handle_message(Message::PointerMoved(Point::new(140.0, 80.0)));
    }

    #[test]
    fn opening_starts_fresh_session() {
        let state = open_state(5);
        let session = session(&state);
        assert_eq!(session.active_index(), 0);
        assert!(session.is_loading());
        assert_eq!(session.scale(), Scale::IDENTITY);
        assert_eq!(session.position(), Vector::ZERO);
        assert!(session.visible_image().is_none());
    }

    #[test]
    fn reopening_resets_previous_session() {
        let mut state = open_state(5);
        complete_load(&mut state);
        let _ = state.handle_message(Message::Next);
        zoom_to_three_and_drag(&mut state);

        let _ = state.set_visible(false);
        assert!(!state.is_visible());
        let _ = state.set_visible(true);

        let session = session(&state);
        assert_eq!(session.active_index(), 0);
        assert!(session.is_loading());
        assert_eq!(session.scale(), Scale::IDENTITY);
        assert!(!session.is_dragging());
    }

    #[test]
    fn navigation_resets_zoom_and_starts_loading() {
        let mut state = open_state(5);
        complete_load(&mut state);
        zoom_to_three_and_drag(&mut state);
        assert_abs_diff_eq!(session(&state).scale().value(), 3.0, epsilon = SCALE_TOLERANCE);
        assert_eq!(session(&state).position(), Vector::new(40.0, -20.0));

        let _ = state.handle_message(Message::Next);

        let session = session(&state);
        assert_eq!(session.active_index(), 1);
        assert!(session.is_loading());
        assert_eq!(session.scale(), Scale::IDENTITY);
        assert_eq!(session.position(), Vector::ZERO);
        assert!(!session.is_dragging());
    }

    #[test]
    fn close_is_reported_once_without_mutating_state() {
        let mut state = open_state(3);
        let _ = state.handle_message(Message::Next);

        let (effect, _) = state.handle_message(Message::Close);

        assert_eq!(effect, Effect::Close);
        assert_eq!(session(&state).active_index(), 1);
    }

    #[test]
    fn messages_are_ignored_while_hidden() {
        let mut state = open_state(3);
        let _ = state.set_visible(false);

        let (effect, _) = state.handle_message(Message::Close);
        assert_eq!(effect, Effect::None);
        let _ = state.handle_message(Message::Next);
        assert!(state.session().is_none());
    }

    #[test]
    fn stale_load_is_ignored_but_cached() {
        let mut state = open_state(3);
        let stale = pending(&state);
        let stale_url = state.active_record().expect("record").url.clone();
        let _ = state.handle_message(Message::Next);

        let _ = state.handle_message(Message::ImageLoaded {
            ticket: stale,
            url: stale_url.clone(),
            result: Ok(pixel()),
        });

        assert!(session(&state).is_loading());
        assert!(state.cache().contains(&stale_url));
    }

    #[test]
    fn load_from_previous_session_cannot_finish_new_one() {
        let mut state = open_state(3);
        let old = pending(&state);
        let url = state.active_record().expect("record").url.clone();
        let _ = state.set_visible(false);
        let _ = state.set_visible(true);

        let _ = state.handle_message(Message::ImageLoaded {
            ticket: old,
            url,
            result: Ok(pixel()),
        });

        assert!(session(&state).is_loading());
    }

    #[test]
    fn failed_load_keeps_loading_state() {
        let mut state = open_state(2);
        let ticket = pending(&state);
        let _ = state.handle_message(Message::ImageLoaded {
            ticket,
            url: "file:///gallery/0.png".to_string(),
            result: Err(Error::Decode("broken".to_string())),
        });

        assert!(session(&state).is_loading());
        assert!(session(&state).visible_image().is_none());
        assert!(!session(&state).is_pulsing());
        assert!(state.cache().is_empty());
    }

    #[test]
    fn stale_failure_keeps_pulsing() {
        let mut state = open_state(2);
        let stale = pending(&state);
        let _ = state.handle_message(Message::Next);

        let _ = state.handle_message(Message::ImageLoaded {
            ticket: stale,
            url: "file:///gallery/0.png".to_string(),
            result: Err(Error::Decode("broken".to_string())),
        });

        assert!(session(&state).is_pulsing());
    }

    #[test]
    fn navigating_after_failure_pulses_again() {
        let mut state = open_state(2);
        let ticket = pending(&state);
        let _ = state.handle_message(Message::ImageLoaded {
            ticket,
            url: "file:///gallery/0.png".to_string(),
            result: Err(Error::Decode("broken".to_string())),
        });
        assert!(!session(&state).is_pulsing());

        let _ = state.handle_message(Message::Next);

        assert!(session(&state).is_loading());
        assert!(session(&state).is_pulsing());
    }

    #[test]
    fn reopening_serves_cached_image() {
        let mut state = open_state(2);
        complete_load(&mut state);
        let _ = state.set_visible(false);

        let _ = state.set_visible(true);

        let stats = state.cache().stats();
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn completed_load_shows_image() {
        let mut state = open_state(2);
        complete_load(&mut state);

        let session = session(&state);
        assert!(!session.is_loading());
        assert!(session.visible_image().is_some());
    }

    #[test]
    fn wheel_and_reset_follow_transform() {
        let mut state = open_state(1);
        let _ = state.handle_message(Message::Wheel { delta_y: -120.0 });
        assert_eq!(session(&state).phase(), ZoomPhase::Zoomed);

        let _ = state.handle_message(Message::ResetZoom);
        assert_eq!(session(&state).phase(), ZoomPhase::Idle);
    }

    #[test]
    fn pointer_leave_ends_drag() {
        let mut state = open_state(2);
        zoom_to_three_and_drag(&mut state);
        assert!(session(&state).is_dragging());

        let _ = state.handle_message(Message::PointerLeft);
        assert!(!session(&state).is_dragging());
        assert_eq!(session(&state).phase(), ZoomPhase::Zoomed);
    }

    #[test]
    fn pulse_wraps_within_cycle() {
        let mut state = open_state(1);
        for _ in 0..100 {
            let _ = state.handle_message(Message::PulseTick);
        }
        let opacity = session(&state).pulse_opacity();
        assert!((0.5..=1.0).contains(&opacity));
    }

    #[test]
    fn keys_map_to_actions() {
        use keyboard::key::Named;

        assert!(matches!(
            key_message(&keyboard::Key::Named(Named::Escape)),
            Some(Message::Close)
        ));
        assert!(matches!(
            key_message(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Message::Next)
        ));
        assert!(matches!(
            key_message(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Message::Previous)
        ));
        assert!(key_message(&keyboard::Key::Character("a".into())).is_none());
    }
}
