// SPDX-License-Identifier: MPL-2.0
//! Active image index and loading lifecycle.

/// Identifies one image load request.
///
/// Tickets are issued by the carousel from a counter that survives closing
/// and reopening, so a completion can only ever match the request that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`LoadTicket`]s.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> LoadTicket {
        let ticket = LoadTicket(self.next);
        self.next = self.next.wrapping_add(1);
        ticket
    }
}

/// Which image is shown and whether it is still being fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active_index: usize,
    len: usize,
    is_loading: bool,
    pending: Option<LoadTicket>,
}

impl Navigation {
    /// Starts a session on the first image, loading under `ticket`.
    #[must_use]
    pub fn open(len: usize, ticket: LoadTicket) -> Self {
        Self {
            active_index: 0,
            len,
            is_loading: true,
            pending: Some(ticket),
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn pending(&self) -> Option<LoadTicket> {
        self.pending
    }

    /// Advances to the next image, wrapping to the first.
    ///
    /// A single-image gallery stays on index 0 but still reloads.
    pub fn next(&mut self, ticket: LoadTicket) {
        if self.len > 0 {
            self.active_index = (self.active_index + 1) % self.len;
        }
        self.begin_load(ticket);
    }

    /// Steps back to the previous image, wrapping to the last.
    pub fn prev(&mut self, ticket: LoadTicket) {
        if self.len > 0 {
            self.active_index = (self.active_index + self.len - 1) % self.len;
        }
        self.begin_load(ticket);
    }

    fn begin_load(&mut self, ticket: LoadTicket) {
        self.is_loading = true;
        self.pending = Some(ticket);
    }

    /// Marks the pending load complete.
    ///
    /// Returns `false` and changes nothing when `ticket` was superseded.
    pub fn on_image_loaded(&mut self, ticket: LoadTicket) -> bool {
        if self.pending == Some(ticket) {
            self.is_loading = false;
            true
        } else {
            false
        }
    }
}
