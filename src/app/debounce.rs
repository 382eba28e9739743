//! Query debouncing and stale-response bookkeeping.
//!
//! [`QueryDebouncer`] never touches a clock. It hands out a ticket for every
//! edit, and the runtime arms a single-shot timer carrying that ticket. When the
//! timer fires, only the ticket of the *latest* edit turns into a query; older
//! tickets are ignored, so replacing the timer is equivalent to cancelling it
//! even if the old timer task already delivered its event.
//!
//! Each issued query gets a monotonically increasing generation. A response is
//! accepted only when its generation is the one currently outstanding. Any edit,
//! clear or reset drops the outstanding generation, so late responses from
//! superseded queries are discarded regardless of the order in which they
//! arrive.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::QueryDebouncer;
//! use std::time::Duration;
//!
//! let mut debouncer = QueryDebouncer::new(Duration::from_millis(150));
//! let first = debouncer.text_changed();
//! let second = debouncer.text_changed();
//!
//! assert_eq!(debouncer.fire(first), None);
//! let generation = debouncer.fire(second).unwrap();
//! assert!(debouncer.accept(generation));
//! ```

use std::time::Duration;

/// Coalesces edits into at most one outstanding query.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    delay: Duration,
    last_ticket: u64,
    pending: Option<u64>,
    last_generation: u64,
    in_flight: Option<u64>,
}

impl QueryDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_ticket: 0,
            pending: None,
            last_generation: 0,
            in_flight: None,
        }
    }

    /// Delay between the last edit and the query.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an edit and returns the ticket for the (re)scheduled timer.
    ///
    /// Replaces any pending ticket and invalidates the in-flight query.
    pub fn text_changed(&mut self) -> u64 {
        self.last_ticket += 1;
        self.pending = Some(self.last_ticket);
        self.in_flight = None;
        self.last_ticket
    }

    /// Drops the pending timer and the in-flight query.
    ///
    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self) -> bool {
        self.in_flight = None;
        self.pending.take().is_some()
    }

    /// Handles a timer expiry.
    ///
    /// Returns the generation of the query to issue if `ticket` belongs to the
    /// latest edit, `None` if the timer was superseded or cancelled.
    pub fn fire(&mut self, ticket: u64) -> Option<u64> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        self.last_generation += 1;
        self.in_flight = Some(self.last_generation);
        Some(self.last_generation)
    }

    /// Returns `true` and settles the in-flight query if `generation` is current.
    pub fn accept(&mut self, generation: u64) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` while a timer is pending or a query is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some() || self.in_flight.is_some()
    }

    /// Generation of the most recently issued query (0 before the first one).
    #[must_use]
    pub const fn last_generation(&self) -> u64 {
        self.last_generation
    }
}
