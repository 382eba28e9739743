//! Actions representing side effects to be executed by the console runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing key presses, timer expiries or
//! backend completions. Actions bridge pure state transitions and effectful
//! operations like arming timers, talking to the backend, or persisting state.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The runtime executes these
//! actions in order; anything asynchronous reports back as a new event.
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::CancelPendingQuery,
//!     Action::ScheduleQuery { ticket: 2, delay: Duration::from_millis(150) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::ActionPayload;
use std::time::Duration;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms the single-shot debounce timer.
    ///
    /// Any timer armed earlier is replaced. When it expires the runtime sends
    /// `Event::DebounceElapsed` with the same ticket.
    ScheduleQuery {
        /// Ticket identifying the edit that armed the timer.
        ticket: u64,
        /// Time to wait before expiry.
        delay: Duration,
    },

    /// Disarms the debounce timer, if any.
    CancelPendingQuery,

    /// Sends a search request to the backend.
    ///
    /// The outcome comes back as `Event::QueryCompleted` tagged with the same
    /// generation.
    IssueQuery {
        /// Generation used to detect stale responses.
        generation: u64,
        /// Search term, sent URL-encoded.
        term: String,
    },

    /// Posts a candidate's payload to the command endpoint, unchanged.
    ///
    /// The outcome comes back as `Event::SubmissionCompleted`.
    Submit {
        /// Exact JSON received for the candidate.
        payload: ActionPayload,
    },

    /// Persists the "welcome banner dismissed" flag.
    PersistWelcomeDismissed,

    /// Returns keyboard focus and the cursor to the search input.
    FocusInput,

    /// Stops the console loop and restores the terminal.
    Quit,
}
