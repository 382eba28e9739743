//! Application layer coordinating state, events, and actions.
//!
//! This module defines the console's interaction logic, sitting between the
//! runtime (terminal, timers, HTTP tasks) and the domain layer. Nothing in here
//! performs I/O: it decides, the runtime does.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Keys / Timers → Events → handle_event → State Mutations → Actions → Runtime
//!                             ↑                                         ↓
//!                             └──────── Query / Submission outcomes ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: The Idle / Searching / `ResultsShown` state machine
//! - [`debounce`]: Debounce tickets and stale-response generations
//! - [`results`]: The displayed result list and selection cursor
//! - [`session`]: Submission counter and in-flight submission tracking
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::{handle_event, AppState, Event};
//! use huelio_console::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(Theme::default(), Duration::from_millis(150), true);
//! let (render, actions) = handle_event(&mut state, &Event::ArrowDown)?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), huelio_console::ConsoleError>(())
//! ```

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod results;
pub mod session;
pub mod state;

pub use actions::Action;
pub use debounce::QueryDebouncer;
pub use handler::{handle_event, Event};
pub use modes::ConsoleMode;
pub use results::{Direction, ResultList};
pub use session::SessionState;
pub use state::AppState;
