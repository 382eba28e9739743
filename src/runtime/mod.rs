//! Async runtime executing the console's actions.
//!
//! The [`Console`] owns the application state and everything effectful around
//! it: the debounce timer, the backend, the client store and the terminal. All
//! inputs (key presses, timer expiries, backend completions, ticks) are turned
//! into [`Event`]s and handled one at a time on a single task, so state is never
//! shared across threads.
//!
//! ```text
//! crossterm EventStream ─┐
//! debounce timer task ───┼─→ Event → handle_event → Vec<Action> → execute
//! query / submit tasks ──┤                                          │
//! tick interval ─────────┘         spawned tasks report back ←──────┘
//! ```
//!
//! # Modules
//!
//! - [`input`]: crossterm key mapping
//! - [`timer`]: the single-shot debounce timer
//!
//! # Headless driving
//!
//! [`Console::dispatch`] feeds one event and [`Console::step`] waits for the
//! next internally generated one (timer, query or submission). Together they
//! drive the full pipeline without a terminal.

pub mod input;
pub mod timer;

pub use input::map_terminal_event;
pub use timer::DebounceTimer;

use crate::app::{handle_event, Action, AppState, Event};
use crate::client::LightingBackend;
use crate::domain::{ActionPayload, Result};
use crate::storage::ClientStore;
use crate::ui::{render, Frame};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::EventStream;
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use futures_util::StreamExt;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::Instrument;

/// Interval between placeholder rotations.
pub const TICK_INTERVAL: Duration = Duration::from_secs(3);

/// The running console: state plus the effects that drive it.
pub struct Console<B, S> {
    state: AppState,
    backend: Arc<B>,
    store: S,
    timer: DebounceTimer,
    events_tx: UnboundedSender<Event>,
    events_rx: UnboundedReceiver<Event>,
    input_focused: bool,
    quit: bool,
}

impl<B, S> Console<B, S>
where
    B: LightingBackend + 'static,
    S: ClientStore,
{
    #[must_use]
    pub fn new(state: AppState, backend: B, store: S) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state,
            backend: Arc::new(backend),
            store,
            timer: DebounceTimer::new(events_tx.clone()),
            events_tx,
            events_rx,
            input_focused: true,
            quit: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// `false` while a submission is in flight.
    #[must_use]
    pub const fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Returns `true` while the debounce timer is armed.
    #[must_use]
    pub fn query_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Handles one event and executes the resulting actions.
    ///
    /// Returns whether the screen must be redrawn. Handler errors are logged
    /// and the event is dropped.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match handle_event(&mut self.state, &event) {
            Ok((render, actions)) => {
                for action in actions {
                    self.execute(action);
                }
                render
            }
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
                false
            }
        }
    }

    /// Waits for the next timer or backend event and dispatches it.
    ///
    /// Returns whether the screen must be redrawn.
    pub async fn step(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    /// Renders the current state for a terminal of `rows` x `cols` cells.
    #[must_use]
    pub fn frame(&self, rows: usize, cols: usize) -> Frame {
        render(&self.state, rows, cols)
    }

    /// Runs the interactive loop until `Action::Quit`.
    ///
    /// The terminal must already be in raw mode; `out` receives the frames.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be queried or written to, or if
    /// the key event stream fails.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let mut keys = EventStream::new();
        let mut ticks = tokio::time::interval_at(tokio::time::Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        let mut needs_render = true;

        tracing::info!(mode = ?self.state.mode, "console started");

        while !self.quit {
            if needs_render {
                self.draw(out)?;
                needs_render = false;
            }

            let event = tokio::select! {
                Some(key) = keys.next() => match key {
                    Ok(raw) => match map_terminal_event(&raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Err(e) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                },
                Some(event) = self.events_rx.recv() => event,
                _ = ticks.tick() => Event::Tick,
            };

            needs_render |= self.dispatch(event);
        }

        tracing::info!(submissions = self.state.session.submissions(), "console stopped");
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        let frame = self.frame(usize::from(rows), usize::from(cols));
        let (row, col) = frame.cursor;

        queue!(out, Hide, Clear(ClearType::All))?;
        out.write_all(frame.text.as_bytes())?;
        queue!(
            out,
            MoveTo(
                u16::try_from(col.saturating_sub(1)).unwrap_or(u16::MAX),
                u16::try_from(row.saturating_sub(1)).unwrap_or(u16::MAX)
            )
        )?;
        if self.input_focused {
            queue!(out, Show)?;
        }
        out.flush()?;
        Ok(())
    }

    fn execute(&mut self, action: Action) {
        tracing::trace!(action = ?action, "executing action");

        match action {
            Action::ScheduleQuery { ticket, delay } => self.timer.schedule(ticket, delay),
            Action::CancelPendingQuery => self.timer.cancel(),
            Action::IssueQuery { generation, term } => self.spawn_query(generation, term),
            Action::Submit { payload } => {
                self.input_focused = false;
                self.spawn_submission(payload);
            }
            Action::PersistWelcomeDismissed => {
                let at = chrono::Utc::now().timestamp();
                match self.store.set_welcome_dismissed(at) {
                    Ok(()) => tracing::info!(at, "welcome banner dismissed"),
                    Err(e) => tracing::error!(error = %e, "failed to persist welcome dismissal"),
                }
            }
            Action::FocusInput => self.input_focused = true,
            Action::Quit => self.quit = true,
        }
    }

    fn spawn_query(&self, generation: u64, term: String) {
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        let span = tracing::debug_span!("query", generation, term = %term);

        tokio::spawn(
            async move {
                let outcome = backend.query(&term).await;
                if let Err(e) = &outcome {
                    tracing::warn!(error = %e, "query failed");
                }
                let _ = events.send(Event::QueryCompleted { generation, outcome });
            }
            .instrument(span),
        );
    }

    fn spawn_submission(&self, payload: ActionPayload) {
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        let span = tracing::debug_span!("submit");

        tokio::spawn(
            async move {
                let outcome = backend.submit(&payload).await;
                let _ = events.send(Event::SubmissionCompleted { outcome });
            }
            .instrument(span),
        );
    }
}

impl<B, S> std::fmt::Debug for Console<B, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("mode", &self.state.mode)
            .field("input_focused", &self.input_focused)
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}
