//! Single-shot debounce timer.

use crate::app::Event;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Owns at most one armed timer task.
///
/// Arming replaces the previous task; an aborted task never delivers its
/// event. A task that already fired has its event queued, which the handler
/// rejects by ticket.
#[derive(Debug)]
pub struct DebounceTimer {
    events: UnboundedSender<Event>,
    armed: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    #[must_use]
    pub const fn new(events: UnboundedSender<Event>) -> Self {
        Self { events, armed: None }
    }

    /// Arms the timer to send `Event::DebounceElapsed { ticket }` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: u64, delay: Duration) {
        self.cancel();

        let events = self.events.clone();
        self.armed = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(Event::DebounceElapsed { ticket });
        }));
    }

    /// Disarms the timer. No-op when nothing is armed.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.armed.take() {
            handle.abort();
        }
    }

    /// Returns `true` while an armed timer has not fired yet.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
