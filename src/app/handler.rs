//! Event handling and state transition logic.
//!
//! This module implements the input controller: it processes key presses,
//! debounce timer expiries and backend completions, translating them into state
//! changes and action sequences. It is the primary control flow coordinator for
//! the console.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the keyboard, the debounce timer or backend tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its components
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Editing**: `Char`, `Backspace`, `ClearInput`, `Escape`
//! - **Navigation**: `ArrowUp`, `ArrowDown`
//! - **Dispatch**: `Enter`
//! - **Timers**: `DebounceElapsed`, `Tick`
//! - **Backend**: `QueryCompleted`, `SubmissionCompleted`
//! - **Terminal**: `Resize`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::{handle_event, Action, AppState, Event};
//! use huelio_console::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(Theme::default(), Duration::from_millis(150), false);
//! let (render, actions) = handle_event(&mut state, &Event::Char('k'))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::ScheduleQuery { .. }));
//! # Ok::<(), huelio_console::ConsoleError>(())
//! ```

use crate::app::modes::ConsoleMode;
use crate::app::results::Direction;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ResultSet;

/// Events triggered by user input, timers, or backend completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them one at a time, in arrival
/// order.
#[derive(Debug)]
pub enum Event {
    /// Appends a printable character to the search text.
    Char(char),
    /// Removes the last character of the search text.
    Backspace,
    /// Empties the search text (Ctrl+U).
    ClearInput,
    /// Clears a non-empty search, or quits when the search is already empty.
    Escape,
    /// Moves the selection one row up, stopping at the first row.
    ArrowUp,
    /// Moves the selection one row down, stopping at the last row.
    ArrowDown,
    /// Submits the selected candidate.
    Enter,
    /// Exits the console unconditionally (Ctrl+C).
    Quit,

    /// The debounce timer armed for `ticket` expired.
    DebounceElapsed {
        /// Ticket passed with the matching `Action::ScheduleQuery`.
        ticket: u64,
    },

    /// A query issued by `Action::IssueQuery` finished.
    QueryCompleted {
        /// Generation of the query this outcome belongs to.
        generation: u64,
        /// Parsed results, or the transport/parse failure.
        outcome: Result<ResultSet>,
    },

    /// A submission issued by `Action::Submit` finished.
    SubmissionCompleted {
        /// `Ok` when the backend answered with a success status.
        outcome: Result<()>,
    },

    /// Periodic tick driving the placeholder rotation.
    Tick,
    /// The terminal was resized.
    Resize,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A flag telling the runtime whether the screen must be redrawn, plus the
/// actions to execute in order. The action list is empty when the event has
/// no side effects (stale response, navigation on an empty list, ...).
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for handlers
/// that need to consult storage or configuration.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?event, mode = ?state.mode).entered();

    match event {
        Event::Char(c) => {
            state.search_text.push(*c);
            tracing::trace!(query = %state.search_text, char = %c, "search text updated");
            Ok((true, text_changed(state)))
        }
        Event::Backspace => {
            if state.search_text.pop().is_none() && state.mode == ConsoleMode::Idle {
                return Ok((false, vec![]));
            }
            Ok((true, text_changed(state)))
        }
        Event::ClearInput => {
            if state.search_text.is_empty() && state.mode == ConsoleMode::Idle {
                return Ok((false, vec![]));
            }
            state.search_text.clear();
            Ok((true, text_changed(state)))
        }
        Event::Escape => {
            if state.search_text.is_empty() {
                tracing::debug!("escape on empty search, quitting");
                return Ok((false, vec![Action::Quit]));
            }
            tracing::debug!(query = %state.search_text, "escape clears search");
            state.search_text.clear();
            Ok((true, text_changed(state)))
        }
        Event::ArrowUp => Ok((state.results.move_selection(Direction::Up), vec![])),
        Event::ArrowDown => Ok((state.results.move_selection(Direction::Down), vec![])),
        Event::Enter => {
            let Some(candidate) = state.results.selected() else {
                tracing::debug!("enter with no selection");
                return Ok((false, vec![]));
            };
            let payload = candidate.payload.clone();
            let description = candidate.describe();

            if !state.session.begin_submission() {
                tracing::debug!("submission already in flight, ignoring enter");
                return Ok((false, vec![]));
            }

            tracing::info!(candidate = %description, "submitting action");
            state.status = None;
            Ok((true, vec![Action::Submit { payload }]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::DebounceElapsed { ticket } => {
            let Some(generation) = state.debouncer.fire(*ticket) else {
                tracing::trace!(ticket, "debounce ticket superseded");
                return Ok((false, vec![]));
            };

            // Read the live text: it may have changed since the timer was armed.
            let term = state.search_text.clone();
            tracing::debug!(generation, term = %term, "issuing query");
            Ok((false, vec![Action::IssueQuery { generation, term }]))
        }
        Event::QueryCompleted { generation, outcome } => {
            if !state.debouncer.accept(*generation) {
                tracing::debug!(
                    generation,
                    latest = state.debouncer.last_generation(),
                    "discarding stale query response"
                );
                return Ok((false, vec![]));
            }

            state.mode = ConsoleMode::ResultsShown;
            state.query_failed = outcome.is_err();
            match outcome {
                Ok(results) => {
                    tracing::debug!(generation, count = results.len(), "installing results");
                    state.results.install(results.clone());
                }
                Err(e) => {
                    tracing::warn!(generation, error = %e, "query failed, keeping previous results");
                }
            }
            Ok((true, vec![]))
        }
        Event::SubmissionCompleted { outcome } => match outcome {
            Ok(()) => {
                let dismiss_welcome = state.session.submission_succeeded();
                tracing::info!(
                    submissions = state.session.submissions(),
                    dismiss_welcome,
                    "submission succeeded"
                );

                let mut actions = reset_search(state);
                if dismiss_welcome {
                    actions.push(Action::PersistWelcomeDismissed);
                }
                actions.push(Action::FocusInput);
                Ok((true, actions))
            }
            Err(e) => {
                state.session.submission_failed();
                tracing::warn!(error = %e, "submission failed, keeping search state");
                state.status = Some(e.to_string());
                Ok((true, vec![Action::FocusInput]))
            }
        },
        Event::Tick => {
            state.rotate_placeholder();
            Ok((state.search_text.is_empty(), vec![]))
        }
        Event::Resize => Ok((true, vec![])),
    }
}

/// Reacts to any change of the search text.
///
/// Empty text clears results immediately; anything else re-arms the debounce
/// timer.
fn text_changed(state: &mut AppState) -> Vec<Action> {
    state.status = None;

    if state.search_text.is_empty() {
        tracing::debug!("search text emptied, clearing results");
        return reset_search(state);
    }

    let ticket = state.debouncer.text_changed();
    state.mode = ConsoleMode::Searching;
    vec![Action::ScheduleQuery {
        ticket,
        delay: state.debouncer.delay(),
    }]
}

/// Empties text and results and drops any pending or in-flight query.
fn reset_search(state: &mut AppState) -> Vec<Action> {
    state.search_text.clear();
    state.results.clear();
    state.query_failed = false;
    state.debouncer.cancel();
    state.mode = ConsoleMode::Idle;
    vec![Action::CancelPendingQuery]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConsoleError;
    use crate::ui::Theme;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(Theme::default(), Duration::from_millis(150), false)
    }

    fn results(json: &str) -> ResultSet {
        ResultSet::from_json(json.as_bytes()).unwrap()
    }

    const TWO: &str = r#"[{"light":{"name":"Kitchen Ceiling"},"onoff":"on"},{"group":{"name":"Kitchen"},"scene":{"name":"Relax"}}]"#;

    fn type_text(state: &mut AppState, text: &str) -> Vec<Action> {
        text.chars()
            .flat_map(|c| handle_event(state, &Event::Char(c)).unwrap().1)
            .collect()
    }

    fn last_ticket(actions: &[Action]) -> u64 {
        actions
            .iter()
            .rev()
            .find_map(|a| match a {
                Action::ScheduleQuery { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("a scheduled query")
    }

    /// Types `text`, fires the debounce and delivers `body` as the response.
    fn search(state: &mut AppState, text: &str, body: &str) {
        let actions = type_text(state, text);
        let (_, issued) = handle_event(state, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        let Action::IssueQuery { generation, .. } = issued[0] else {
            panic!("expected query, got {issued:?}");
        };
        handle_event(state, &Event::QueryCompleted { generation, outcome: Ok(results(body)) }).unwrap();
    }

    #[test]
    fn typing_schedules_and_only_last_ticket_issues_query() {
        let mut s = state();
        let actions = type_text(&mut s, "kit");
        assert_eq!(actions.len(), 3);
        assert_eq!(s.mode, ConsoleMode::Searching);

        let (_, stale) = handle_event(&mut s, &Event::DebounceElapsed { ticket: 1 }).unwrap();
        assert!(stale.is_empty());

        let (_, issued) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        assert_eq!(issued, vec![Action::IssueQuery { generation: 1, term: "kit".into() }]);
    }

    #[test]
    fn query_uses_text_at_expiry() {
        let mut s = state();
        let actions = type_text(&mut s, "kitchen");
        s.search_text.push_str(" on");
        let (_, issued) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        assert_eq!(
            issued,
            vec![Action::IssueQuery { generation: 1, term: "kitchen on".into() }]
        );
    }

    #[test]
    fn backspace_to_empty_clears_synchronously() {
        let mut s = state();
        search(&mut s, "k", TWO);
        assert_eq!(s.results.len(), 2);

        let (render, actions) = handle_event(&mut s, &Event::Backspace).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::CancelPendingQuery]);
        assert!(s.results.is_empty());
        assert_eq!(s.mode, ConsoleMode::Idle);
    }

    #[test]
    fn backspace_on_idle_empty_input_is_a_noop() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, &Event::Backspace).unwrap(), (false, vec![]));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut s = state();
        let a1 = type_text(&mut s, "ki");
        let (_, q1) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&a1) }).unwrap();
        let a2 = type_text(&mut s, "t");
        let (_, q2) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&a2) }).unwrap();
        let (Action::IssueQuery { generation: g1, .. }, Action::IssueQuery { generation: g2, .. }) = (&q1[0], &q2[0]) else {
            panic!("expected two queries");
        };

        handle_event(&mut s, &Event::QueryCompleted { generation: *g2, outcome: Ok(results(TWO)) }).unwrap();
        let (render, _) = handle_event(
            &mut s,
            &Event::QueryCompleted {
                generation: *g1,
                outcome: Ok(results(r#"[{"light":{"name":"Old"},"onoff":"off"}]"#)),
            },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(s.results.len(), 2);
    }

    #[test]
    fn failed_query_keeps_previous_results() {
        let mut s = state();
        search(&mut s, "k", TWO);
        s.results.move_selection(Direction::Down);

        let actions = type_text(&mut s, "x");
        let (_, issued) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        let Action::IssueQuery { generation, .. } = issued[0] else { panic!() };
        handle_event(
            &mut s,
            &Event::QueryCompleted {
                generation,
                outcome: Err(ConsoleError::Transport("connection refused".into())),
            },
        )
        .unwrap();

        assert_eq!(s.results.len(), 2);
        assert_eq!(s.results.selected_index(), Some(1));
        assert_eq!(s.mode, ConsoleMode::ResultsShown);
        assert!(s.query_failed);
    }

    #[test]
    fn first_query_failing_shows_no_empty_state() {
        let mut s = state();
        let actions = type_text(&mut s, "kitchen");
        let (_, issued) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        let Action::IssueQuery { generation, .. } = issued[0] else { panic!() };
        handle_event(
            &mut s,
            &Event::QueryCompleted {
                generation,
                outcome: Err(ConsoleError::Parse("not an array".into())),
            },
        )
        .unwrap();

        assert!(s.results.is_empty());
        assert!(s.compute_viewmodel(24, 80).empty_state.is_none());

        let actions = type_text(&mut s, "x");
        let (_, issued) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        let Action::IssueQuery { generation, .. } = issued[0] else { panic!() };
        handle_event(&mut s, &Event::QueryCompleted { generation, outcome: Ok(results("[]")) }).unwrap();

        assert!(!s.query_failed);
        assert!(s.compute_viewmodel(24, 80).empty_state.is_some());
    }

    #[test]
    fn arrows_clamp_and_noop_without_results() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, &Event::ArrowDown).unwrap(), (false, vec![]));

        search(&mut s, "k", TWO);
        assert!(handle_event(&mut s, &Event::ArrowDown).unwrap().0);
        assert!(!handle_event(&mut s, &Event::ArrowDown).unwrap().0);
        assert_eq!(s.results.selected_index(), Some(1));
    }

    #[test]
    fn enter_submits_exact_payload_once() {
        let mut s = state();
        search(&mut s, "k", TWO);
        handle_event(&mut s, &Event::ArrowDown).unwrap();

        let (_, actions) = handle_event(&mut s, &Event::Enter).unwrap();
        let Action::Submit { payload } = &actions[0] else { panic!() };
        assert_eq!(payload.as_str(), r#"{"group":{"name":"Kitchen"},"scene":{"name":"Relax"}}"#);

        let (_, again) = handle_event(&mut s, &Event::Enter).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn enter_without_results_is_a_noop() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, &Event::Enter).unwrap(), (false, vec![]));
    }

    #[test]
    fn successful_submission_resets_and_refocuses() {
        let mut s = state();
        search(&mut s, "kitchen", TWO);
        handle_event(&mut s, &Event::Enter).unwrap();

        let (_, actions) = handle_event(&mut s, &Event::SubmissionCompleted { outcome: Ok(()) }).unwrap();
        assert_eq!(actions, vec![Action::CancelPendingQuery, Action::FocusInput]);
        assert!(s.search_text.is_empty());
        assert!(s.results.is_empty());
        assert_eq!(s.mode, ConsoleMode::Idle);
    }

    #[test]
    fn rejected_submission_preserves_state() {
        let mut s = state();
        search(&mut s, "kitchen", TWO);
        handle_event(&mut s, &Event::Enter).unwrap();

        let (_, actions) = handle_event(
            &mut s,
            &Event::SubmissionCompleted {
                outcome: Err(ConsoleError::SubmissionRejected { status: 500, message: "nope".into() }),
            },
        )
        .unwrap();

        assert_eq!(actions, vec![Action::FocusInput]);
        assert_eq!(s.search_text, "kitchen");
        assert_eq!(s.results.len(), 2);
        assert_eq!(s.mode, ConsoleMode::ResultsShown);
        assert!(s.status.as_deref().is_some_and(|m| m.contains("nope")));

        let (_, retry) = handle_event(&mut s, &Event::Enter).unwrap();
        assert!(matches!(retry[0], Action::Submit { .. }));
    }

    #[test]
    fn third_success_persists_welcome_dismissal() {
        let mut s = state();
        let mut persisted = 0;
        for _ in 0..4 {
            search(&mut s, "k", TWO);
            handle_event(&mut s, &Event::Enter).unwrap();
            let (_, actions) = handle_event(&mut s, &Event::SubmissionCompleted { outcome: Ok(()) }).unwrap();
            persisted += actions.iter().filter(|a| **a == Action::PersistWelcomeDismissed).count();
        }
        assert_eq!(persisted, 1);
        assert!(!s.session.show_welcome());
    }

    #[test]
    fn late_response_after_submit_reset_is_discarded() {
        let mut s = state();
        search(&mut s, "k", TWO);
        let actions = type_text(&mut s, "i");
        let (_, issued) = handle_event(&mut s, &Event::DebounceElapsed { ticket: last_ticket(&actions) }).unwrap();
        let Action::IssueQuery { generation, .. } = issued[0] else { panic!() };

        handle_event(&mut s, &Event::Enter).unwrap();
        handle_event(&mut s, &Event::SubmissionCompleted { outcome: Ok(()) }).unwrap();

        let (render, _) =
            handle_event(&mut s, &Event::QueryCompleted { generation, outcome: Ok(results(TWO)) }).unwrap();
        assert!(!render);
        assert!(s.results.is_empty());
    }

    #[test]
    fn escape_clears_then_quits() {
        let mut s = state();
        type_text(&mut s, "k");
        let (_, first) = handle_event(&mut s, &Event::Escape).unwrap();
        assert_eq!(first, vec![Action::CancelPendingQuery]);
        assert!(s.search_text.is_empty());

        let (_, second) = handle_event(&mut s, &Event::Escape).unwrap();
        assert_eq!(second, vec![Action::Quit]);
    }

    #[test]
    fn tick_rerenders_only_when_placeholder_visible() {
        let mut s = state();
        let before = s.placeholder();
        assert!(handle_event(&mut s, &Event::Tick).unwrap().0);
        assert_ne!(s.placeholder(), before);

        type_text(&mut s, "k");
        assert!(!handle_event(&mut s, &Event::Tick).unwrap().0);
    }
}
