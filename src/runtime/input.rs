//! Terminal input mapping.
//!
//! Translates crossterm events into console [`Event`]s:
//!
//! - Printable characters → `Event::Char`
//! - `Backspace` → `Event::Backspace`
//! - `Ctrl+U` → `Event::ClearInput`
//! - `Up` / `Down` → selection movement
//! - `Enter` → `Event::Enter`
//! - `Esc` → `Event::Escape`
//! - `Ctrl+C` → `Event::Quit`
//! - Terminal resize → `Event::Resize`
//!
//! Everything else (mouse, focus, paste, other control chords) is ignored.

use crate::app::Event;
use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a terminal event to a console event, or `None` if it is ignored.
#[must_use]
pub fn map_terminal_event(event: &TerminalEvent) -> Option<Event> {
    match event {
        TerminalEvent::Key(key) => map_key(key),
        TerminalEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('u') => Some(Event::ClearInput),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if !c.is_control() => Some(Event::Char(c)),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Up => Some(Event::ArrowUp),
        KeyCode::Down => Some(Event::ArrowDown),
        KeyCode::Enter => Some(Event::Enter),
        KeyCode::Esc => Some(Event::Escape),
        _ => None,
    }
}
