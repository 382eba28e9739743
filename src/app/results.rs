//! The displayed result list and its selection cursor.

use crate::domain::{Candidate, ResultSet};

/// Direction of a selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Ordered candidates on screen plus the active index.
///
/// The selection is `None` exactly when the list is empty. Moves are clamped to
/// the list bounds and never wrap around.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    results: ResultSet,
    selected: Option<usize>,
}

impl ResultList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed list and selects the first candidate.
    pub fn install(&mut self, results: ResultSet) {
        self.selected = if results.is_empty() { None } else { Some(0) };
        self.results = results;
    }

    /// Moves the selection one row, staying put at either end.
    ///
    /// Returns `true` if the selection changed.
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        let last = self.results.len().saturating_sub(1);
        let next = match direction {
            Direction::Up => current.saturating_sub(1),
            Direction::Down => (current + 1).min(last),
        };
        self.selected = Some(next);
        next != current
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Candidate> {
        self.selected.and_then(|i| self.results.get(i))
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.results = ResultSet::default();
        self.selected = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }
}
